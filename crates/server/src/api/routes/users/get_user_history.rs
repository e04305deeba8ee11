use actix_web::{get, web, HttpResponse};
use quests_db::Database;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::domain::users;

#[derive(Serialize, Deserialize, Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserHistoryQuery {
    pub user_id: i64,
}

/// Get the quests completed by a user.
///
/// Returns the completed quests along with the current user balance.
#[utoipa::path(
    params(UserHistoryQuery),
    responses(
        (status = 200, description = "Completed quests and balance", body = UserHistory),
        (status = 400, description = "Bad Request", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    )
)]
#[get("/user_history")]
pub async fn get_user_history(
    data: web::Data<Database>,
    query: web::Query<UserHistoryQuery>,
) -> HttpResponse {
    let db = data.into_inner();

    match users::get_user_history(db, query.user_id).await {
        Ok(history) => HttpResponse::Ok().json(history),
        Err(err) => HttpResponse::from_error(err),
    }
}
