use actix_web::{post, web, HttpResponse};
use quests_db::Database;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::quests;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CompleteQuestRequest {
    pub user_id: i64,
    pub quest_id: i64,
}

/// Complete a quest.
///
/// Credits the quest cost to the user balance. A quest can be completed once per user.
#[utoipa::path(
    request_body = CompleteQuestRequest,
    responses(
        (status = 200, description = "Quest completed and reward credited"),
        (status = 400, description = "Bad Request or quest already completed", body = ErrorResponse),
        (status = 404, description = "User or quest not found", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    )
)]
#[post("/complete_quest")]
pub async fn complete_quest(
    data: web::Data<Database>,
    complete_quest: web::Json<CompleteQuestRequest>,
) -> HttpResponse {
    let db = data.into_inner();
    let CompleteQuestRequest { user_id, quest_id } = complete_quest.into_inner();

    match quests::complete_quest(db, user_id, quest_id).await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(err) => HttpResponse::from_error(err),
    }
}
