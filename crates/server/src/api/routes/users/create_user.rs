use actix_web::{post, web, HttpResponse};
use quests_db::{core::definitions::CreateUser, Database};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::users;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    /// Starting balance, taken as given
    pub balance: i64,
}

#[utoipa::path(
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Bad Request", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    )
)]
#[post("/create_user")]
pub async fn create_user(
    data: web::Data<Database>,
    user: web::Json<CreateUserRequest>,
) -> HttpResponse {
    let db = data.into_inner();
    let CreateUserRequest { name, balance } = user.into_inner();

    match users::create_user(db, CreateUser { name: &name, balance }).await {
        Ok(user) => HttpResponse::Created().json(user),
        Err(error) => HttpResponse::from_error(error),
    }
}
