use actix_web::{post, web, HttpResponse};
use quests_db::{core::definitions::CreateQuest, Database};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::quests;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CreateQuestRequest {
    pub name: String,
    /// Reward credited to a user balance on completion
    pub cost: i64,
    pub steps: i64,
}

#[utoipa::path(
    request_body = CreateQuestRequest,
    responses(
        (status = 201, description = "Quest created", body = Quest),
        (status = 400, description = "Bad Request", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    )
)]
#[post("/create_quest")]
pub async fn create_quest(
    data: web::Data<Database>,
    quest: web::Json<CreateQuestRequest>,
) -> HttpResponse {
    let db = data.into_inner();
    let CreateQuestRequest { name, cost, steps } = quest.into_inner();

    let create_quest = CreateQuest {
        name: &name,
        cost,
        steps,
    };

    match quests::create_quest(db, create_quest).await {
        Ok(quest) => HttpResponse::Created().json(quest),
        Err(error) => HttpResponse::from_error(error),
    }
}
