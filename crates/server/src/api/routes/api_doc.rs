use super::errors;
use super::health;
use super::quests;
use super::users;
use actix_web::{get, web::ServiceConfig, HttpResponse};
use quests_db::core::definitions::{Quest, User, UserHistory};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

#[derive(OpenApi)]
#[openapi(
        info(title = "Quests Rewards API", description = "Users, quests and the rewards credited on quest completion"),
        paths(
                health::live,
                health::ready,
                users::create_user,
                users::get_user_history,
                quests::create_quest,
                quests::complete_quest,
        ),
        components(
                schemas(
                        User,
                        Quest,
                        UserHistory,
                        users::CreateUserRequest,
                        quests::CreateQuestRequest,
                        quests::CompleteQuestRequest,
                        errors::ErrorResponse,
                )
        ),
        tags(
            (name = "users", description = "Users endpoints."),
            (name = "quests", description = "Quests endpoints.")
        ),
)]
pub struct ApiDoc;

#[get("/api/docs/openapi.json")]
async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

pub(crate) fn services(config: &mut ServiceConfig) {
    config
        .service(openapi_json)
        .service(Redoc::with_url("/api/docs", ApiDoc::openapi()));
}
