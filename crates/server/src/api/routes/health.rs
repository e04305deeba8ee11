use actix_web::{get, web, web::ServiceConfig, HttpResponse};
use quests_db::{core::definitions::QuestsDatabase, Database};

#[utoipa::path(
    responses(
        (status = 200, description = "Service is live")
    )
)]
#[get("/health/live")]
async fn live() -> HttpResponse {
    HttpResponse::Ok().json("alive")
}

#[utoipa::path(
    responses(
        (status = 200, description = "Database is reachable"),
        (status = 503, description = "Database is not reachable")
    )
)]
#[get("/health/ready")]
async fn ready(data: web::Data<Database>) -> HttpResponse {
    if data.ping().await {
        HttpResponse::Ok().json("ready")
    } else {
        log::error!("> health > database ping failed");
        HttpResponse::ServiceUnavailable().finish()
    }
}

pub fn services(config: &mut ServiceConfig) {
    config.service(live).service(ready);
}
