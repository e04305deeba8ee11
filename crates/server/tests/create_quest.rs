mod common;

use actix_web::http::{header::ContentType, StatusCode};
use actix_web::test::{call_service, init_service, read_body_json, TestRequest};
use common::*;
use quests_db::core::definitions::{Quest, QuestsDatabase};
use quests_server::api::routes::{quests::CreateQuestRequest, ErrorResponse};

#[actix_web::test]
async fn create_quest_should_be_201() {
    let config = get_configuration().await;
    let db = get_database(&config).await;
    let app = init_service(build_app(&config).await).await;

    let req = TestRequest::post()
        .uri("/create_quest")
        .set_json(CreateQuestRequest {
            name: "Test Quest".to_string(),
            cost: 50,
            steps: 1,
        })
        .to_request();

    let response = call_service(&app, req).await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let quest: Quest = read_body_json(response).await;
    assert_eq!(quest.name, "Test Quest");
    assert_eq!(quest.cost, 50);
    assert_eq!(quest.steps, 1);

    let stored = db.get_quest(quest.id).await.unwrap();
    assert_eq!(stored, quest);
}

#[actix_web::test]
async fn create_quest_accepts_negative_cost() {
    let config = get_configuration().await;
    let app = init_service(build_app(&config).await).await;

    let req = TestRequest::post()
        .uri("/create_quest")
        .set_json(CreateQuestRequest {
            name: "Penalty".to_string(),
            cost: -10,
            steps: 0,
        })
        .to_request();

    let response = call_service(&app, req).await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn create_quest_should_be_400() {
    let config = get_configuration().await;
    let app = init_service(build_app(&config).await).await;

    let req = TestRequest::post()
        .uri("/create_quest")
        .insert_header(ContentType::json())
        .set_payload(r#"{"name": "Missing cost", "steps": 1}"#)
        .to_request();

    let response = call_service(&app, req).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = read_body_json(response).await;
    assert_eq!(body.code, 400);
    assert!(body.message.contains("cost"));
}
