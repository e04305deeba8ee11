mod common;

use actix_web::http::StatusCode;
use actix_web::test::{call_service, init_service, read_body_json, TestRequest};
use common::*;
use quests_db::core::definitions::{QuestsDatabase, UserHistory};
use quests_server::api::routes::ErrorResponse;

#[actix_web::test]
async fn get_user_history_should_be_200() {
    let config = get_configuration().await;
    let db = get_database(&config).await;
    let app = init_service(build_app(&config).await).await;

    let user_id = create_user(&db, "Test User for History", 100).await;
    let quest_id = create_quest(&db, "Test Quest for History", 50).await;
    let other_quest_id = create_quest(&db, "Not completed", 20).await;

    db.complete_quest(user_id, quest_id).await.unwrap();

    let req = TestRequest::get()
        .uri(&format!("/user_history?user_id={user_id}"))
        .to_request();

    let response = call_service(&app, req).await;

    assert_eq!(response.status(), StatusCode::OK);

    let history: UserHistory = read_body_json(response).await;
    assert_eq!(history.quests.len(), 1);
    assert_eq!(history.quests[0].id, quest_id);
    assert_ne!(history.quests[0].id, other_quest_id);
    assert_eq!(history.balance, db.get_user(user_id).await.unwrap().balance);
    assert_eq!(history.balance, 150);
}

#[actix_web::test]
async fn get_user_history_without_completions_is_empty() {
    let config = get_configuration().await;
    let db = get_database(&config).await;
    let app = init_service(build_app(&config).await).await;

    let user_id = create_user(&db, "Newcomer", 30).await;

    let req = TestRequest::get()
        .uri(&format!("/user_history?user_id={user_id}"))
        .to_request();

    let response = call_service(&app, req).await;

    assert_eq!(response.status(), StatusCode::OK);

    let history: UserHistory = read_body_json(response).await;
    assert!(history.quests.is_empty());
    assert_eq!(history.balance, 30);
}

#[actix_web::test]
async fn get_user_history_should_be_404() {
    let config = get_configuration().await;
    let app = init_service(build_app(&config).await).await;

    let req = TestRequest::get()
        .uri("/user_history?user_id=12345")
        .to_request();

    let response = call_service(&app, req).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: ErrorResponse = read_body_json(response).await;
    assert_eq!(body.code, 404);
}

#[actix_web::test]
async fn get_user_history_should_be_400() {
    let config = get_configuration().await;
    let app = init_service(build_app(&config).await).await;

    let req = TestRequest::get()
        .uri("/user_history?user_id=abc")
        .to_request();

    let response = call_service(&app, req).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = read_body_json(response).await;
    assert!(body.message.contains("Bad Request:"));

    let req = TestRequest::get().uri("/user_history").to_request();

    let response = call_service(&app, req).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
