use std::env;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceFactory;
use actix_web::web::Data;
use actix_web::App;
use quests_db::core::definitions::{CreateQuest, CreateUser, QuestsDatabase};
use quests_db::{create_quests_db_component, Database};
use quests_server::api::get_app_router;
use quests_server::configuration::Config;

pub async fn get_configuration() -> Config {
    let mut config = Config::new().expect("Couldn't read the configuration");
    config.database_url = create_test_db_url();

    config
}

/// Every test gets its own SQLite file so they can run in parallel
pub fn create_test_db_url() -> String {
    let db_name = uuid::Uuid::new_v4().to_string();
    let db_path = env::temp_dir().join(format!("{db_name}.db"));

    format!("sqlite://{}?mode=rwc", db_path.display())
}

pub async fn get_database(config: &Config) -> Database {
    create_quests_db_component(&config.database_url, true)
        .await
        .unwrap()
}

pub async fn build_app(
    config: &Config,
) -> App<
    impl ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let db = get_database(config).await;

    get_app_router(&Data::new(config.clone()), &Data::new(db))
}

#[allow(dead_code)]
pub async fn create_user(db: &Database, name: &str, balance: i64) -> i64 {
    db.create_user(&CreateUser { name, balance }).await.unwrap()
}

#[allow(dead_code)]
pub async fn create_quest(db: &Database, name: &str, cost: i64) -> i64 {
    db.create_quest(&CreateQuest {
        name,
        cost,
        steps: 1,
    })
    .await
    .unwrap()
}
