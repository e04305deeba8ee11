pub mod middlewares;
pub mod routes;

use self::routes::{json_extractor_config, query_extractor_config};
use crate::configuration::Config;
use actix_web::{
    body::MessageBody,
    dev::{Server, ServiceFactory},
    web::Data,
    App, HttpServer,
};
use quests_db::Database;
use tracing_actix_web::TracingLogger;

pub fn run_server(config: Data<Config>, database: Data<Database>) -> std::io::Result<Server> {
    let server_address = format!("{}:{}", config.server.host, config.server.port);

    let server = HttpServer::new(move || get_app_router(&config, &database))
        .bind(&server_address)?
        .run();

    log::info!("Quests REST API running at http://{}", server_address);

    Ok(server)
}

pub fn get_app_router(
    config: &Data<Config>,
    db: &Data<Database>,
) -> App<
    impl ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(query_extractor_config())
        .app_data(json_extractor_config())
        .app_data(config.clone())
        .app_data(db.clone())
        .wrap(TracingLogger::default())
        .configure(routes::services)
}
