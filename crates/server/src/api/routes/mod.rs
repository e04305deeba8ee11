use actix_web::web::ServiceConfig;

pub mod api_doc;
pub mod errors;
mod health;
pub mod quests;
pub mod users;

pub use errors::{json_extractor_config, query_extractor_config, ErrorResponse};

pub(crate) fn services(config: &mut ServiceConfig) {
    api_doc::services(config);
    users::services(config);
    quests::services(config);
    health::services(config);
}
