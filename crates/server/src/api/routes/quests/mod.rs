use actix_web::web::ServiceConfig;

pub mod complete_quest;
pub mod create_quest;

pub use complete_quest::*;
pub use create_quest::*;

pub fn services(config: &mut ServiceConfig) {
    config.service(create_quest).service(complete_quest);
}
