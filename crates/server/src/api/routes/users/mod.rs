use actix_web::web::ServiceConfig;

pub mod create_user;
pub mod get_user_history;

pub use create_user::*;
pub use get_user_history::*;

pub fn services(config: &mut ServiceConfig) {
    config.service(create_user).service(get_user_history);
}
