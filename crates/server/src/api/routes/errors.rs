use crate::domain::quests::QuestError;
use actix_web::{error::JsonPayloadError, http::StatusCode, web, HttpResponse, ResponseError};
use quests_db::core::errors::DBError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Unknown Internal Error")]
    Unknown,
    #[error("Bad Request: {0}")]
    BadRequest(String),
}

impl ResponseError for CommonError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_response = ErrorResponse {
            code: status_code.as_u16(),
            message: self.to_string(),
        };
        HttpResponse::build(status_code).json(error_response)
    }
}

impl ResponseError for QuestError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::CommonError(base) => base.status_code(),
            Self::QuestAlreadyCompleted => StatusCode::BAD_REQUEST,
            Self::QuestNotFound | Self::UserNotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_response = ErrorResponse {
            code: status_code.as_u16(),
            message: self.to_string(),
        };
        HttpResponse::build(status_code).json(error_response)
    }
}

pub fn query_extractor_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _| CommonError::BadRequest(err.to_string()).into())
}

pub fn json_extractor_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _| match err {
        JsonPayloadError::Deserialize(des_err) => {
            let err_string = des_err.to_string();
            CommonError::BadRequest(err_string).into()
        }
        _ => CommonError::BadRequest(err.to_string()).into(),
    })
}

impl From<DBError> for QuestError {
    fn from(error: DBError) -> Self {
        match error {
            DBError::QuestAlreadyCompleted(_, _) => QuestError::QuestAlreadyCompleted,
            DBError::QuestNotFound(_) => QuestError::QuestNotFound,
            DBError::UserNotFound(_) => QuestError::UserNotFound,
            _ => {
                log::error!("> Database > {error}");
                QuestError::CommonError(CommonError::Unknown)
            }
        }
    }
}
