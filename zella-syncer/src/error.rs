use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

/*----- */
// Config Errors
/*----- */
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set in the environment or .env file")]
    MissingVar(&'static str),

    #[error("{var} is invalid: {reason}")]
    InvalidVar { var: &'static str, reason: String },
}

/*----- */
// Syncer Errors
/*----- */
#[derive(Debug, Error)]
pub enum SyncerError {
    #[error("Invalid date format. Please use YYYYMMDD format.")]
    InvalidDateFormat { date: String },

    #[error("Failed to render CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to render CSV: {0}")]
    CsvEncoding(#[from] std::string::FromUtf8Error),
}

impl ResponseError for SyncerError {
    fn status_code(&self) -> StatusCode {
        match self {
            SyncerError::InvalidDateFormat { .. } => StatusCode::BAD_REQUEST,
            SyncerError::Csv(_) | SyncerError::CsvEncoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": self.to_string()
        }))
    }
}
