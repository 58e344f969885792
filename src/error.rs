use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Error fetching image: {0}")]
    Network(String),
    #[error("Upstream responded with status {0}")]
    UpstreamStatus(StatusCode),
    #[error("Error reading upstream body: {0}")]
    Payload(String),
}

/// The only JSON shape this service ever emits.
#[derive(Debug, Serialize)]
pub struct ErrorPayload {
    pub error: String,
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorPayload {
            error: self.to_string(),
        })
    }
}

pub fn relay_error_send(e: awc::error::SendRequestError) -> RelayError {
    log::error!("Error fetching image: {}", e);
    RelayError::Network(e.to_string())
}

pub fn relay_error_status(status: StatusCode) -> RelayError {
    log::error!("Upstream returned error status: {}", status);
    RelayError::UpstreamStatus(status)
}

pub fn relay_error_payload(e: awc::error::PayloadError) -> RelayError {
    log::error!("Error reading upstream body: {}", e);
    RelayError::Payload(e.to_string())
}
