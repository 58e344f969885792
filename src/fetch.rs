use std::time::Duration;

use actix_web::{http::StatusCode, web::Bytes};
use awc::Client;

use crate::error::{relay_error_payload, relay_error_send, relay_error_status, RelayError};

/// Issue a single GET against the upstream and buffer the whole body.
///
/// An error status (4xx/5xx) fails the fetch before the body is read. The
/// buffered body carries no size cap.
pub async fn fetch_bytes(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<(StatusCode, Bytes), RelayError> {
    let mut response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(relay_error_send)?;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(relay_error_status(status));
    }

    let body = response
        .body()
        .limit(usize::MAX)
        .await
        .map_err(relay_error_payload)?;

    Ok((status, body))
}
