use actix_web::{get, web, HttpResponse};
use awc::Client;
use log::info;
use serde::Deserialize;

use crate::error::RelayError;
use crate::fetch::fetch_bytes;
use crate::state::AppState;

#[derive(Deserialize, Clone, Debug)]
pub struct FetchParams {
    pub url: String,
}

#[get("/fetch-image")]
pub async fn fetch_image(
    client: web::Data<Client>,
    app_state: web::Data<AppState>,
    params: web::Query<FetchParams>,
) -> Result<HttpResponse, RelayError> {
    info!("Fetching image from URL: {}", params.url);

    let (status, body) =
        fetch_bytes(client.as_ref(), &params.url, app_state.request_timeout).await?;

    info!("Fetched image with status: {}", status);

    // Relayed bytes are always labeled image/png, whatever the upstream declared.
    Ok(HttpResponse::Ok().content_type("image/png").body(body))
}
