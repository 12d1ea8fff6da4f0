use crate::shared::api_utils::{api_url, timeout, with_timeout, ApiError};
use crate::shared::config::ApiConfig;
use contracts::domain::a001_contact::{Contact, ContactDto, CreateContactResponse};
use gloo_net::http::Request;

/// Create a contact via `POST /contact`
///
/// Non-2xx statuses, transport failures, undecodable bodies and timeouts all
/// come back as `Err`.
pub async fn create_contact(config: &ApiConfig, dto: &ContactDto) -> Result<Contact, ApiError> {
    let url = api_url(config, &format!("/{}", Contact::collection_name()));
    with_timeout(
        post_contact(url, dto),
        timeout(config.timeout_ms),
        config.timeout_ms,
    )
    .await
}

async fn post_contact(url: String, dto: &ContactDto) -> Result<Contact, ApiError> {
    let response = Request::post(&url)
        .json(dto)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    into_contact(status, &body)
}

/// Map a `POST /contact` response to the created contact
fn into_contact(status: u16, body: &str) -> Result<Contact, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status(status));
    }

    let data: CreateContactResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(data.contact)
}
