use crate::error::ApiError;
use crate::livekit::LiveKitConfig;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

/// Represents the JSON body of a token request.
///
/// Absent keys deserialize to empty strings so that a missing `roomName` or
/// `identity` is reported the same way as an empty one.
///
/// # Fields
///
/// - `room_name`: The room the participant wants to join (`roomName` on the wire).
/// - `identity`: The participant identity, unique within the room.
/// - `name`: An optional display name.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    #[serde(rename = "roomName", default)]
    pub room_name: String,
    #[serde(default)]
    pub identity: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Represents the response containing a LiveKit access token and the server
/// URL the client should connect to with it.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
    pub url: String,
    pub room_name: String,
    pub identity: String,
}

/// JSON extractor settings for `POST /token`.
///
/// The body is parsed whatever the `Content-Type`, and any parse failure is
/// turned into a `400 {"error": "Invalid request body"}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, req: &HttpRequest| {
            log::debug!("Rejected body for {}: {err}", req.path());
            ApiError::InvalidBody.into()
        })
}

/// Generates a LiveKit access token for the requested room and identity.
///
/// # Returns
///
/// `200` with a [`TokenResponse`] on success, `400` when `roomName` or
/// `identity` is empty, and `500` if signing fails. Signing errors are
/// logged here and never sent to the caller.
pub async fn generate_token(
    req: web::Json<TokenRequest>,
    config: web::Data<LiveKitConfig>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    if req.room_name.is_empty() || req.identity.is_empty() {
        return Err(ApiError::MissingFields);
    }

    let token = config
        .issue(&req.room_name, &req.identity, req.name.as_deref())
        .map_err(|e| {
            log::error!("Error generating token: {e}");
            ApiError::TokenGeneration
        })?;

    log::debug!(
        "Issued token for identity {} in room {}",
        req.identity,
        req.room_name
    );

    Ok(HttpResponse::Ok().json(TokenResponse {
        token,
        url: config.url.clone(),
        room_name: req.room_name,
        identity: req.identity,
    }))
}
