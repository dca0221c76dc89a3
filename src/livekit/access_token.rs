use crate::config::setting;
use crate::error::TokenError;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_LIVEKIT_URL: &str = "ws://localhost:7880";
pub const DEFAULT_API_KEY: &str = "devkey";
pub const DEFAULT_API_SECRET: &str = "APIsecretkey123";

/// Every token is valid for exactly one day after issuance.
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Represents the configuration required to mint LiveKit access tokens.
///
/// # Fields
///
/// - `url`: The media server URL handed back to clients alongside the token.
/// - `api_key`: The LiveKit API key, written into the token's `iss` claim.
/// - `api_secret`: The shared secret used to sign tokens with HS256. This is
///   the only durable secret the service holds and it is never printed.
#[derive(Clone)]
pub struct LiveKitConfig {
    pub url: String,
    pub api_key: String,
    pub api_secret: String,
}

impl LiveKitConfig {
    /// Reads `LIVEKIT_URL`, `LIVEKIT_API_KEY` and `LIVEKIT_API_SECRET` through
    /// `lookup`, substituting the development defaults for anything missing.
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            url: setting(lookup, "LIVEKIT_URL").unwrap_or_else(|| DEFAULT_LIVEKIT_URL.to_string()),
            api_key: setting(lookup, "LIVEKIT_API_KEY")
                .unwrap_or_else(|| DEFAULT_API_KEY.to_string()),
            api_secret: setting(lookup, "LIVEKIT_API_SECRET")
                .unwrap_or_else(|| DEFAULT_API_SECRET.to_string()),
        }
    }

    /// Issues a signed access token for `identity` to join `room`, valid for
    /// 24 hours from now.
    pub fn issue(&self, room: &str, identity: &str, name: Option<&str>) -> Result<String, TokenError> {
        self.issue_at(room, identity, name, Utc::now())
    }

    /// Issues a signed access token as of `issued_at`.
    ///
    /// The output depends only on the inputs, the timestamp (at second
    /// precision) and the configured key pair.
    pub fn issue_at(
        &self,
        room: &str,
        identity: &str,
        name: Option<&str>,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            iss: self.api_key.clone(),
            sub: identity.to_string(),
            nbf: issued_at.timestamp(),
            exp: (issued_at + Duration::seconds(TOKEN_TTL_SECS)).timestamp(),
            name: name.filter(|n| !n.is_empty()).map(str::to_string),
            video: VideoGrant::full_access(room),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.api_secret.as_bytes()),
        )
        .map_err(TokenError::Signing)
    }

    /// Checks the signature, issuer and expiry of `token` and returns its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.api_key.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.api_secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(TokenError::Invalid)
    }
}

impl fmt::Debug for LiveKitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveKitConfig")
            .field("url", &self.url)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Room permissions carried by an access token.
///
/// Every participant currently gets the same grant: join the named room,
/// publish and subscribe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    pub room_join: bool,
    pub room: String,
    pub can_publish: bool,
    pub can_subscribe: bool,
}

impl VideoGrant {
    pub fn full_access(room: &str) -> Self {
        Self {
            room_join: true,
            room: room.to_string(),
            can_publish: true,
            can_subscribe: true,
        }
    }
}

/// JWT claims in the layout the LiveKit server expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// API key that signed the token.
    pub iss: String,
    /// Participant identity.
    pub sub: String,
    pub nbf: i64,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub video: VideoGrant,
}
