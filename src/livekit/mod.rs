//! LiveKit access tokens: the issuer and the HTTP handler in front of it.

pub mod access_token;
pub mod token_handler;

pub use access_token::{Claims, LiveKitConfig, VideoGrant};
pub use token_handler::{generate_token, TokenRequest, TokenResponse};
