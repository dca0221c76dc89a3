//! # livekit_token_server
//!
//! `livekit_token_server` is a small Actix-Web backend that mints [LiveKit](https://livekit.io)
//! access tokens for a room and participant identity, and serves a front-end bundle from disk.
//!
//! ## ✅ Features
//!
//! - 🎥 `POST /token`: signed JWT (HS256) granting room join, publish and subscribe for 24 hours
//! - 💓 `GET /health`: liveness probe with the current server time
//! - 🗂️ Static files for every other path
//! - 🌍 Open CORS policy for browser clients
//! - 🧪 Environment file support (`.env`, `.env.production`, etc.)
//!
//! ## 🔧 Configuration
//!
//! Start the app like this:
//!
//! ```bash
//! cargo run -- .env.production
//! ```
//!
//! All values are optional; unset or empty variables use the development defaults.
//!
//! - `LIVEKIT_URL=ws://localhost:7880`
//! - `LIVEKIT_API_KEY=devkey`
//! - `LIVEKIT_API_SECRET=APIsecretkey123`
//! - `API_PORT=3000`
//! - `STATIC_DIR=./static`
//! - `RUST_LOG=info`
//!
//! ## 📚 Modules
//!
//! - [`livekit`](crate::livekit) — token issuance and the `/token` handler
//! - [`health`](crate::health) — health check
//! - [`server`](crate::server) — routes, CORS and the HTTP server
//! - [`config`](crate::config) — settings loaded once at startup
//! - [`utils`](crate::utils) — environment file loader
//!
//! ## 📄 License
//!
//! MIT License

pub mod config;
pub mod error;
pub mod health;
pub mod livekit;
pub mod server;
pub mod utils;
