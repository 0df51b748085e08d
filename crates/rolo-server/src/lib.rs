//! HTTP server for the Rolo contact directory.
//!
//! Exposes the contact service as a small JSON API. Handlers only decode
//! request bodies and map errors; all contact semantics live in
//! `rolo-service` and `rolo-store`.

pub mod config;
pub mod error;
pub mod handler;
pub mod request;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult, ServerError, ServerResult};
pub use router::build_router;
pub use server::RoloServer;
pub use state::{AppState, ServiceInfo};
