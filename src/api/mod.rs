//! HTTP API for the clinic backend.
//!
//! Routes are nested under `/api/`; the frontend page and stylesheet are
//! served from the static directory at `/` and `/styles.css`.
//!
//! The router is composable: `clinic_api_router()` returns a `Router`
//! that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::clinic_api_router;
pub use server::{start_server_on, ApiServer, ServerError, ServerSession};
pub use types::ApiContext;
