//! user_api is a small JSON HTTP service for CRUD over an in-memory user
//! collection.
//!
//! - [`store`] owns the records and the id counter.
//! - [`http`] builds the axum router and its handlers.
//! - [`startup`] binds a port with bounded retries and serves the router.
//! - [`config`] reads `PORT` and `HOST` from the environment.

pub mod config;
pub mod error;
pub mod http;
pub mod startup;
pub mod store;
pub mod telemetry;

pub use config::{Config, Env};
pub use error::{ApiError, StartupError, StoreError};
pub use http::{router, AppState};
pub use store::{User, UserPatch, UserStore};
