//! HTTP transport: maps routes onto the user store.
//!
//! ## Routes
//!
//! - `GET /`: plain-text banner.
//! - `GET /health`: `{ "status": "ok" }`.
//! - `POST /user`: echo `{ name, age }` without storing it.
//! - `GET /users`, `POST /users`: list and create.
//! - `GET|PUT|DELETE /users/:id`: read, patch and remove one record.
//!
//! Everything else answers 404 `{ "error": "Route not found" }`.
//!
//! ## Example
//!
//! ```ignore
//! use user_api::http::{router, AppState};
//! use user_api::store::UserStore;
//!
//! let app = router(AppState::new(UserStore::seeded()));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! axum::serve(listener, app).await?;
//! ```

mod body;
mod handlers;
mod path;
mod response;

use axum::routing::{get, post};
use axum::Router;

use crate::store::UserStore;

pub use body::JsonBody;
pub use handlers::BANNER;
pub use path::UserId;

/// State shared by every handler of one router.
#[derive(Clone)]
pub struct AppState {
    pub store: UserStore,
}

impl AppState {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }
}

/// Starts from the seeded store (Alice and Bob).
impl Default for AppState {
    fn default() -> Self {
        Self::new(UserStore::seeded())
    }
}

/// Build the axum `Router` over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root).fallback(handlers::route_not_found))
        .route(
            "/health",
            get(handlers::health).fallback(handlers::route_not_found),
        )
        .route(
            "/user",
            post(handlers::echo_user).fallback(handlers::route_not_found),
        )
        .route(
            "/users",
            get(handlers::list_users)
                .post(handlers::create_user)
                .fallback(handlers::route_not_found),
        )
        .route(
            "/users/:id",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user)
                .fallback(handlers::route_not_found),
        )
        .fallback(handlers::route_not_found)
        .with_state(state)
}
