//! JSON REST API for employers and student mood entries.
//!
//! Exposes an axum [`Router`] backed by any
//! [`placement_core::store::PlacementStore`]. Request logging, TLS, and
//! process setup are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = placement_api::api_router(Arc::new(store));
//! ```

pub mod employers;
pub mod error;
pub mod extract;
pub mod moods;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use placement_core::store::PlacementStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: PlacementStore + 'static,
{
  Router::new()
    // Employers
    .route("/employers", post(employers::create::<S>))
    .route("/employers/ids-names", get(employers::ids_and_names::<S>))
    .route(
      "/employers/{id}",
      get(employers::get_one::<S>)
        .put(employers::update_one::<S>)
        .delete(employers::delete_one::<S>),
    )
    // Moods
    .route("/moods", get(moods::list::<S>).post(moods::create::<S>))
    .route("/moods/{id}", get(moods::get_one::<S>))
    .with_state(store)
}
