//! JSON REST API for the Motley person registry.
//!
//! Exposes an axum [`Router`] backed by any
//! [`motley_core::store::PersonStore`]. Auth, TLS, and transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", motley_api::api_router(service.clone()))
//! ```

pub mod error;
pub mod persons;
pub mod service;

use axum::{Router, routing::get};
use motley_core::store::PersonStore;

pub use error::ApiError;
pub use service::{PersonRecord, PersonService, ServiceError};

/// Build a fully-materialised API router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router
/// regardless of its own state type.
pub fn api_router<S>(service: PersonService<S>) -> Router<()>
where
  S: PersonStore + 'static,
{
  Router::new()
    .route(
      "/persons",
      get(persons::list::<S>).post(persons::create::<S>),
    )
    .route("/persons/{id}", get(persons::get_one::<S>))
    .route("/persons/color/{name}", get(persons::by_color::<S>))
    .with_state(service)
}
