//! Axum-specific route handlers.
//!
//! Routes extract data with Axum's extractors, call the framework-agnostic
//! handlers and convert results to Axum responses.

pub mod login;

pub use login::login;
