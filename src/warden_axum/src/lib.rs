//! Axum integration for the warden authentication service.
//!
//! This crate provides the Axum side of the framework-agnostic login
//! handler defined in `warden_adapters`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  warden_core: HTTP shapes and builder    │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  warden_axum: Axum implementations       │
//! │  - AxumResponseBuilder                   │
//! │  - Axum route handlers                   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use warden_axum::routes;
//!
//! let app = Router::new()
//!     .route("/login", post(routes::login::<MyUseCase, RegexEmailValidator>))
//!     .with_state(Arc::new(login_router));
//! ```

pub mod adapters;
pub mod routes;

// Re-export for convenience
pub use adapters::{AxumResponseBuilder, response_builder};
