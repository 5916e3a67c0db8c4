//! Framework-agnostic request handlers.
//!
//! Handlers take the HTTP shapes from `warden_core` and never fail: every
//! outcome, including errors, becomes an `HttpResponse`. Framework-specific
//! routes (Axum, ...) only translate between their own types and these shapes.

pub mod login;

pub use login::{LoginRouter, NoEmailValidator};
