//! Infrastructure adapters for the warden authentication service.
//!
//! - [`handlers`]: the framework-agnostic login handler
//! - [`authentication`]: argon2 credential verification and JWT issuance
//! - [`validation`]: email format validation
//! - [`persistence`]: user lookup and token persistence backends
//! - [`config`]: settings loaded from files and the environment

pub mod authentication;
pub mod config;
pub mod handlers;
pub mod persistence;
pub mod validation;
