//! # Warden - Login Service Library
//!
//! Facade crate re-exporting the public APIs of the warden components.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! warden = { path = "../warden" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Credentials`, `User`, `AccessToken`, `ApiError`
//! - **Ports**: `UserLookup`, `TokenPersister`, `CredentialVerifier`, `TokenIssuer`, `EmailValidator`
//! - **Use case**: `AuthUseCase` and its runtime-assembled form `DynAuthUseCase`
//! - **Adapters**: `LoginRouter`, `HashMapUserStore`, `PostgresUserStore`, `RedisTokenStore`, etc.
//! - **Service**: `AuthService` - serves `POST /login`

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types, ports and HTTP shapes
pub mod core {
    pub use warden_core::*;
}

pub use warden_core::{AccessToken, ApiError, Credentials, User, UserId};

// ============================================================================
// Ports
// ============================================================================

/// Port trait definitions
pub mod repositories {
    pub use warden_core::{
        CredentialVerifier, CredentialVerifierError, EmailValidator, EmailValidatorError,
        TokenIssuer, TokenIssuerError, TokenPersister, TokenPersisterError, UserLookup,
        UserLookupError,
    };
}

pub use repositories::{CredentialVerifier, EmailValidator, TokenIssuer, TokenPersister, UserLookup};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use warden_application::*;
}

pub use warden_application::{
    AuthDependencies, AuthError, AuthUseCase, Authenticator, Collaborator, DependencyBundle,
    DynAuthUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Framework-agnostic handlers
    pub mod handlers {
        pub use warden_adapters::handlers::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use warden_adapters::persistence::*;
    }

    /// Password hashing and JWT issuance
    pub mod authentication {
        pub use warden_adapters::authentication::*;
    }

    /// Email validation
    pub mod validation {
        pub use warden_adapters::validation::*;
    }

    /// Configuration
    pub mod config {
        pub use warden_adapters::config::*;
    }

    /// Axum bindings
    pub mod axum {
        pub use warden_axum::*;
    }
}

pub use warden_adapters::{
    authentication::{Argon2CredentialVerifier, JwtTokenIssuer, compute_password_hash},
    handlers::LoginRouter,
    persistence::{HashMapUserStore, PostgresUserStore, RedisTokenStore},
    validation::RegexEmailValidator,
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

pub use warden_auth_service::{AuthService, SetupError, dependency_bundle, login_router};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
