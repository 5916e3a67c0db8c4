pub mod argon2_credential_verifier;
pub mod jwt_token_issuer;

pub use argon2_credential_verifier::{Argon2CredentialVerifier, compute_password_hash};
pub use jwt_token_issuer::{Claims, JwtConfig, JwtTokenIssuer, decode_access_token};
