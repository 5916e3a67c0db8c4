use std::sync::Arc;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};
use warden_application::Collaborator;
use warden_core::{CredentialVerifier, CredentialVerifierError};

/// Verifies passwords against argon2id PHC strings.
#[derive(Debug, Default, Clone)]
pub struct Argon2CredentialVerifier;

impl Argon2CredentialVerifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CredentialVerifier for Argon2CredentialVerifier {
    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn compare(
        &self,
        plain: &Secret<String>,
        hash: &Secret<String>,
    ) -> Result<bool, CredentialVerifierError> {
        let current_span: tracing::Span = tracing::Span::current();
        let plain = plain.clone();
        let hash = hash.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected_password_hash = PasswordHash::new(hash.expose_secret())
                    .map_err(|e| CredentialVerifierError::MalformedHash(e.to_string()))?;

                match hasher()?.verify_password(
                    plain.expose_secret().as_bytes(),
                    &expected_password_hash,
                ) {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(CredentialVerifierError::UnexpectedError(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| CredentialVerifierError::UnexpectedError(e.to_string()))?
    }
}

impl Collaborator for Argon2CredentialVerifier {
    fn credential_verifier(self: Arc<Self>) -> Option<Arc<dyn CredentialVerifier>> {
        Some(self)
    }
}

/// Hash a password for storage. Used when seeding user stores.
#[tracing::instrument(name = "Computing password hash", skip_all)]
pub async fn compute_password_hash(password: Secret<String>) -> Result<Secret<String>, String> {
    let current_span: tracing::Span = tracing::Span::current();

    let result = tokio::task::spawn_blocking(move || {
        current_span.in_scope(move || {
            let salt: SaltString = SaltString::generate(rand_core::OsRng);
            hasher()
                .map_err(|e| e.to_string())?
                .hash_password(password.expose_secret().as_bytes(), &salt)
                .map(|h| Secret::from(h.to_string()))
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?;

    result
}

fn hasher() -> Result<Argon2<'static>, CredentialVerifierError> {
    let params = Params::new(15000, 2, 1, None)
        .map_err(|e| CredentialVerifierError::UnexpectedError(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(value: &str) -> Secret<String> {
        Secret::new(value.to_owned())
    }

    #[tokio::test]
    async fn returns_true_for_matching_password() {
        let hash = compute_password_hash(secret("any_value")).await.unwrap();

        let is_valid = Argon2CredentialVerifier::new()
            .compare(&secret("any_value"), &hash)
            .await
            .unwrap();

        assert!(is_valid);
    }

    #[tokio::test]
    async fn returns_false_for_wrong_password() {
        let hash = compute_password_hash(secret("any_value")).await.unwrap();

        let is_valid = Argon2CredentialVerifier::new()
            .compare(&secret("other_value"), &hash)
            .await
            .unwrap();

        assert!(!is_valid);
    }

    #[tokio::test]
    async fn fails_for_malformed_hash() {
        let result = Argon2CredentialVerifier::new()
            .compare(&secret("any_value"), &secret("hash"))
            .await;

        assert!(matches!(
            result,
            Err(CredentialVerifierError::MalformedHash(_))
        ));
    }

    #[tokio::test]
    async fn hashes_are_salted() {
        let first = compute_password_hash(secret("any_value")).await.unwrap();
        let second = compute_password_hash(secret("any_value")).await.unwrap();

        assert_ne!(first.expose_secret(), second.expose_secret());
    }
}
