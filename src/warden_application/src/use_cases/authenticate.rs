use std::sync::Arc;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use warden_core::{
    AccessToken, CredentialVerifier, CredentialVerifierError, Credentials, TokenIssuer,
    TokenIssuerError, TokenPersister, TokenPersisterError, User, UserLookup, UserLookupError,
    param,
};

/// Error types specific to the authentication use case.
///
/// Only the parameter variants originate here. Collaborator failures are
/// carried through unchanged.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("Missing param: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid param: {0}")]
    InvalidParameter(&'static str),
    #[error(transparent)]
    UserLookup(#[from] UserLookupError),
    #[error(transparent)]
    CredentialVerifier(#[from] CredentialVerifierError),
    #[error(transparent)]
    TokenIssuer(#[from] TokenIssuerError),
}

/// Persister type for use cases configured without token persistence.
///
/// It has no values, so `Option<NoTokenPersister>` is always `None`.
pub enum NoTokenPersister {}

#[async_trait]
impl TokenPersister for NoTokenPersister {
    async fn update(&self, _user: &User, _token: &AccessToken) -> Result<(), TokenPersisterError> {
        match *self {}
    }
}

/// Collaborators injected into [`AuthUseCase`].
///
/// The three required collaborators are plain fields, the persister is optional.
pub struct AuthDependencies<U, V, I, P = NoTokenPersister> {
    pub user_lookup: U,
    pub credential_verifier: V,
    pub token_issuer: I,
    pub token_persister: Option<P>,
}

impl<U, V, I> AuthDependencies<U, V, I, NoTokenPersister> {
    pub fn new(user_lookup: U, credential_verifier: V, token_issuer: I) -> Self {
        Self {
            user_lookup,
            credential_verifier,
            token_issuer,
            token_persister: None,
        }
    }
}

impl<U, V, I, P> AuthDependencies<U, V, I, P> {
    pub fn with_token_persister<Q>(self, token_persister: Q) -> AuthDependencies<U, V, I, Q> {
        AuthDependencies {
            user_lookup: self.user_lookup,
            credential_verifier: self.credential_verifier,
            token_issuer: self.token_issuer,
            token_persister: Some(token_persister),
        }
    }
}

/// Port the login handler drives. Implemented by [`AuthUseCase`].
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Returns `Ok(None)` when the credentials do not match a user.
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<AccessToken>, AuthError>;
}

#[async_trait]
impl<T: Authenticator + ?Sized> Authenticator for Arc<T> {
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<AccessToken>, AuthError> {
        (**self).authenticate(credentials).await
    }
}

/// Authentication use case - turns an email/password pair into an access token
pub struct AuthUseCase<U, V, I, P = NoTokenPersister>
where
    U: UserLookup,
    V: CredentialVerifier,
    I: TokenIssuer,
    P: TokenPersister,
{
    user_lookup: U,
    credential_verifier: V,
    token_issuer: I,
    token_persister: Option<P>,
}

impl<U, V, I, P> AuthUseCase<U, V, I, P>
where
    U: UserLookup,
    V: CredentialVerifier,
    I: TokenIssuer,
    P: TokenPersister,
{
    pub fn new(dependencies: AuthDependencies<U, V, I, P>) -> Self {
        Self {
            user_lookup: dependencies.user_lookup,
            credential_verifier: dependencies.credential_verifier,
            token_issuer: dependencies.token_issuer,
            token_persister: dependencies.token_persister,
        }
    }

    /// Execute the authentication use case
    ///
    /// # Arguments
    /// * `credentials` - Email and password supplied by the client
    ///
    /// # Returns
    /// `Some(token)` when the credentials match, `None` when they are denied.
    /// Empty inputs fail with `MissingParameter`; collaborator errors are
    /// returned as-is and stop the attempt.
    #[tracing::instrument(name = "AuthUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<AccessToken>, AuthError> {
        if !credentials.has_email() {
            return Err(AuthError::MissingParameter(param::EMAIL));
        }
        if !credentials.has_password() {
            return Err(AuthError::MissingParameter(param::PASSWORD));
        }

        let Some(user) = self
            .user_lookup
            .load(credentials.email().expose_secret())
            .await?
        else {
            tracing::debug!("No user registered for the supplied email");
            return Ok(None);
        };

        let is_valid = self
            .credential_verifier
            .compare(credentials.password(), user.password_hash())
            .await?;
        if !is_valid {
            tracing::debug!(user_id = %user.id(), "Password does not match");
            return Ok(None);
        }

        let access_token = self.token_issuer.generate(user.id()).await?;

        if let Some(token_persister) = &self.token_persister {
            self.persist_token(token_persister, &user, &access_token)
                .await;
        }

        Ok(Some(access_token))
    }

    /// Best-effort: the token is already valid, so a failed write is only logged.
    async fn persist_token(&self, token_persister: &P, user: &User, access_token: &AccessToken) {
        if let Err(e) = token_persister.update(user, access_token).await {
            tracing::warn!(user_id = %user.id(), error = %e, "Failed to persist access token");
        }
    }
}

#[async_trait]
impl<U, V, I, P> Authenticator for AuthUseCase<U, V, I, P>
where
    U: UserLookup,
    V: CredentialVerifier,
    I: TokenIssuer,
    P: TokenPersister,
{
    async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<AccessToken>, AuthError> {
        self.execute(credentials).await
    }
}
