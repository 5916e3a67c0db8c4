//! Runtime assembly of [`AuthUseCase`] dependencies.
//!
//! Statically typed [`AuthDependencies`] cannot be misconfigured. When the
//! collaborators are chosen at runtime (for example from configuration) they
//! are handed over as `Arc<dyn Collaborator>` slots instead, and the bundle is
//! checked once when it is resolved. A slot can be empty, or it can hold an
//! object that does not offer the capability the slot needs; the two cases
//! are reported as `MissingParameter` and `InvalidParameter` respectively.

use std::sync::Arc;

use warden_core::{CredentialVerifier, TokenIssuer, TokenPersister, UserLookup, param};

use super::authenticate::{AuthDependencies, AuthError, AuthUseCase};

/// An object that can serve one or more collaborator roles.
///
/// Every accessor defaults to `None`; implementors override the ones for the
/// capabilities they provide by returning `Some(self)`.
pub trait Collaborator: Send + Sync {
    fn user_lookup(self: Arc<Self>) -> Option<Arc<dyn UserLookup>> {
        None
    }

    fn credential_verifier(self: Arc<Self>) -> Option<Arc<dyn CredentialVerifier>> {
        None
    }

    fn token_issuer(self: Arc<Self>) -> Option<Arc<dyn TokenIssuer>> {
        None
    }

    fn token_persister(self: Arc<Self>) -> Option<Arc<dyn TokenPersister>> {
        None
    }
}

pub type DynAuthDependencies = AuthDependencies<
    Arc<dyn UserLookup>,
    Arc<dyn CredentialVerifier>,
    Arc<dyn TokenIssuer>,
    Arc<dyn TokenPersister>,
>;

pub type DynAuthUseCase = AuthUseCase<
    Arc<dyn UserLookup>,
    Arc<dyn CredentialVerifier>,
    Arc<dyn TokenIssuer>,
    Arc<dyn TokenPersister>,
>;

#[derive(Default, Clone)]
pub struct DependencyBundle {
    pub user_lookup: Option<Arc<dyn Collaborator>>,
    pub credential_verifier: Option<Arc<dyn Collaborator>>,
    pub token_issuer: Option<Arc<dyn Collaborator>>,
    pub token_persister: Option<Arc<dyn Collaborator>>,
}

impl DependencyBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_lookup(mut self, collaborator: Arc<dyn Collaborator>) -> Self {
        self.user_lookup = Some(collaborator);
        self
    }

    pub fn with_credential_verifier(mut self, collaborator: Arc<dyn Collaborator>) -> Self {
        self.credential_verifier = Some(collaborator);
        self
    }

    pub fn with_token_issuer(mut self, collaborator: Arc<dyn Collaborator>) -> Self {
        self.token_issuer = Some(collaborator);
        self
    }

    pub fn with_token_persister(mut self, collaborator: Arc<dyn Collaborator>) -> Self {
        self.token_persister = Some(collaborator);
        self
    }

    /// Check every slot in order: user lookup, credential verifier, token
    /// issuer, then the optional token persister. The first failure wins.
    pub fn resolve(self) -> Result<DynAuthDependencies, AuthError> {
        let user_lookup = require(self.user_lookup, param::USER_LOOKUP, |c| c.user_lookup())?;
        let credential_verifier = require(
            self.credential_verifier,
            param::CREDENTIAL_VERIFIER,
            |c| c.credential_verifier(),
        )?;
        let token_issuer = require(self.token_issuer, param::TOKEN_ISSUER, |c| c.token_issuer())?;
        let token_persister = match self.token_persister {
            Some(collaborator) => Some(
                collaborator
                    .token_persister()
                    .ok_or(AuthError::InvalidParameter(param::TOKEN_PERSISTER))?,
            ),
            None => None,
        };

        Ok(AuthDependencies {
            user_lookup,
            credential_verifier,
            token_issuer,
            token_persister,
        })
    }
}

fn require<T: ?Sized>(
    slot: Option<Arc<dyn Collaborator>>,
    name: &'static str,
    capability: impl FnOnce(Arc<dyn Collaborator>) -> Option<Arc<T>>,
) -> Result<Arc<T>, AuthError> {
    let collaborator = slot.ok_or(AuthError::MissingParameter(name))?;
    capability(collaborator).ok_or_else(|| {
        tracing::error!(collaborator = name, "Collaborator lacks the required capability");
        AuthError::InvalidParameter(name)
    })
}

impl TryFrom<DependencyBundle> for DynAuthUseCase {
    type Error = AuthError;

    fn try_from(bundle: DependencyBundle) -> Result<Self, Self::Error> {
        Ok(AuthUseCase::new(bundle.resolve()?))
    }
}
