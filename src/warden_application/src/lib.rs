pub mod use_cases;

pub use use_cases::{
    authenticate::{
        AuthDependencies, AuthError, AuthUseCase, Authenticator, NoTokenPersister,
    },
    dependency_bundle::{Collaborator, DependencyBundle, DynAuthDependencies, DynAuthUseCase},
};
