use secrecy::{ExposeSecret, Secret};

/// Email/password pair submitted for authentication.
///
/// No format validation happens here. Emptiness is checked by the use case,
/// format checks belong to an optional validator in front of it.
#[derive(Debug, Clone)]
pub struct Credentials {
    email: Secret<String>,
    password: Secret<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Secret::new(email.into()),
            password: Secret::new(password.into()),
        }
    }

    pub fn email(&self) -> &Secret<String> {
        &self.email
    }

    pub fn password(&self) -> &Secret<String> {
        &self.password
    }

    pub fn has_email(&self) -> bool {
        !self.email.expose_secret().is_empty()
    }

    pub fn has_password(&self) -> bool {
        !self.password.expose_secret().is_empty()
    }
}

impl From<(Secret<String>, Secret<String>)> for Credentials {
    fn from((email, password): (Secret<String>, Secret<String>)) -> Self {
        Self { email, password }
    }
}
