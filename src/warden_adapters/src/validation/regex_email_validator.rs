use regex::Regex;
use warden_core::{EmailValidator, EmailValidatorError};

const DEFAULT_EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Format check for email addresses backed by a regular expression.
#[derive(Debug, Clone)]
pub struct RegexEmailValidator {
    pattern: Regex,
}

impl RegexEmailValidator {
    pub fn new() -> Result<Self, regex::Error> {
        Self::with_pattern(DEFAULT_EMAIL_PATTERN)
    }

    pub fn with_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

#[async_trait::async_trait]
impl EmailValidator for RegexEmailValidator {
    async fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError> {
        Ok(self.pattern.is_match(email))
    }
}
