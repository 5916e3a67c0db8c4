pub mod regex_email_validator;

pub use regex_email_validator::RegexEmailValidator;
