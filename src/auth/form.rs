//! Form drafts and local validation.
//!
//! Validation runs every rule and reports every violation, in a fixed order:
//! missing fields first (in form order), then email shape, then password
//! length, then confirmation match.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde::{Deserialize, Serialize};

use crate::api::types::{LoginRequest, RegisterRequest};

pub const MIN_PASSWORD_LEN: usize = 8;

pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match.";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.email, "Email");
        require(&mut errors, &self.password, "Password");
        check_email(&mut errors, &self.email);
        check_password_length(&mut errors, &self.password);
        errors
    }

    #[must_use]
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest { email: self.email.trim().to_owned(), password: self.password.clone() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpDraft {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpDraft {
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require(&mut errors, &self.first_name, "First name");
        require(&mut errors, &self.last_name, "Last name");
        require(&mut errors, &self.username, "Username");
        require(&mut errors, &self.email, "Email");
        require(&mut errors, &self.password, "Password");
        require(&mut errors, &self.confirm_password, "Password confirmation");
        check_email(&mut errors, &self.email);
        check_password_length(&mut errors, &self.password);
        if self.password != self.confirm_password {
            errors.push(PASSWORDS_DO_NOT_MATCH.to_owned());
        }
        errors
    }

    #[must_use]
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            firstname: self.first_name.trim().to_owned(),
            lastname: self.last_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            username: self.username.trim().to_owned(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }
}

fn require(errors: &mut Vec<String>, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{label} is required."));
    }
}

// Blank values are already reported as missing.
fn check_email(errors: &mut Vec<String>, email: &str) {
    let email = email.trim();
    if !email.is_empty() && !is_valid_email(email) {
        errors.push(INVALID_EMAIL.to_owned());
    }
}

fn check_password_length(errors: &mut Vec<String>, password: &str) {
    if !password.trim().is_empty() && password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(format!("Password must be at least {MIN_PASSWORD_LEN} characters."));
    }
}

/// `local@domain.tld` with no whitespace, exactly one `@`, and a dot inside
/// the domain that is neither its first nor last character.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len() && !domain.starts_with('.'),
        None => false,
    }
}
