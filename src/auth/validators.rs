use std::sync::OnceLock;

use regex::Regex;

use super::models::{InvitationRegisterRequest, LoginRequest, RegisterRequest};
use crate::common::{ValidationResult, Validator};

const MIN_PASSWORD_LEN: usize = 8;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("literal email pattern"))
}

pub fn validate_email(email: &str, result: &mut ValidationResult) {
    if email.trim().is_empty() {
        result.add_error("email", "Email is required");
    } else if !email_regex().is_match(email) {
        result.add_error("email", "Email is not a valid address");
    }
}

pub fn validate_password(password: &str, result: &mut ValidationResult) {
    if password.len() < MIN_PASSWORD_LEN {
        result.add_error("password", "Password must be at least 8 characters");
    }
}

impl Validator for LoginRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        validate_email(&self.email, &mut result);
        if self.password.is_empty() {
            result.add_error("password", "Password is required");
        }
        result
    }
}

impl Validator for RegisterRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        validate_email(&self.email, &mut result);
        validate_password(&self.password, &mut result);
        if self.full_name.trim().is_empty() {
            result.add_error("nombre_completo", "Full name is required");
        }
        result
    }
}

impl Validator for InvitationRegisterRequest {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        validate_email(&self.email, &mut result);
        validate_password(&self.password, &mut result);
        if self.full_name.trim().is_empty() {
            result.add_error("nombre_completo", "Full name is required");
        }
        if self.invitation_token.trim().is_empty() {
            result.add_error("invitacion_token", "Invitation token is required");
        }
        result
    }
}
