use super::models::{ClubCreate, MemberInvite};
use crate::auth::validators::validate_email;
use crate::common::{ValidationResult, Validator};

/// Roles the backend accepts for club members.
pub const ALLOWED_ROLES: &[&str] = &[
    "propietario",
    "administrador",
    "admin",
    "editor",
    "moderador",
    "gestor_eventos",
    "tesorero",
    "socio",
    "miembro",
    "visitante",
];

pub fn validate_role(role: &str) -> Result<String, String> {
    let normalized = role.trim().to_lowercase();
    if ALLOWED_ROLES.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(format!("Role '{}' is not allowed", role))
    }
}

/// Slugs are lowercase alphanumerics separated by single dashes.
pub fn validate_slug(slug: &str) -> Result<(), String> {
    if slug.is_empty() {
        return Err("Slug is required".to_string());
    }
    let valid_chars = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid_chars || slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return Err("Slug must be lowercase letters, digits and single dashes".to_string());
    }
    Ok(())
}

impl Validator for ClubCreate {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        if self.name.trim().is_empty() {
            result.add_error("nombre", "Club name is required");
        }
        if self.name.len() > 255 {
            result.add_error("nombre", "Club name must not exceed 255 characters");
        }
        if let Err(message) = validate_slug(&self.slug) {
            result.add_error("slug", &message);
        }

        result
    }
}

impl Validator for MemberInvite {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        validate_email(&self.email, &mut result);
        if let Err(message) = validate_role(&self.role) {
            result.add_error("rol", &message);
        }
        result
    }
}
