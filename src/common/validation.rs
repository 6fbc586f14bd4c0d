// Common validation types and traits

#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    /// Converts into a `Result` so callers can bail before hitting the
    /// network with a request the backend would reject anyway.
    pub fn into_result(self) -> crate::common::Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self.into())
        }
    }
}

pub trait Validator {
    fn validate(&self) -> ValidationResult;
}
