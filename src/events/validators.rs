use super::models::{parse_backend_datetime, EventCreate};
use crate::common::{ValidationResult, Validator};

impl Validator for EventCreate {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        if self.name.trim().is_empty() {
            result.add_error("nombre", "Event name is required");
        }
        if self.description.trim().is_empty() {
            result.add_error("descripcion", "Event description is required");
        }
        if parse_backend_datetime(&self.starts_at).is_none() {
            result.add_error("fecha_inicio", "Start date must be an ISO date");
        }
        if let Some(ends_at) = &self.ends_at {
            match parse_backend_datetime(ends_at) {
                None => result.add_error("fecha_fin", "End date must be an ISO date"),
                Some(end) => {
                    if let Some(start) = parse_backend_datetime(&self.starts_at) {
                        if end < start {
                            result.add_error("fecha_fin", "End date precedes the start date");
                        }
                    }
                }
            }
        }
        if self.capacity == Some(0) {
            result.add_error("aforo_maximo", "Capacity must be at least 1");
        }

        result
    }
}
