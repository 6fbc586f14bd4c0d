use super::models::{CommentCreate, NewsCreate};
use crate::common::{ValidationResult, Validator};

const MAX_TITLE_LEN: usize = 255;

impl Validator for NewsCreate {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        if self.title.trim().is_empty() {
            result.add_error("titulo", "Title is required");
        }
        if self.title.len() > MAX_TITLE_LEN {
            result.add_error("titulo", "Title must not exceed 255 characters");
        }
        if self.content.trim().is_empty() {
            result.add_error("contenido", "Content is required");
        }

        result
    }
}

impl Validator for CommentCreate {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        if self.content.trim().is_empty() {
            result.add_error("contenido", "Comment text is required");
        }
        result
    }
}
