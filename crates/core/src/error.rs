use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for CoreError {
    /// Flatten field errors into one message, sorted by field name so the
    /// rendered text is stable.
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => format!("{field}: {msg}"),
                    None => format!("{field}: {}", e.code),
                })
            })
            .collect();
        messages.sort();
        CoreError::Validation(messages.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::{ValidationError, ValidationErrors};

    #[test]
    fn validation_errors_are_sorted_by_field() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "venue",
            ValidationError::new("length").with_message("too long".into()),
        );
        errors.add("invitation", ValidationError::new("length"));

        let core: CoreError = errors.into();
        match core {
            CoreError::Validation(msg) => {
                assert_eq!(msg, "invitation: length; venue: too long");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
