use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateBookValidator {
    #[validate(length(min = 1, max = 255, message = "title is required"))]
    pub title: String,

    #[validate(range(min = 1000, message = "publication_year must be 1000 or later"))]
    pub publication_year: i32,

    /// Author id.
    pub author: Uuid,
}

/// Full replacement, every field is required.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateBookValidator {
    #[validate(length(min = 1, max = 255, message = "title is required"))]
    pub title: String,

    #[validate(range(min = 1000, message = "publication_year must be 1000 or later"))]
    pub publication_year: i32,

    /// Author id.
    pub author: Uuid,
}

/// Partial update, omitted fields keep their value.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct PatchBookValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "title cannot be empty"))]
    pub title: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1000, message = "publication_year must be 1000 or later"))]
    pub publication_year: Option<i32>,

    #[serde(default)]
    pub author: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_book_rejects_blank_title_and_old_year() {
        let payload = CreateBookValidator {
            title: String::new(),
            publication_year: 999,
            author: Uuid::nil(),
        };

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("publication_year"));
    }

    #[test]
    fn test_patch_book_skips_missing_fields() {
        let payload: PatchBookValidator =
            serde_json::from_str(r#"{"publication_year": 1966}"#).unwrap();

        assert!(payload.validate().is_ok());
        assert_eq!(payload.title, None);
    }

    #[test]
    fn test_update_book_requires_every_field() {
        let partial = serde_json::from_str::<UpdateBookValidator>(r#"{"publication_year": 1966}"#);
        assert!(partial.is_err());
    }
}
