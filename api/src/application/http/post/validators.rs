use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePostValidator {
    /// Member id of the author.
    pub author: Uuid,

    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
}

/// Full replacement of title and content.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePostValidator {
    #[validate(length(min = 1, max = 200, message = "title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct PatchPostValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "title cannot be empty"))]
    pub title: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "content cannot be empty"))]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_is_required() {
        let payload = CreatePostValidator {
            author: Uuid::nil(),
            title: "Hello".to_string(),
            content: String::new(),
        };

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("content"));
    }

    #[test]
    fn test_patch_post_rejects_empty_title_only_when_present() {
        let untouched: PatchPostValidator =
            serde_json::from_str(r#"{"content": "Edited."}"#).unwrap();
        assert!(untouched.validate().is_ok());

        let blank: PatchPostValidator = serde_json::from_str(r#"{"title": ""}"#).unwrap();
        assert!(blank.validate().is_err());

        let partial = serde_json::from_str::<UpdatePostValidator>(r#"{"title": "Hi"}"#);
        assert!(partial.is_err());
    }
}
