use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCommentValidator {
    /// Member id of the author.
    pub author: Uuid,

    #[validate(length(min = 1, max = 2000, message = "content is required"))]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCommentValidator {
    #[validate(length(min = 1, max = 2000, message = "content is required"))]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_comment_needs_content() {
        let create: CreateCommentValidator = serde_json::from_value(json!({
            "author": "0190a000-0000-7000-8000-000000000001",
            "content": "",
        }))
        .unwrap();
        assert!(create.validate().is_err());

        let update: UpdateCommentValidator =
            serde_json::from_value(json!({ "content": "Fair point." })).unwrap();
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_comment_without_author_does_not_parse() {
        let parsed = serde_json::from_value::<CreateCommentValidator>(json!({ "content": "Hi" }));

        assert!(parsed.is_err());
    }
}
