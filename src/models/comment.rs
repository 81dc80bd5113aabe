use serde::Deserialize;
use validator::Validate;

/// DTO for attaching a comment to a blog.
/// Comments are opaque strings; the service never interprets them.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(
        required(message = "comment is required"),
        length(min = 1, max = 1000, message = "comment must not be empty")
    )]
    pub comment: Option<String>,
}
