use crate::application::http::{
    author::router::AuthorApiDoc, book::router::BookApiDoc, health::HealthApiDoc,
    member::router::MemberApiDoc, post::router::PostApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libris API",
        description = "Library catalog and member feed with filtering, search, ordering and pagination"
    ),
    nest(
        (path = "/books", api = BookApiDoc),
        (path = "/authors", api = AuthorApiDoc),
        (path = "/posts", api = PostApiDoc),
        (path = "/members", api = MemberApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
