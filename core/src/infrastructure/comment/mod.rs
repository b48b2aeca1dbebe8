pub mod repositories;

pub use repositories::comment_repository::MemoryCommentRepository;
