pub mod repositories;

pub use repositories::author_repository::MemoryAuthorRepository;
