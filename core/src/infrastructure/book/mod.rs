pub mod repositories;

pub use repositories::book_repository::MemoryBookRepository;
