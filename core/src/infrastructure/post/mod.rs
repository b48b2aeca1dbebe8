pub mod repositories;

pub use repositories::post_repository::MemoryPostRepository;
