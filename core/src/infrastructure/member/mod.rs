pub mod repositories;

pub use repositories::member_repository::MemoryMemberRepository;
