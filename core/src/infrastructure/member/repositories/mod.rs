pub mod member_repository;
