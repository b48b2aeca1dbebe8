pub mod author;
pub mod book;
pub mod comment;
pub mod health;
pub mod member;
pub mod pagination;
pub mod post;
pub mod query_extractor;
pub mod server;
