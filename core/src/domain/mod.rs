pub mod author;
pub mod book;
pub mod comment;
pub mod common;
pub mod health;
pub mod member;
pub mod post;
pub mod query;
