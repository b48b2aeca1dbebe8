pub mod author;
pub mod book;
pub mod comment;
pub mod member;
pub mod memory;
pub mod post;
