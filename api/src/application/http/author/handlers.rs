pub mod create_author;
pub mod get_author;
pub mod get_author_statistics;
pub mod get_authors;
