pub mod create_book;
pub mod delete_book;
pub mod get_book;
pub mod get_books;
pub mod patch_book;
pub mod search_books;
pub mod update_book;
