pub mod create_post;
pub mod delete_post;
pub mod get_post;
pub mod get_posts;
pub mod patch_post;
pub mod update_post;
