pub mod get_member;
pub mod get_member_feed;
