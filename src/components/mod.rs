pub mod alert;
pub mod cookie_notice;
pub mod scroll_reveal;
