//! 各页面内容

pub mod connection;
pub mod home;
pub mod list;
