//! Command implementations for depot

pub mod dispatch;
pub mod find;
pub mod helpers;
pub mod init;
pub mod points;
pub mod route;
pub mod simulate;
