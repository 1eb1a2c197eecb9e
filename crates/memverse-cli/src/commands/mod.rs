pub mod drill;
pub mod init;
pub mod list;
pub mod validate;
