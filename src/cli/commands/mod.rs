pub mod find;
pub mod helper;
pub mod init;
pub mod json;
pub mod list;

mod command_result;

pub use command_result::*;
