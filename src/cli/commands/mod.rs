mod command_result;
pub mod extract;
pub mod init;
pub mod types;

pub use command_result::*;
