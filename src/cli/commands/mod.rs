mod command_result;
pub mod generate;
pub mod init;
pub mod stats;

pub use command_result::*;
