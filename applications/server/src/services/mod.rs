/// Server services
pub mod command;

pub use command::{run_command, CommandItems, CommandResponse};
