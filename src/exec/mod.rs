//! Child-process execution

pub mod subprocess;

pub use subprocess::{run_command, CommandResult};
