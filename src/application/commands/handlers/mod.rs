//! Command Handlers 实现

mod generate_command_handlers;

pub use generate_command_handlers::*;
