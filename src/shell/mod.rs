//! External command execution and PATH lookup.

pub mod command;
pub mod lookup;

pub use command::{run_captured, run_passthrough, CommandResult};
pub use lookup::{is_executable, parse_system_path, resolve_tool_path, tool_on_path};
