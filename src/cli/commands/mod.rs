//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands.

pub mod command;
pub mod resolve;

pub use command::Command;
pub use resolve::ResolveCommand;
