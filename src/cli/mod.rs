//! Command-line interface module.

mod args;
pub mod convert;
pub mod init;
pub mod list;

pub use args::Cli;
