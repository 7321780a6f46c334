//! Core process state shared across the codebase.

mod state;

pub use state::{ChildGuard, is_interrupted, setup_interrupt_handler};
