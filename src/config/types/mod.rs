//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `handle` | Global configuration snapshot and overrides  |

mod error;
pub mod handle;

pub use error::ConfigError;
pub use handle::{ConfigOverrides, apply_overrides, cfg, init_config};
