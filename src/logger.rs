//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for messages only shown with `--debug`
//! - a global verbosity level set once from the CLI flags
//!
//! The module prefix doubles as severity: `"error"` and `"warning"` are
//! always shown (unless `--quiet` hides warnings), every other prefix is
//! informational and needs `--verbose`.
//!
//! # Example
//!
//! ```ignore
//! log!("convert"; "running latexmlc on {}", path.display());
//! log!("warning"; "unknown fields in {}", file);
//! debug!("exec"; "stdout:\n{}", stdout);
//! ```

use owo_colors::OwoColorize;
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicU8, Ordering},
};

/// Verbosity threshold. Messages above the current level are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl Level {
    /// Pick a level from the CLI flags. `debug` wins over `verbose`,
    /// which wins over `quiet`.
    pub const fn from_flags(debug: bool, verbose: bool, quiet: bool) -> Self {
        if debug {
            Self::Debug
        } else if verbose {
            Self::Info
        } else if quiet {
            Self::Error
        } else {
            Self::Warning
        }
    }

    const fn from_u8(v: u8) -> Self {
        match v {
            0 => Self::Error,
            1 => Self::Warning,
            2 => Self::Info,
            _ => Self::Debug,
        }
    }

    /// Severity implied by a module prefix.
    fn of_module(module_lower: &str) -> Self {
        match module_lower {
            "error" => Self::Error,
            "warning" | "warn" => Self::Warning,
            _ => Self::Info,
        }
    }
}

static LEVEL: AtomicU8 = AtomicU8::new(Level::Warning as u8);

/// Set the global verbosity level
pub fn set_level(level: Level) {
    LEVEL.store(level as u8, Ordering::SeqCst);
}

pub fn level() -> Level {
    Level::from_u8(LEVEL.load(Ordering::SeqCst))
}

/// Check if debug output is enabled
pub fn is_debug() -> bool {
    level() >= Level::Debug
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --debug is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_debug() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    if !enabled(&module_lower) {
        return;
    }

    let prefix = colorize_prefix(module, &module_lower);
    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Whether a message for this module passes the current level.
fn enabled(module_lower: &str) -> bool {
    // debug! already checked the level; its modules read as Info here.
    Level::of_module(module_lower) <= level()
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "error" => prefix.bright_red().bold().to_string(),
        "warning" | "warn" => prefix.yellow().bold().to_string(),
        "compose" => prefix.bright_blue().bold().to_string(),
        "convert" => prefix.bright_green().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
