//! Process-wide interruption state.
//!
//! Two flags:
//! - `INTERRUPTED`: Has Ctrl+C been received?
//! - `CHILDREN_RUNNING`: How many external tools are currently running?
//!
//! While a child runs, Ctrl+C only raises the flag; the wait loop in
//! `utils::exec` notices it, kills the child and reports `Interrupted`.
//! Outside of a child the process exits right away with status 130.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::error::ErrorKind;

/// Ctrl+C received
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// External processes in flight
static CHILDREN_RUNNING: AtomicUsize = AtomicUsize::new(0);

/// Setup the global Ctrl+C handler. Call once at program start
pub fn setup_interrupt_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        INTERRUPTED.store(true, Ordering::SeqCst);

        if CHILDREN_RUNNING.load(Ordering::SeqCst) == 0 {
            // Nothing to tear down (e.g., waiting on the overwrite prompt)
            eprintln!("\nConversion interrupted.");
            std::process::exit(i32::from(ErrorKind::Interrupted.exit_code()));
        }
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))
}

/// Check if interruption has been requested
pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::Relaxed)
}

/// Marks an external process as running for as long as it is alive.
pub struct ChildGuard(());

impl ChildGuard {
    pub fn enter() -> Self {
        CHILDREN_RUNNING.fetch_add(1, Ordering::SeqCst);
        Self(())
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        CHILDREN_RUNNING.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_guard_counts_running_children() {
        let _outer = ChildGuard::enter();
        let _inner = ChildGuard::enter();
        assert!(CHILDREN_RUNNING.load(Ordering::SeqCst) >= 2);
    }
}
