//! External command execution utilities.
//!
//! Provides a Builder-based API for running external tools with captured
//! output, a wall-clock timeout and filtered logging.
//!
//! # Examples
//!
//! ```ignore
//! use crate::utils::exec::Cmd;
//!
//! // Simple command
//! Cmd::new("pandoc").args(["--version"]).run()?;
//!
//! // With a time bound and a noise filter
//! Cmd::new("latexmlc")
//!     .args(["paper.tex", "--dest", "out/index.html"])
//!     .timeout(Duration::from_secs(900))
//!     .filter(&LATEXML_FILTER)
//!     .run()?;
//! ```

use crate::{core, debug};
use regex::Regex;
use std::{
    ffi::{OsStr, OsString},
    io::Read,
    process::{Child, Command, ExitStatus, Output, Stdio},
    sync::OnceLock,
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};
use thiserror::Error;

/// How often a running child is polled for exit, timeout and Ctrl+C.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

// ============================================================================
// Errors
// ============================================================================

/// Failure modes of an external command, kept apart so callers can give
/// tool-specific guidance.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("`{name}` not found")]
    NotInstalled { name: String },

    #[error("Failed to execute `{name}`")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    Failed {
        name: String,
        status: ExitStatus,
        message: String,
    },

    #[error("`{name}` timed out after {} seconds", limit.as_secs())]
    TimedOut { name: String, limit: Duration },

    #[error("`{name}` interrupted")]
    Interrupted { name: String },
}

// ============================================================================
// Builder API
// ============================================================================

/// Command builder for external process execution.
///
/// Provides a fluent API for configuring and running external commands.
#[derive(Default)]
pub struct Cmd {
    program: OsString,
    args: Vec<OsString>,
    timeout: Option<Duration>,
    filter: Option<&'static FilterRule>,
}

impl Cmd {
    /// Create a new command builder.
    pub fn new<S: AsRef<OsStr>>(program: S) -> Self {
        Self {
            program: program.as_ref().to_owned(),
            ..Default::default()
        }
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            let arg = arg.as_ref();
            if !arg.is_empty() {
                self.args.push(arg.to_owned());
            }
        }
        self
    }

    /// Kill the process and fail with `TimedOut` once `limit` has elapsed.
    pub fn timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    /// Set output filter for logging.
    pub fn filter(mut self, filter: &'static FilterRule) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Execute the command and return its captured output.
    pub fn run(self) -> Result<Output, ExecError> {
        let filter = self.filter.unwrap_or(&EMPTY_FILTER);
        let name = self.program_name();

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!("exec"; "{} {}", name, self.args_display());

        let mut child = cmd.spawn().map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ExecError::NotInstalled { name: name.clone() }
            } else {
                ExecError::Spawn {
                    name: name.clone(),
                    source,
                }
            }
        })?;

        // Drain pipes on their own threads so a chatty child can't block on a full pipe
        let stdout = spawn_reader(child.stdout.take());
        let stderr = spawn_reader(child.stderr.take());

        let status = {
            let _guard = core::ChildGuard::enter();
            wait_with_deadline(&mut child, self.timeout, &name)?
        };

        let output = Output {
            status,
            stdout: join_reader(stdout),
            stderr: join_reader(stderr),
        };

        log_output(&name, &output, filter)?;
        Ok(output)
    }

    /// Get the program name for error messages.
    fn program_name(&self) -> String {
        self.program.to_string_lossy().to_string()
    }

    fn args_display(&self) -> String {
        self.args
            .iter()
            .map(|a| a.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Poll the child until it exits, the deadline passes, or Ctrl+C arrives.
fn wait_with_deadline(
    child: &mut Child,
    limit: Option<Duration>,
    name: &str,
) -> Result<ExitStatus, ExecError> {
    let started = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) => {}
            Err(source) => {
                return Err(ExecError::Spawn {
                    name: name.to_string(),
                    source,
                });
            }
        }

        if core::is_interrupted() {
            kill(child);
            return Err(ExecError::Interrupted {
                name: name.to_string(),
            });
        }

        if let Some(limit) = limit
            && started.elapsed() >= limit
        {
            kill(child);
            return Err(ExecError::TimedOut {
                name: name.to_string(),
                limit,
            });
        }

        thread::sleep(POLL_INTERVAL);
    }
}

fn kill(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn spawn_reader<R: Read + Send + 'static>(pipe: Option<R>) -> Option<JoinHandle<Vec<u8>>> {
    pipe.map(|mut reader| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = reader.read_to_end(&mut buf);
            buf
        })
    })
}

fn join_reader(handle: Option<JoinHandle<Vec<u8>>>) -> Vec<u8> {
    handle.and_then(|h| h.join().ok()).unwrap_or_default()
}

// ============================================================================
// Output Filtering
// ============================================================================

/// Filter rule for command output logging.
///
/// Used to reduce noise by skipping known progress chatter.
pub struct FilterRule {
    /// Prefixes to skip when logging output.
    pub skip_prefixes: &'static [&'static str],
}

impl FilterRule {
    /// Create a new filter rule.
    pub const fn new(skip_prefixes: &'static [&'static str]) -> Self {
        Self { skip_prefixes }
    }

    /// Check if a line should be skipped.
    fn should_skip(&self, line: &str) -> bool {
        line.is_empty() || self.skip_prefixes.iter().any(|p| line.starts_with(p))
    }

    /// Lines of `output` that pass the filter, ANSI codes removed.
    fn keep(&self, output: &str) -> Vec<String> {
        output
            .lines()
            .map(|line| strip_ansi(line).trim().to_string())
            .filter(|line| !self.should_skip(line))
            .collect()
    }

    /// Log output lines that pass the filter (debug level).
    pub fn log(&self, name: &str, output: &str) {
        let lines = self.keep(output);
        if !lines.is_empty() {
            debug!(name; "{}", lines.join("\n"));
        }
    }
}

/// Empty filter (no skipping).
pub const EMPTY_FILTER: FilterRule = FilterRule::new(&[]);

/// LaTeXML progress lines that carry no diagnostic value.
pub const LATEXML_FILTER: FilterRule = FilterRule::new(&[
    "(Loading",
    "(Processing",
    "(Digesting",
    "(Building",
    "(Rewriting",
    "(Scanning",
    "(Post-processing",
    "(Writing",
    "(Converting",
    "(Formatting",
]);

// ============================================================================
// Helpers
// ============================================================================

/// Strip ANSI escape codes from string.
fn strip_ansi(s: &str) -> std::borrow::Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1b\[[0-9;]*m").unwrap());
    re.replace_all(s, "")
}

/// Log command output, returning error on failure.
fn log_output(name: &str, output: &Output, filter: &'static FilterRule) -> Result<(), ExecError> {
    if !output.status.success() {
        return Err(ExecError::Failed {
            name: name.to_string(),
            status: output.status,
            message: format_error(name, output, filter),
        });
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    filter.log(name, stderr.trim());
    Ok(())
}

/// Format error message for failed command.
fn format_error(name: &str, output: &Output, filter: &'static FilterRule) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);

    let mut msg = format!("Command `{name}` failed with {}", output.status);

    let kept = filter.keep(&stderr);
    if !kept.is_empty() {
        msg.push('\n');
        msg.push_str(&kept.join("\n"));
    }

    let stdout_trimmed = stdout.trim();
    if !stdout_trimmed.is_empty()
        && !stdout_trimmed.starts_with("<!DOCTYPE")
        && !stdout_trimmed.starts_with('<')
    {
        msg.push_str("\nStdout:\n");
        msg.push_str(stdout_trimmed);
    }
    msg
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_builder() {
        let cmd = Cmd::new("echo")
            .args(["hello", "world", "!"])
            .timeout(Duration::from_secs(3));

        assert_eq!(cmd.program, OsString::from("echo"));
        assert_eq!(cmd.args.len(), 3);
        assert_eq!(cmd.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_empty_args_filtered() {
        let cmd = Cmd::new("echo").args(["", "a", "", "b"]);
        assert_eq!(cmd.args.len(), 2);
    }

    #[test]
    fn test_filter_rule() {
        let filter = FilterRule::new(&["(Loading", "(Digesting"]);
        assert!(filter.should_skip("(Loading /usr/share/latexml/article.cls.ltxml"));
        assert!(filter.should_skip("(Digesting paper.tex"));
        assert!(!filter.should_skip("Error:undefined:\\foo"));
        assert!(filter.should_skip(""));
    }

    #[test]
    fn test_filter_keep_strips_ansi() {
        let kept = LATEXML_FILTER.keep("\x1b[33m(Loading x)\x1b[0m\nWarning: missing file\n\n");
        assert_eq!(kept, vec!["Warning: missing file".to_string()]);
    }

    #[test]
    fn test_strip_ansi() {
        assert_eq!(strip_ansi("\x1b[31mRed\x1b[0m"), "Red");
        assert_eq!(strip_ansi("Plain text"), "Plain text");
    }

    #[cfg(unix)]
    #[test]
    fn test_simple_command() {
        let output = Cmd::new("echo").args(["hello"]).run().unwrap();
        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("hello"));
    }

    #[test]
    fn test_missing_program_is_not_installed() {
        let err = Cmd::new("tex2any-definitely-not-a-real-binary")
            .run()
            .unwrap_err();
        assert!(matches!(err, ExecError::NotInstalled { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_failed() {
        let err = Cmd::new("sh")
            .args(["-c", "echo broken >&2; exit 3"])
            .run()
            .unwrap_err();
        match err {
            ExecError::Failed { status, message, .. } => {
                assert_eq!(status.code(), Some(3));
                assert!(message.contains("broken"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_timeout_kills_child() {
        let started = Instant::now();
        let err = Cmd::new("sleep")
            .args(["5"])
            .timeout(Duration::from_millis(200))
            .run()
            .unwrap_err();
        assert!(matches!(err, ExecError::TimedOut { .. }));
        assert!(started.elapsed() < Duration::from_secs(4));
    }
}
