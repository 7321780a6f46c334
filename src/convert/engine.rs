//! External toolchain: LaTeXML and pandoc.
//!
//! [`Toolchain`] is the seam between the orchestrator and the processes it
//! runs; [`ExternalToolchain`] spawns the real binaries.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::utils::exec::{Cmd, EMPTY_FILTER, ExecError, LATEXML_FILTER};
use crate::{debug, log};

const LATEXML_GUIDANCE: &str = "LaTeXML not found. Please install LaTeXML:
  Ubuntu/Debian: sudo apt-get install latexml
  macOS: brew install latexml
  Or see: https://dlmf.nist.gov/LaTeXML/get.html";

const PANDOC_GUIDANCE: &str = "Pandoc not found. Please install pandoc:
  Ubuntu/Debian: sudo apt-get install pandoc
  macOS: brew install pandoc";

/// LaTeXML front end to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// `latexmlc`: full pipeline to HTML/JSON.
    Latexmlc,
    /// `latexml`: LaTeXML XML only.
    Latexml,
}

/// One engine invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineJob {
    pub engine: Engine,
    pub input: PathBuf,
    pub dest: PathBuf,
    /// Value of `--format=`, `latexmlc` only.
    pub format: Option<&'static str>,
    /// Extra stylesheet passed with `--css`.
    pub css: Option<PathBuf>,
    pub no_default_css: bool,
}

impl EngineJob {
    pub fn latexmlc(input: &Path, dest: &Path, format: &'static str) -> Self {
        Self {
            engine: Engine::Latexmlc,
            input: input.to_path_buf(),
            dest: dest.to_path_buf(),
            format: Some(format),
            css: None,
            no_default_css: false,
        }
    }

    pub fn latexml(input: &Path, dest: &Path) -> Self {
        Self {
            engine: Engine::Latexml,
            input: input.to_path_buf(),
            dest: dest.to_path_buf(),
            format: None,
            css: None,
            no_default_css: false,
        }
    }

    pub fn with_css(mut self, css: Option<PathBuf>, no_default_css: bool) -> Self {
        self.css = css;
        self.no_default_css = no_default_css;
        self
    }

    /// Command-line arguments after the program name.
    pub fn args(&self, engine_timeout: u64) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            self.input.clone().into(),
            "--dest".into(),
            self.dest.clone().into(),
        ];
        if self.engine == Engine::Latexml {
            return args;
        }

        args.push(format!("--timeout={engine_timeout}").into());
        if let Some(format) = self.format {
            args.push(format!("--format={format}").into());
        }
        if let Some(css) = &self.css {
            args.push("--css".into());
            args.push(css.clone().into());
        }
        if self.no_default_css {
            args.push("--nodefaultcss".into());
        }
        args
    }
}

/// One pandoc invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterJob {
    pub input: PathBuf,
    pub dest: PathBuf,
    pub args: &'static [&'static str],
    /// Human-readable target name for messages.
    pub label: &'static str,
}

impl ConverterJob {
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![self.input.clone().into()];
        args.extend(self.args.iter().map(OsString::from));
        args.push("-o".into());
        args.push(self.dest.clone().into());
        args
    }
}

/// Runs the external conversion stages.
pub trait Toolchain {
    fn run_engine(&self, job: &EngineJob) -> Result<()>;
    fn run_converter(&self, job: &ConverterJob) -> Result<()>;
}

/// Toolchain backed by the installed binaries.
#[derive(Debug, Clone, Default)]
pub struct ExternalToolchain {
    config: EngineConfig,
}

impl ExternalToolchain {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    fn program(&self, engine: Engine) -> &str {
        match engine {
            Engine::Latexmlc => &self.config.latexmlc,
            Engine::Latexml => &self.config.latexml,
        }
    }
}

impl Toolchain for ExternalToolchain {
    fn run_engine(&self, job: &EngineJob) -> Result<()> {
        let program = self.program(job.engine);
        ensure_installed(program, LATEXML_GUIDANCE)?;

        log!("convert"; "running {} on {}", program, job.input.display());
        let limit = self.config.engine_limit();
        let output = Cmd::new(program)
            .args(job.args(self.config.engine_timeout))
            .timeout(limit)
            .filter(&LATEXML_FILTER)
            .run()
            .map_err(|err| engine_error(job.engine, limit, err))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            debug!("latexml"; "{}", stdout.trim());
        }
        Ok(())
    }

    fn run_converter(&self, job: &ConverterJob) -> Result<()> {
        let program = self.config.pandoc.as_str();
        ensure_installed(program, PANDOC_GUIDANCE)?;

        log!("convert"; "running {} to {}", program, job.label);
        let limit = self.config.converter_limit();
        Cmd::new(program)
            .args(job.args())
            .timeout(limit)
            .filter(&EMPTY_FILTER)
            .run()
            .map_err(|err| converter_error(job.label, limit, err))?;
        Ok(())
    }
}

/// Fail early with install guidance when `program` isn't on `PATH`.
fn ensure_installed(program: &str, guidance: &str) -> Result<()> {
    match which::which(program) {
        Ok(path) => {
            debug!("convert"; "using {}", path.display());
            Ok(())
        }
        Err(_) => Err(Error::Execution(guidance.to_string())),
    }
}

fn engine_error(engine: Engine, limit: Duration, err: ExecError) -> Error {
    match err {
        ExecError::TimedOut { .. } => Error::Timeout(match engine {
            Engine::Latexmlc => format!(
                "LaTeXML conversion timed out after {} seconds. \
                 Try simplifying the document or increasing the timeout.",
                limit.as_secs()
            ),
            Engine::Latexml => {
                format!("latexml conversion timed out after {} seconds.", limit.as_secs())
            }
        }),
        other => common_error(other, LATEXML_GUIDANCE),
    }
}

fn converter_error(label: &str, limit: Duration, err: ExecError) -> Error {
    match err {
        ExecError::TimedOut { .. } => Error::Timeout(format!(
            "Pandoc conversion to {label} timed out after {} seconds.",
            limit.as_secs()
        )),
        other => common_error(other, PANDOC_GUIDANCE),
    }
}

fn common_error(err: ExecError, guidance: &str) -> Error {
    match err {
        ExecError::NotInstalled { .. } => Error::Execution(guidance.to_string()),
        ExecError::Interrupted { .. } => Error::Interrupted,
        ExecError::Failed { message, .. } => Error::Execution(message),
        ExecError::Spawn { name, source } => {
            Error::Execution(format!("Failed to execute `{name}`: {source}"))
        }
        ExecError::TimedOut { name, limit } => Error::Timeout(format!(
            "`{name}` timed out after {} seconds.",
            limit.as_secs()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_latexmlc_args() {
        let job = EngineJob::latexmlc(Path::new("paper.tex"), Path::new("html/index.html"), "html5")
            .with_css(Some(PathBuf::from("extra.css")), true);
        assert_eq!(
            strings(job.args(600)),
            vec![
                "paper.tex",
                "--dest",
                "html/index.html",
                "--timeout=600",
                "--format=html5",
                "--css",
                "extra.css",
                "--nodefaultcss",
            ]
        );
    }

    #[test]
    fn test_latexml_args() {
        let job = EngineJob::latexml(Path::new("paper.tex"), Path::new("xml/document.xml"));
        assert_eq!(
            strings(job.args(600)),
            vec!["paper.tex", "--dest", "xml/document.xml"]
        );
    }

    #[test]
    fn test_pandoc_args() {
        let job = ConverterJob {
            input: PathBuf::from("txt/document.tmp.html"),
            dest: PathBuf::from("txt/document.txt"),
            args: &["-t", "plain"],
            label: "plain text",
        };
        assert_eq!(
            strings(job.args()),
            vec!["txt/document.tmp.html", "-t", "plain", "-o", "txt/document.txt"]
        );
    }

    #[test]
    fn test_timeout_messages() {
        let timed_out = || ExecError::TimedOut {
            name: "x".into(),
            limit: Duration::from_secs(900),
        };
        let err = engine_error(Engine::Latexmlc, Duration::from_secs(900), timed_out());
        assert_eq!(err.kind(), ErrorKind::Timeout);
        assert_eq!(
            err.to_string(),
            "LaTeXML conversion timed out after 900 seconds. Try simplifying the document or increasing the timeout."
        );

        let err = converter_error("EPUB", Duration::from_secs(300), timed_out());
        assert_eq!(
            err.to_string(),
            "Pandoc conversion to EPUB timed out after 300 seconds."
        );
    }

    #[test]
    fn test_not_installed_guidance() {
        let err = common_error(
            ExecError::NotInstalled {
                name: "pandoc".into(),
            },
            PANDOC_GUIDANCE,
        );
        assert_eq!(err.kind(), ErrorKind::ExecutionFailure);
        assert!(err.to_string().starts_with("Pandoc not found."));
        assert!(err.to_string().contains("brew install pandoc"));
    }

    #[test]
    fn test_missing_engine_binary() {
        let toolchain = ExternalToolchain::new(EngineConfig {
            latexmlc: "tex2any-no-such-latexmlc".into(),
            ..EngineConfig::default()
        });
        let job = EngineJob::latexmlc(Path::new("a.tex"), Path::new("a.html"), "html5");
        let err = toolchain.run_engine(&job).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExecutionFailure);
        assert!(err.to_string().starts_with("LaTeXML not found."));
    }

    #[test]
    fn test_interrupted_maps_to_interrupted() {
        let err = common_error(ExecError::Interrupted { name: "x".into() }, LATEXML_GUIDANCE);
        assert_eq!(err.kind(), ErrorKind::Interrupted);
    }
}
