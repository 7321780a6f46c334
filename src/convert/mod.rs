//! Conversion orchestration.
//!
//! # Module Structure
//!
//! ```text
//! convert/
//! ├── format.rs   # Format catalogue, output layout, pipeline per format
//! ├── filter.rs   # which components survive for a format
//! ├── engine.rs   # Toolchain trait, LaTeXML/pandoc invocation
//! └── mod.rs      # Converter (this file)
//! ```
//!
//! # Flow
//!
//! ```text
//! .tex ──latexmlc──▶ html/index.html ──Composer──▶ themed HTML
//!      ──latexml───▶ xml/document.xml
//!      ──latexmlc──▶ <out>.tmp.html ──pandoc──▶ markdown / txt / epub
//! ```

mod engine;
mod filter;
mod format;

pub use engine::{ConverterJob, Engine, EngineJob, ExternalToolchain, Toolchain};
pub use filter::filter_components;
pub use format::{Format, Pipeline};

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};
use crate::html::Composer;
use crate::registry::Registry;
use crate::{debug, log};

/// Per-run options shared by every requested format.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub theme: Option<String>,
    pub components: Vec<String>,
    /// Stylesheet handed to the engine (not composed).
    pub css: Option<PathBuf>,
    pub no_default_css: bool,
    pub minify: bool,
}

/// Converts one `.tex` file, one format at a time.
pub struct Converter<'r, T: Toolchain> {
    input: PathBuf,
    output_dir: Option<PathBuf>,
    registry: &'r Registry,
    toolchain: T,
}

impl<'r, T: Toolchain> Converter<'r, T> {
    /// Validate `input` and bind the converter to it.
    ///
    /// With `output_dir`, every format writes straight into that directory;
    /// otherwise each format gets its own directory next to the input.
    pub fn new(
        input: impl Into<PathBuf>,
        output_dir: Option<PathBuf>,
        registry: &'r Registry,
        toolchain: T,
    ) -> Result<Self> {
        let input = input.into();
        if !input.exists() {
            return Err(Error::file_not_found("Input file", &input));
        }
        if input.extension().is_none_or(|ext| ext != "tex") {
            let ext = input
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()))
                .unwrap_or_default();
            return Err(Error::InvalidValue(format!(
                "Input file must be a .tex file, got: {ext}"
            )));
        }

        Ok(Self {
            input,
            output_dir,
            registry,
            toolchain,
        })
    }

    /// Output file for `format`, creating its directory.
    pub fn output_path(&self, format: Format) -> Result<PathBuf> {
        let (dir_name, file_name) = format.output_layout();
        let dir = match &self.output_dir {
            Some(dir) => dir.clone(),
            None => self
                .input
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(dir_name),
        };
        fs::create_dir_all(&dir).map_err(|err| Error::io("create directory", &dir, err))?;
        Ok(dir.join(file_name))
    }

    /// Convert to `format` and return the written file.
    pub fn convert(&self, format: Format, options: &ConvertOptions) -> Result<PathBuf> {
        let output = self.output_path(format)?;
        let components = filter_components(self.registry, &options.components, format);
        if !format.is_html_family() && !options.components.is_empty() {
            debug!(
                "convert";
                "components kept for {}: {:?}",
                format,
                components.as_deref().unwrap_or_default()
            );
        }

        log!("convert"; "converting {} to {}", self.input.display(), format);
        match format.pipeline() {
            Pipeline::Engine { format: engine_format } => {
                let mut job = EngineJob::latexmlc(&self.input, &output, engine_format);
                if format.is_html_family() {
                    job = job.with_css(options.css.clone(), options.no_default_css);
                }
                self.toolchain.run_engine(&job)?;
            }
            Pipeline::EngineXml => {
                self.toolchain
                    .run_engine(&EngineJob::latexml(&self.input, &output))?;
            }
            Pipeline::ViaConverter { args, label } => {
                let intermediate = TempFile::new(output.with_extension("tmp.html"));
                let job = EngineJob::latexmlc(&self.input, intermediate.path(), "html");
                self.toolchain.run_engine(&job)?;
                self.toolchain.run_converter(&ConverterJob {
                    input: intermediate.path().to_path_buf(),
                    dest: output.clone(),
                    args,
                    label,
                })?;
            }
        }

        if format.is_html_family() {
            self.compose(&output, options.theme.as_deref(), components.as_deref(), options.minify)?;
        }

        Ok(output)
    }

    fn compose(
        &self,
        output: &Path,
        theme: Option<&str>,
        components: Option<&[String]>,
        minify: bool,
    ) -> Result<()> {
        if theme.is_none() && components.is_none() {
            return Ok(());
        }

        let composer = Composer::open(output, self.registry)?.with_minify(minify);
        let components = components.unwrap_or_default();
        if !components.is_empty() {
            composer.inject_html_elements(components)?;
        }
        composer.apply_theme_and_components(theme, components)
    }
}

/// Intermediate file removed on drop, success or not.
struct TempFile(PathBuf);

impl TempFile {
    fn new(path: PathBuf) -> Self {
        Self(path)
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        if self.0.exists()
            && let Err(err) = fs::remove_file(&self.0)
        {
            debug!("convert"; "failed to remove {}: {}", self.0.display(), err);
        }
    }
}
