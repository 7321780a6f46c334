//! Default conversion command.

use anyhow::Result;
use std::path::{Path, PathBuf};

use super::Cli;
use crate::config::Tex2AnyConfig;
use crate::convert::{ConvertOptions, Converter, ExternalToolchain, Format, Toolchain};
use crate::error::Error;
use crate::registry::Registry;

/// Everything a conversion run needs, after merging CLI flags with config.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertPlan {
    pub formats: Vec<Format>,
    pub theme: Option<String>,
    pub components: Vec<String>,
    pub css: Option<PathBuf>,
    pub no_default_css: bool,
    pub minify: bool,
}

impl ConvertPlan {
    /// Merge `cli` over `config`. Every format is validated here, before
    /// anything runs.
    pub fn resolve(cli: &Cli, config: &Tex2AnyConfig) -> Result<Self> {
        let formats = match &cli.format {
            Some(list) => Format::parse_list(list)?,
            None => config
                .output
                .default_formats
                .iter()
                .map(|name| name.parse())
                .collect::<Result<Vec<Format>, Error>>()?,
        };
        let formats = if formats.is_empty() {
            vec![Format::Html5]
        } else {
            formats
        };

        let theme = match &cli.theme {
            Some(name) => Some(name.trim()).filter(|name| !name.is_empty()),
            None => config.output.theme(),
        }
        .map(str::to_string);

        let components = cli
            .components
            .as_ref()
            .unwrap_or(&config.output.default_components)
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            formats,
            theme,
            components,
            css: cli.css.clone(),
            no_default_css: cli.no_default_css,
            minify: cli.minify || config.output.minify,
        })
    }

    fn options(&self) -> ConvertOptions {
        ConvertOptions {
            theme: self.theme.clone(),
            components: self.components.clone(),
            css: self.css.clone(),
            no_default_css: self.no_default_css,
            minify: self.minify,
        }
    }
}

/// Convert `input` to every planned format, stopping at the first failure.
pub fn run<T: Toolchain>(
    input: &Path,
    output_dir: Option<PathBuf>,
    plan: &ConvertPlan,
    registry: &Registry,
    toolchain: T,
) -> Result<Vec<PathBuf>> {
    let converter = Converter::new(input, output_dir, registry, toolchain)?;
    let options = plan.options();
    plan.formats
        .iter()
        .map(|&format| converter.convert(format, &options).map_err(Into::into))
        .collect()
}

/// Entry point for `tex2any INPUT ...`.
pub fn convert_document(
    cli: &Cli,
    input: &Path,
    config: &Tex2AnyConfig,
    registry: &Registry,
) -> Result<()> {
    let plan = ConvertPlan::resolve(cli, config)?;
    let toolchain = ExternalToolchain::new(config.engine.clone());
    let outputs = run(input, cli.output.clone(), &plan, registry, toolchain)?;
    print!("{}", summary(&outputs));
    Ok(())
}

fn summary(outputs: &[PathBuf]) -> String {
    match outputs {
        [single] => format!("Successfully converted to: {}\n", single.display()),
        many => {
            let mut out = format!("Successfully converted to {} formats:\n", many.len());
            for path in many {
                out.push_str(&format!("  - {}\n", path.display()));
            }
            out
        }
    }
}
