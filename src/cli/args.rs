//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Examples:
  tex2any document.tex
  tex2any document.tex --theme academic
  tex2any paper.tex -f markdown
  tex2any paper.tex -f html5,markdown,epub
  tex2any paper.tex --theme academic --components floating-toc,search
  tex2any paper.tex --theme serif --components floating-toc,sidebar-right,citation-generator

System Dependencies:
  - LaTeXML: Required for all conversions
  - Pandoc: Required for markdown, txt, and epub formats";

/// Convert LaTeX files to various formats using LaTeXML
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Cli {
    /// Input .tex file to convert
    #[arg(value_hint = clap::ValueHint::FilePath, required_unless_present_any = [
        "list_themes", "list_components", "list_formats", "init_config",
    ])]
    pub input: Option<PathBuf>,

    /// Output format(s), single or comma-separated (e.g. "html5,markdown,epub")
    #[arg(short, long)]
    pub format: Option<String>,

    /// Theme to apply (empty string for none)
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Comma-separated components to include (e.g. "floating-toc,search")
    #[arg(short, long, value_delimiter = ',')]
    pub components: Option<Vec<String>>,

    /// CSS file passed to LaTeXML (HTML-based formats)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub css: Option<PathBuf>,

    /// Disable LaTeXML's default CSS
    #[arg(long)]
    pub no_default_css: bool,

    /// Minify injected theme and component assets
    #[arg(short, long)]
    pub minify: bool,

    /// Output directory (default: a per-format directory next to the input)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Config file path (default: ~/.tex2any.toml)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// List all available themes and exit
    #[arg(long)]
    pub list_themes: bool,

    /// List all available components and exit
    #[arg(long)]
    pub list_components: bool,

    /// List all supported formats and exit
    #[arg(long)]
    pub list_formats: bool,

    /// Create a default configuration file and exit
    #[arg(long)]
    pub init_config: bool,

    /// Override author name from config
    #[arg(long)]
    pub author_name: Option<String>,

    /// Override author email from config
    #[arg(long)]
    pub author_email: Option<String>,

    /// Override copyright year from config
    #[arg(long)]
    pub copyright_year: Option<String>,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Show info messages
    #[arg(long)]
    pub verbose: bool,

    /// Show all messages, including debug output
    #[arg(long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}
