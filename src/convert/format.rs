//! Output formats and their pipelines.

use crate::error::{Error, Result};
use std::{fmt, str::FromStr};

/// A supported output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Html,
    Html5,
    Xhtml,
    Xml,
    Markdown,
    Txt,
    Epub,
    Json,
}

/// How a format is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    /// `latexmlc --format=<format>`.
    Engine { format: &'static str },
    /// `latexml`, LaTeXML's own XML.
    EngineXml,
    /// `latexmlc` to HTML, then `pandoc <args>`.
    ViaConverter {
        args: &'static [&'static str],
        label: &'static str,
    },
}

impl Format {
    /// Every format, in listing order.
    pub const ALL: [Self; 8] = [
        Self::Html,
        Self::Html5,
        Self::Xhtml,
        Self::Xml,
        Self::Markdown,
        Self::Txt,
        Self::Epub,
        Self::Json,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Html5 => "html5",
            Self::Xhtml => "xhtml",
            Self::Xml => "xml",
            Self::Markdown => "markdown",
            Self::Txt => "txt",
            Self::Epub => "epub",
            Self::Json => "json",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Html => "HTML format (default LaTeXML output)",
            Self::Html5 => "HTML5 format with modern features",
            Self::Xhtml => "XHTML format",
            Self::Xml => "LaTeXML XML intermediate format",
            Self::Markdown => "Markdown format (via pandoc)",
            Self::Txt => "Plain text format",
            Self::Epub => "EPUB e-book format",
            Self::Json => "JSON representation",
        }
    }

    /// Formats whose output is composed with themes and components.
    pub const fn is_html_family(self) -> bool {
        matches!(self, Self::Html | Self::Html5 | Self::Xhtml)
    }

    /// Formats where an inline table of contents stands in for `floating-toc`.
    pub const fn has_inline_toc(self) -> bool {
        matches!(self, Self::Markdown | Self::Epub)
    }

    /// `(directory, file name)` of the output.
    pub const fn output_layout(self) -> (&'static str, &'static str) {
        match self {
            Self::Html | Self::Html5 => ("html", "index.html"),
            Self::Xhtml => ("html", "index.xhtml"),
            Self::Xml => ("xml", "document.xml"),
            Self::Markdown => ("markdown", "index.md"),
            Self::Txt => ("txt", "document.txt"),
            Self::Epub => ("epub", "document.epub"),
            Self::Json => ("json", "document.json"),
        }
    }

    pub const fn pipeline(self) -> Pipeline {
        match self {
            Self::Html | Self::Html5 | Self::Xhtml | Self::Json => Pipeline::Engine {
                format: self.name(),
            },
            Self::Xml => Pipeline::EngineXml,
            Self::Markdown => Pipeline::ViaConverter {
                args: &[],
                label: "Markdown",
            },
            Self::Txt => Pipeline::ViaConverter {
                args: &["-t", "plain"],
                label: "plain text",
            },
            Self::Epub => Pipeline::ViaConverter {
                args: &[],
                label: "EPUB",
            },
        }
    }

    /// Parse a comma-separated list, rejecting the first unsupported name.
    pub fn parse_list(list: &str) -> Result<Vec<Self>> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect()
    }

    fn names() -> String {
        Self::ALL.map(Self::name).join(", ")
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == lower)
            .ok_or_else(|| {
                Error::InvalidValue(format!(
                    "Unsupported format: {lower}\nSupported formats: {}",
                    Self::names()
                ))
            })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
