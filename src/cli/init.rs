//! `--init-config`: write a default configuration file.

use anyhow::{Context, Result};
use std::{
    fs,
    io::{self, BufRead, Write},
    path::Path,
};

/// Generate the default config file content.
pub fn generate_config_template() -> String {
    format!(
        r#"# tex2any configuration file (v{})
# Place this file at ~/.tex2any.toml

[author]
name = "Your Name"
email = "your.email@example.com"

[footer]
copyright_year = "2025"
license = "CC BY 4.0"
custom_text = ""

[output]
default_theme = "academic"
default_formats = ["html5"]  # Can specify multiple: ["html5", "markdown", "epub"]
default_components = ["reading-time", "back-to-top", "theme-toggle"]
minify = false

# External tools (uncomment to override)
# [engine]
# latexmlc = "latexmlc"
# latexml = "latexml"
# pandoc = "pandoc"
# timeout = 900
# engine_timeout = 600
# converter_timeout = 300
"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Outcome of [`write_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    Aborted,
}

/// Write the default config to `path`, asking before overwriting.
///
/// `confirm` is only called when the file already exists.
pub fn write_config(path: &Path, confirm: impl FnOnce(&Path) -> Result<bool>) -> Result<InitOutcome> {
    if path.exists() && !confirm(path)? {
        return Ok(InitOutcome::Aborted);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(InitOutcome::Created)
}

/// Run `--init-config` interactively.
pub fn init_config(path: &Path) -> Result<()> {
    match write_config(path, prompt_overwrite)? {
        InitOutcome::Created => {
            println!("Created default configuration at {}", path.display());
            println!("Edit this file to customize your settings.");
        }
        InitOutcome::Aborted => println!("Aborted."),
    }
    Ok(())
}

fn prompt_overwrite(path: &Path) -> Result<bool> {
    print!("{} already exists. Overwrite? (y/N): ", path.display());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}
