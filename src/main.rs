//! tex2any - Convert LaTeX documents to themed HTML and other formats.

mod asset;
mod cli;
mod config;
mod convert;
mod core;
mod embed;
mod error;
mod html;
mod logger;
mod registry;
mod resource;
mod utils;

use std::process::ExitCode;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::{ConfigOverrides, Tex2AnyConfig, apply_overrides, config_path, init_config};
use logger::Level;
use registry::Registry;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // domain errors already carry their cause in the message
            if err.downcast_ref::<error::Error>().is_some() {
                log!("error"; "{}", err);
            } else {
                log!("error"; "{:#}", err);
            }
            ExitCode::from(error::exit_code_for(&err))
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_level(Level::from_flags(cli.debug, cli.verbose, cli.quiet));

    let registry = Registry::builtin();

    if cli.list_formats {
        print!("{}", cli::list::formats());
        return Ok(());
    }
    if cli.list_themes {
        print!("{}", cli::list::themes(&registry));
        return Ok(());
    }
    if cli.list_components {
        print!("{}", cli::list::components(&registry));
        return Ok(());
    }

    let path = config_path(cli.config.as_deref());
    if cli.init_config {
        return cli::init::init_config(&path);
    }

    // Ctrl+C must be caught before any external process is spawned
    core::setup_interrupt_handler()?;

    init_config(Tex2AnyConfig::load(&path));
    let config = apply_overrides(&ConfigOverrides {
        author_name: cli.author_name.clone(),
        author_email: cli.author_email.clone(),
        copyright_year: cli.copyright_year.clone(),
    });
    registry::self_check(&registry);

    let Some(input) = cli.input.as_deref() else {
        // clap enforces INPUT unless a listing/init flag is present
        anyhow::bail!("the following arguments are required: <INPUT>");
    };
    cli::convert::convert_document(&cli, input, &config, &registry)
}
