//! tola-link - classify and render links for tola sites.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod link;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;
    debug!("config"; "origin {:?}, path prefix {}",
        config.origin().host(), config.path_prefix);

    // Prefix is queried once; every link below reuses this classifier
    let classifier = config.classifier()?;
    let html = config.html_primitives();

    match &cli.command {
        Commands::Classify { args } => cli::classify::run_classify(args, &classifier),
        Commands::Render { args } => cli::render::run_render(args, &classifier, &html),
        Commands::Batch { args } => cli::batch::run_batch(args, &classifier, &html),
    }
}
