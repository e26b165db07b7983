//! lexsite: the Nandy & Co. law firm website.
//!
//! Renders the marketing pages with synchronized SEO metadata, exports
//! them as static HTML and serves them with a working contact form.

mod build;
mod cli;
mod config;
mod document;
mod form;
mod generator;
mod head;
mod logger;
mod pages;
mod router;
mod seo;
mod serve;
mod session;
mod shell;
mod utils;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::{SiteConfig, cfg, init_config};
use serve::serve_site;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_config(SiteConfig::load(&cli)?);

    match &cli.command {
        Commands::Build { .. } => build_site(&cfg()),
        Commands::Serve { .. } => serve_site(),
    }
}
