//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// lexsite: law firm website renderer and server
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file name (default: lexsite.toml)
    #[arg(short = 'C', long, default_value = "lexsite.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared arguments for Build and Serve commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Minify the html content
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Override base URL for canonical and Open Graph URLs.
    ///
    /// Takes precedence over both `[base] url` and the `SITE_URL`
    /// environment variable.
    ///
    /// Example:
    ///   lexsite build --base-url "https://nandyandco.co.uk"
    #[arg(long = "base-url")]
    pub base_url: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render every route to static HTML in the output directory
    Build {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Clean output directory completely before building
        #[arg(long)]
        clean: bool,

        /// enable sitemap generation
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        sitemap: Option<bool>,
    },

    /// Serve the site, rendering each request and relaying contact forms
    Serve {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Interface to bind on
        #[arg(short, long)]
        interface: Option<String>,

        /// The port you should provide
        #[arg(short, long)]
        port: Option<u16>,
    },
}

impl Cli {
    pub fn build_args(&self) -> &BuildArgs {
        match &self.command {
            Commands::Build { build_args, .. } | Commands::Serve { build_args, .. } => build_args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_with_flags() {
        let cli = Cli::try_parse_from([
            "lexsite",
            "build",
            "--clean",
            "--minify=false",
            "--base-url",
            "https://example.com",
        ])
        .unwrap();

        match &cli.command {
            Commands::Build { clean, sitemap, .. } => {
                assert!(*clean);
                assert_eq!(*sitemap, None);
            }
            Commands::Serve { .. } => panic!("expected build"),
        }
        assert_eq!(cli.build_args().minify, Some(false));
        assert_eq!(cli.build_args().base_url.as_deref(), Some("https://example.com"));
        assert_eq!(cli.config, PathBuf::from("lexsite.toml"));
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["lexsite", "serve", "-p", "8080", "-i", "0.0.0.0"]).unwrap();

        match cli.command {
            Commands::Serve { interface, port, .. } => {
                assert_eq!(interface.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
            }
            Commands::Build { .. } => panic!("expected serve"),
        }
    }

    #[test]
    fn test_bare_minify_flag_means_true() {
        let cli = Cli::try_parse_from(["lexsite", "build", "--minify"]).unwrap();
        assert_eq!(cli.build_args().minify, Some(true));
    }
}
