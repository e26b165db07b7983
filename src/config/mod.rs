//! Site configuration management for `lexsite.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                          |
//! |-------------|--------------------------------------------------|
//! | `[base]`    | Firm identity (name, url, phone, address)        |
//! | `[build]`   | Export paths, minify, sitemap, static head       |
//! | `[serve]`   | HTTP server (interface, port)                    |
//! | `[nav]`     | Navigation shell (scroll threshold)              |
//! | `[form]`    | Contact form relay (endpoint, timeout)           |
//!
//! # Example
//!
//! ```toml
//! [base]
//! url = "https://nandyandco.co.uk"
//!
//! [build]
//! output = "public"
//! minify = true
//!
//! [serve]
//! port = 5277
//!
//! [form]
//! endpoint = "https://forms.example.com/f/abc123"
//! ```
//!
//! The base URL is resolved as `--base-url` > `SITE_URL` > `[base] url` > `""`.

mod base;
mod build;
pub mod defaults;
mod error;
mod form;
mod handle;
mod nav;
mod serve;

pub use handle::{cfg, init_config};

use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;
use form::FormConfig;
use nav::NavConfig;
use serve::ServeConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Environment variable carrying the deployment base URL.
pub const SITE_URL_ENV: &str = "SITE_URL";

/// Root configuration structure representing lexsite.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub base: BaseConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub serve: ServeConfig,

    #[serde(default)]
    pub nav: NavConfig,

    #[serde(default)]
    pub form: FormConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load `lexsite.toml` (or defaults when absent), apply CLI and
    /// environment overrides, then validate.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.config_path = Self::normalize_path(&config_path);
        config.update_with_cli(cli, std::env::var(SITE_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Base URL used to build absolute canonical and Open Graph URLs.
    ///
    /// Empty when unset, which yields root-relative URLs.
    pub fn base_url(&self) -> &str {
        self.base.url.as_deref().unwrap_or("")
    }

    /// Update configuration with CLI arguments and the `SITE_URL` value.
    pub fn update_with_cli(&mut self, cli: &Cli, env_url: Option<String>) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        self.update_path_with_root(&root, cli);

        let args = cli.build_args();
        Self::update_option(&mut self.build.minify, args.minify.as_ref());

        let env_url = env_url.filter(|url| !url.trim().is_empty());
        if let Some(url) = args.base_url.clone().or(env_url) {
            self.base.url = Some(url);
        }
        self.base.url = self
            .base
            .url
            .take()
            .map(|url| url.trim().trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty());

        match &cli.command {
            Commands::Build { clean, sitemap, .. } => {
                self.build.clean |= *clean;
                Self::update_option(&mut self.build.sitemap.enable, sitemap.as_ref());
            }
            Commands::Serve {
                interface, port, ..
            } => {
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
            }
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve directory paths against the root and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, cli: &Cli) {
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        let root = Self::normalize_path(&Self::expand_tilde(root));
        self.set_root(&root);

        self.build.output = Self::normalize_path(&root.join(Self::expand_tilde(&self.build.output)));
        self.build.assets = Self::normalize_path(&root.join(Self::expand_tilde(&self.build.assets)));
    }

    /// Expand a leading `~` in a configured path.
    fn expand_tilde(path: &Path) -> PathBuf {
        match path.to_str() {
            Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
            None => path.to_path_buf(),
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate the merged configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if self.base.title.trim().is_empty() {
            bail!(ConfigError::Validation("[base.title] must not be empty".into()));
        }

        if !self.form.endpoint.starts_with("http") {
            bail!(ConfigError::Validation(
                "[form.endpoint] must start with http:// or https://".into()
            ));
        }

        if self.form.timeout_secs == 0 {
            bail!(ConfigError::Validation(
                "[form.timeout_secs] must be greater than zero".into()
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("lexsite").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_from_str() {
        let config = SiteConfig::from_str(
            r#"
            [base]
            url = "https://example.com"
            [nav]
            scroll_threshold = 80
        "#,
        )
        .unwrap();

        assert_eq!(config.base_url(), "https://example.com");
        assert_eq!(config.nav.scroll_threshold, 80);
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(SiteConfig::from_str("[base\nurl = 1").is_err());
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        assert!(SiteConfig::from_str("[deploy]\nforce = true").is_err());
    }

    #[test]
    fn test_base_url_defaults_to_empty() {
        let config = SiteConfig::default();
        assert_eq!(config.base_url(), "");
    }

    #[test]
    fn test_base_url_precedence() {
        let mut config = SiteConfig::from_str("[base]\nurl = \"https://toml.example\"").unwrap();
        config.update_with_cli(&cli(&["build"]), Some("https://env.example".into()));
        assert_eq!(config.base_url(), "https://env.example");

        let mut config = SiteConfig::from_str("[base]\nurl = \"https://toml.example\"").unwrap();
        config.update_with_cli(
            &cli(&["build", "--base-url", "https://cli.example"]),
            Some("https://env.example".into()),
        );
        assert_eq!(config.base_url(), "https://cli.example");

        let mut config = SiteConfig::from_str("[base]\nurl = \"https://toml.example\"").unwrap();
        config.update_with_cli(&cli(&["build"]), Some("  ".into()));
        assert_eq!(config.base_url(), "https://toml.example");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let mut config = SiteConfig::default();
        config.update_with_cli(&cli(&["build", "--base-url", "https://example.com/"]), None);
        assert_eq!(config.base_url(), "https://example.com");
    }

    #[test]
    fn test_serve_overrides() {
        let mut config = SiteConfig::default();
        config.update_with_cli(&cli(&["serve", "--port", "9000", "--minify=false"]), None);

        assert_eq!(config.serve.port, 9000);
        assert_eq!(config.serve.interface, "127.0.0.1");
        assert!(!config.build.minify);
    }

    #[test]
    fn test_build_overrides() {
        let mut config = SiteConfig::default();
        config.update_with_cli(&cli(&["build", "--clean", "--sitemap=false"]), None);

        assert!(config.build.clean);
        assert!(!config.build.sitemap.enable);
        assert!(config.build.output.is_absolute());
        assert!(config.build.output.ends_with("public"));
    }

    #[test]
    fn test_output_override_is_rooted() {
        let mut config = SiteConfig::default();
        config.update_with_cli(&cli(&["--root", "/srv/site", "-o", "dist", "build"]), None);
        assert_eq!(config.build.output, PathBuf::from("/srv/site/dist"));
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config = SiteConfig::from_str("[base]\nurl = \"example.com\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_form_settings() {
        let config = SiteConfig::from_str("[form]\nendpoint = \"mailto:x@y\"").unwrap();
        assert!(config.validate().is_err());

        let config = SiteConfig::from_str("[form]\ntimeout_secs = 0").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_defaults_ok() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn test_load_without_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let config = SiteConfig::load(&cli(&["--root", root, "build"])).unwrap();

        assert_eq!(config.serve.port, 5277);
        assert!(config.build.output.starts_with(dir.path().canonicalize().unwrap()));
    }

    #[test]
    fn test_load_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("lexsite.toml"), "[serve]\nport = 6001\n").unwrap();
        let root = dir.path().to_str().unwrap();
        let config = SiteConfig::load(&cli(&["--root", root, "serve"])).unwrap();

        assert_eq!(config.serve.port, 6001);
        assert!(config.config_path.ends_with("lexsite.toml"));
    }
}
