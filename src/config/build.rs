//! `[build]` section configuration.
//!
//! Output paths, minification, sitemap and the static part of `<head>`.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in lexsite.toml.
///
/// # Example
/// ```toml
/// [build]
/// output = "public"
/// minify = true
///
/// [build.sitemap]
/// enable = true
///
/// [build.head]
/// icon = "/assets/favicon.ico"
/// styles = ["/assets/site.css"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Static export directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Static assets served under `/assets/` and copied on export.
    #[serde(default = "defaults::build::assets")]
    #[educe(Default = defaults::build::assets())]
    pub assets: PathBuf,

    /// Minify rendered HTML.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// Remove the output directory before exporting.
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub clean: bool,

    /// Emit `<meta name="last-modified">`, stamped with the render date.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub last_modified: bool,

    #[serde(default)]
    pub sitemap: SitemapConfig,

    #[serde(default)]
    pub head: HeadConfig,
}

/// `[build.sitemap]` section.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Output file, relative to `[build] output`.
    #[serde(default = "defaults::build::sitemap::path")]
    #[educe(Default = defaults::build::sitemap::path())]
    pub path: PathBuf,
}

/// `[build.head]` section for the page-independent head elements.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct HeadConfig {
    /// Favicon URL.
    #[serde(default)]
    pub icon: Option<String>,

    /// Stylesheet URLs.
    #[serde(default = "defaults::build::head::styles")]
    #[educe(Default = defaults::build::head::styles())]
    pub styles: Vec<String>,

    /// Script entries.
    #[serde(default)]
    pub scripts: Vec<ScriptEntry>,
}

/// Script entry for `[build.head.scripts]`.
///
/// # Formats
/// ```toml
/// scripts = ["/assets/app.js"]
///
/// scripts = [
///     { src = "/assets/app.js", defer = true },
///     { src = "https://example.com/analytics.js", async = true },
/// ]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptEntry {
    Simple(String),
    WithOptions {
        src: String,
        #[serde(default)]
        defer: bool,
        #[serde(default)]
        r#async: bool,
    },
}

impl ScriptEntry {
    pub fn src(&self) -> &str {
        match self {
            ScriptEntry::Simple(src) => src,
            ScriptEntry::WithOptions { src, .. } => src,
        }
    }

    pub fn is_defer(&self) -> bool {
        match self {
            ScriptEntry::Simple(_) => false,
            ScriptEntry::WithOptions { defer, .. } => *defer,
        }
    }

    pub fn is_async(&self) -> bool {
        match self {
            ScriptEntry::Simple(_) => false,
            ScriptEntry::WithOptions { r#async, .. } => *r#async,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::*;

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.assets, PathBuf::from("assets"));
        assert!(config.build.minify);
        assert!(!config.build.clean);
        assert!(config.build.last_modified);
        assert!(config.build.sitemap.enable);
        assert_eq!(config.build.sitemap.path, PathBuf::from("sitemap.xml"));
        assert_eq!(config.build.head.styles.len(), 2);
    }

    #[test]
    fn test_head_scripts_both_formats() {
        let config = r#"
            [build.head]
            icon = "/assets/favicon.ico"
            styles = []
            scripts = [
                "/assets/a.js",
                { src = "/assets/b.js", defer = true },
                { src = "/assets/c.js", async = true },
            ]
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();
        let scripts = &config.build.head.scripts;

        assert_eq!(config.build.head.icon.as_deref(), Some("/assets/favicon.ico"));
        assert!(config.build.head.styles.is_empty());
        assert_eq!(scripts.len(), 3);
        assert_eq!(scripts[0].src(), "/assets/a.js");
        assert!(!scripts[0].is_defer());
        assert!(scripts[1].is_defer());
        assert!(!scripts[1].is_async());
        assert!(scripts[2].is_async());
    }

    #[test]
    fn test_sitemap_disabled() {
        let config = r#"
            [build.sitemap]
            enable = false
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();
        assert!(!config.build.sitemap.enable);
    }

    #[test]
    fn test_unknown_field_rejection() {
        let result: Result<SiteConfig, _> = toml::from_str("[build]\ncontent = \"x\"");
        assert!(result.is_err());
    }
}
