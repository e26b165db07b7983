//! Sitemap generation.
//!
//! Lists every static route against the configured base URL:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/services</loc>
//!     <lastmod>2026-03-14</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::SiteConfig,
    log,
    router::Route,
    seo::url::absolute,
    utils::minify::{MinifyType, minify},
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::{fs, path::Path};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Write the sitemap into `output` if enabled.
pub fn build_sitemap(config: &SiteConfig, output: &Path, date: NaiveDate) -> Result<()> {
    if !config.build.sitemap.enable {
        return Ok(());
    }

    let path = output.join(&config.build.sitemap.path);
    let xml = render_sitemap(config, date);
    fs::write(&path, &*xml).with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

    log!("sitemap"; "{} urls", Route::ALL.len());
    Ok(())
}

/// Sitemap bytes for `config`, minified when configured.
pub fn render_sitemap(config: &SiteConfig, date: NaiveDate) -> Vec<u8> {
    let xml = Sitemap::from_routes(config.base_url(), date).into_xml();
    minify(MinifyType::Xml(xml.as_bytes()), config).into_owned()
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: String,
}

impl Sitemap {
    fn from_routes(base: &str, date: NaiveDate) -> Self {
        let lastmod = date.format("%Y-%m-%d").to_string();
        let urls = Route::ALL
            .iter()
            .filter_map(|route| route.path())
            .map(|path| UrlEntry {
                loc: absolute(base, path),
                lastmod: lastmod.clone(),
            })
            .collect();
        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", entry.lastmod));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
