//! Static export.
//!
//! Renders every route into the output directory, copies the assets
//! directory and writes the sitemap.
//!
//! ```text
//! lexsite.toml ──► build_site
//!                    ├─ clean?      remove output/
//!                    ├─ routes      par_iter: Session::open ─► render ─► output/<route>
//!                    ├─ assets      assets/** ─► output/assets/**
//!                    └─ sitemap     output/sitemap.xml
//! ```
//!
//! Each route renders in its own [`Session`], so no head state is shared
//! between rayon workers. No server handles `POST /contact` on a static
//! host, so exported forms post straight to `[form] endpoint`.

use crate::{
    config::SiteConfig, generator::sitemap::build_sitemap, log, pages::FormTarget, router::Route,
    session::Session,
};
use anyhow::{Context, Result};
use chrono::Local;
use rayon::prelude::*;
use std::{fs, path::Path};
use walkdir::{DirEntry, WalkDir};

/// Directory name of copied assets inside the output.
const ASSETS_DIR: &str = "assets";

/// Export the whole site to `config.build.output`.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    let routes: Vec<Route> = Route::ALL.into_iter().chain([Route::NotFound]).collect();
    routes
        .par_iter()
        .try_for_each(|&route| export_route(config, output, route))?;

    let copied = copy_assets(&config.build.assets, &output.join(ASSETS_DIR))?;
    build_sitemap(config, output, Local::now().date_naive())?;

    log!("build"; "{} pages, {} assets", routes.len(), copied);
    Ok(())
}

fn export_route(config: &SiteConfig, output: &Path, route: Route) -> Result<()> {
    let html = Session::open(config, route)?
        .with_target(FormTarget::Endpoint)
        .render()?;
    let path = output.join(route.output_file());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))
}

/// Copy `src` into `dst` recursively, returning the number of files copied.
/// Hidden entries are skipped; a missing source directory copies nothing.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize> {
    if !src.is_dir() {
        return Ok(0);
    }

    let mut copied = 0;
    let entries = WalkDir::new(src)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read {}", src.display()))?;
        let rel = entry.path().strip_prefix(src)?;
        let to = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&to).with_context(|| format!("Failed to create {}", to.display()))?;
        } else {
            fs::copy(entry.path(), &to)
                .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config(dir: &TempDir) -> SiteConfig {
        let mut config = SiteConfig::from_str("[base]\nurl = \"https://example.com\"").unwrap();
        config.build.output = dir.path().join("public");
        config.build.assets = dir.path().join("assets");
        config.build.minify = false;
        config
    }

    #[test]
    fn test_exports_every_route() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        build_site(&config).unwrap();

        let output = &config.build.output;
        for file in [
            "index.html",
            "services/index.html",
            "about/index.html",
            "contact/index.html",
            "legal/index.html",
            "404.html",
        ] {
            let html = fs::read_to_string(output.join(file)).unwrap();
            assert!(html.starts_with("<!DOCTYPE html>"), "{file}");
        }
        assert!(output.join("sitemap.xml").is_file());
    }

    #[test]
    fn test_exported_pages_carry_their_own_canonical() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        build_site(&config).unwrap();

        let legal = fs::read_to_string(config.build.output.join("legal/index.html")).unwrap();
        assert!(legal.contains(r#"href="https://example.com/legal""#));
        assert_eq!(legal.matches(r#"rel="canonical""#).count(), 1);

        let missing = fs::read_to_string(config.build.output.join("404.html")).unwrap();
        assert!(!missing.contains(r#"rel="canonical""#));
    }

    #[test]
    fn test_exported_forms_post_to_endpoint() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config.form.endpoint = "https://collector.example/f/1".into();
        build_site(&config).unwrap();

        for file in ["index.html", "contact/index.html"] {
            let html = fs::read_to_string(config.build.output.join(file)).unwrap();
            assert!(html.contains(r#"action="https://collector.example/f/1""#), "{file}");
            assert!(!html.contains(r#"action="/contact"#), "{file}");
        }
    }

    #[test]
    fn test_copies_assets_and_skips_hidden() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        fs::create_dir_all(config.build.assets.join("img")).unwrap();
        fs::write(config.build.assets.join("site.css"), "body{}").unwrap();
        fs::write(config.build.assets.join("img/logo.svg"), "<svg/>").unwrap();
        fs::write(config.build.assets.join(".DS_Store"), "").unwrap();
        fs::create_dir_all(config.build.assets.join(".cache")).unwrap();
        fs::write(config.build.assets.join(".cache/draft.css"), "").unwrap();

        build_site(&config).unwrap();
        let assets = config.build.output.join("assets");
        assert_eq!(fs::read_to_string(assets.join("site.css")).unwrap(), "body{}");
        assert!(assets.join("img/logo.svg").is_file());
        assert!(!assets.join(".DS_Store").exists());
        assert!(!assets.join(".cache").exists());
    }

    #[test]
    fn test_clean_removes_stale_files() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        fs::create_dir_all(&config.build.output).unwrap();
        fs::write(config.build.output.join("stale.html"), "old").unwrap();

        config.build.clean = true;
        build_site(&config).unwrap();
        assert!(!config.build.output.join("stale.html").exists());
        assert!(config.build.output.join("index.html").is_file());
    }
}
