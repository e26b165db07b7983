//! Output minification for rendered pages and the sitemap.
//!
//! Controlled by `[build] minify` (or `--minify`). When disabled the input
//! is handed back borrowed.

use crate::config::SiteConfig;
use std::borrow::Cow;

/// What is being minified.
pub enum MinifyType<'a> {
    Html(&'a [u8]),
    Xml(&'a [u8]),
}

/// Minify `content` if the config asks for it.
pub fn minify<'a>(content: MinifyType<'a>, config: &SiteConfig) -> Cow<'a, [u8]> {
    match (content, config.build.minify) {
        (MinifyType::Html(html), false) | (MinifyType::Xml(html), false) => Cow::Borrowed(html),
        (MinifyType::Html(html), true) => Cow::Owned(minify_html_bytes(html)),
        (MinifyType::Xml(xml), true) => Cow::Owned(minify_xml_bytes(xml)),
    }
}

fn minify_html_bytes(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    // keep the document valid for validators and crawlers
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    cfg.minify_css = true;
    // minify-js 0.6 asserts on some valid control flow; inline scripts ship as written
    cfg.minify_js = false;
    minify_html::minify(html, &cfg)
}

/// Line-based: trims each line and drops blank ones.
fn minify_xml_bytes(xml: &[u8]) -> Vec<u8> {
    String::from_utf8_lossy(xml)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<String>()
        .into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(minify: bool) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.minify = minify;
        config
    }

    #[test]
    fn test_disabled_borrows_input() {
        let html = b"<main>\n  <p>Forest Gate</p>\n</main>";
        let out = minify(MinifyType::Html(html), &config(false));
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(&*out, html);
    }

    #[test]
    fn test_html_whitespace_collapses() {
        let html = b"<html>\n  <head>\n  </head>\n  <body>\n    <p>Call us</p>\n  </body>\n</html>";
        let out = minify(MinifyType::Html(html), &config(true));
        let out = String::from_utf8_lossy(&out);

        assert!(!out.contains("\n  "));
        assert!(out.contains("<p>Call us</p>"));
    }

    #[test]
    fn test_inline_script_survives() {
        let html = format!("<html><head></head><body><script>{}</script></body></html>", crate::shell::NAV_SCRIPT);
        let out = minify(MinifyType::Html(html.as_bytes()), &config(true));
        let out = String::from_utf8_lossy(&out);

        assert!(out.contains("menu.removeAttribute(\"hidden\")"));
        assert!(out.contains("window.addEventListener(\"scroll\""));
    }

    #[test]
    fn test_sitemap_xml() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">

  <url>
    <loc>https://example.com/legal</loc>
  </url>
</urlset>"#;
        let out = minify(MinifyType::Xml(xml), &config(true));

        assert_eq!(
            &*out,
            br#"<?xml version="1.0" encoding="UTF-8"?><urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"><url><loc>https://example.com/legal</loc></url></urlset>"#
        );
    }
}
