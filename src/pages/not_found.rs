use super::{PageContext, PageView, write_hero};
use crate::config::SiteConfig;
use crate::router::Route;
use crate::seo::{MetaSnapshot, SeoError};
use crate::utils::xml::{XmlWriter, write_elem, write_end, write_icon, write_start, write_text};
use anyhow::Result;

/// Catch-all page. Carries no canonical link and no page schema.
pub(super) struct NotFound;

impl PageView for NotFound {
    fn route(&self) -> Route {
        Route::NotFound
    }

    fn meta(&self, config: &SiteConfig) -> Result<MetaSnapshot, SeoError> {
        MetaSnapshot::builder(
            format!("Page Not Found | {}", config.base.title),
            "The page you are looking for does not exist or has moved.",
        )
        .build()
    }

    fn render(&self, w: &mut XmlWriter, ctx: &PageContext<'_>) -> Result<()> {
        let tel = ctx.config.base.tel_href();

        write_start(w, "main", &[])?;
        write_hero(w, "Page Not Found", "The page you are looking for does not exist or has moved.")?;
        write_start(w, "section", &[("class", "py-24 bg-white")])?;
        write_start(w, "div", &[("class", "max-w-3xl mx-auto px-6 text-center space-y-8")])?;
        write_elem(
            w,
            "p",
            &[("class", "text-lg text-gray-700")],
            "Try one of the pages below, or call us if you need help straight away.",
        )?;
        write_start(w, "ul", &[("class", "flex flex-wrap justify-center gap-4")])?;
        for (label, route) in [
            ("Home", Route::Home),
            ("Services", Route::Services),
            ("Our Team", Route::About),
            ("Contact", Route::Contact),
        ] {
            let href = route.path().unwrap_or("/");
            write_start(w, "li", &[])?;
            write_elem(
                w,
                "a",
                &[("href", href), ("class", "bg-teal-50 hover:bg-teal-100 text-teal-700 px-6 py-3 rounded-lg font-semibold")],
                label,
            )?;
            write_end(w, "li")?;
        }
        write_end(w, "ul")?;
        write_start(w, "a", &[("href", tel.as_str()), ("class", "text-teal-600 text-lg font-semibold inline-flex items-center gap-2")])?;
        write_icon(w, "ri-phone-line")?;
        write_text(w, &ctx.config.base.phone_display)?;
        write_end(w, "a")?;
        write_end(w, "div")?;
        write_end(w, "section")?;
        write_end(w, "main")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_has_no_canonical_or_keywords() {
        let meta = NotFound.meta(&SiteConfig::default()).unwrap();
        assert!(meta.title.starts_with("Page Not Found | "));
        assert!(meta.canonical_path.is_none());
        assert!(meta.keywords.is_none());
        assert_eq!(meta.og_type, "website");
    }
}
