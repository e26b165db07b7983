use crate::config::SiteConfig;
use crate::router::Route;
use crate::utils::xml::{XmlWriter, write_elem, write_empty_elem, write_end, write_icon, write_start, write_text};
use anyhow::Result;

const QUICK_LINKS: [(&str, Route); 4] = [
    ("Home", Route::Home),
    ("Services", Route::Services),
    ("Our Team", Route::About),
    ("Contact", Route::Contact),
];

const SERVICES: [&str; 6] = [
    "Immigration Law",
    "Asylum & Human Rights",
    "Family Law",
    "Residential Property",
    "Employment Law",
    "Civil Litigation",
];

const LINK: &str = "text-teal-50 hover:text-white transition-colors text-sm cursor-pointer";
const HEADING: &str = "text-lg font-bold mb-6";

/// Site footer. `year` is the copyright year.
pub fn write_footer(w: &mut XmlWriter, config: &SiteConfig, year: i32) -> Result<()> {
    let base = &config.base;

    write_start(w, "footer", &[("class", "bg-gradient-to-br from-teal-700 to-teal-800 text-white")])?;
    write_start(w, "div", &[("class", "max-w-7xl mx-auto px-6 py-16")])?;
    write_start(w, "div", &[("class", "grid md:grid-cols-2 lg:grid-cols-4 gap-12 mb-12")])?;

    // about
    write_start(w, "div", &[])?;
    write_start(w, "div", &[("class", "flex items-center gap-3 mb-6")])?;
    write_start(
        w,
        "div",
        &[("class", "w-12 h-12 flex items-center justify-center bg-white rounded-lg shadow-lg")],
    )?;
    write_icon(w, "ri-scales-3-line text-2xl text-teal-700")?;
    write_end(w, "div")?;
    write_start(w, "div", &[])?;
    write_elem(w, "div", &[("class", "text-xl font-bold")], &base.short_name)?;
    write_elem(w, "div", &[("class", "text-xs text-teal-100")], "Solicitors")?;
    write_end(w, "div")?;
    write_end(w, "div")?;
    write_elem(
        w,
        "p",
        &[("class", "text-teal-50 text-sm leading-relaxed mb-4")],
        &base.description,
    )?;
    write_start(w, "div", &[("class", "flex items-center gap-2 text-sm text-white font-semibold")])?;
    write_icon(w, "ri-shield-check-line")?;
    write_elem(w, "span", &[], "Lexcel Accredited")?;
    write_end(w, "div")?;
    write_end(w, "div")?;

    // quick links
    write_start(w, "div", &[])?;
    write_elem(w, "h3", &[("class", HEADING)], "Quick Links")?;
    write_start(w, "ul", &[("class", "space-y-3")])?;
    for (label, route) in QUICK_LINKS {
        write_start(w, "li", &[])?;
        write_elem(w, "a", &[("href", route.path().unwrap_or("/")), ("class", LINK)], label)?;
        write_end(w, "li")?;
    }
    write_end(w, "ul")?;
    write_end(w, "div")?;

    // services
    write_start(w, "div", &[])?;
    write_elem(w, "h3", &[("class", HEADING)], "Our Services")?;
    write_start(w, "ul", &[("class", "space-y-3")])?;
    for service in SERVICES {
        write_start(w, "li", &[])?;
        write_elem(w, "a", &[("href", "/services"), ("class", LINK)], service)?;
        write_end(w, "li")?;
    }
    write_end(w, "ul")?;
    write_end(w, "div")?;

    // contact
    let tel = base.tel_href();
    let mailto = format!("mailto:{}", base.email);
    write_start(w, "div", &[])?;
    write_elem(w, "h3", &[("class", HEADING)], "Contact Us")?;
    write_start(w, "ul", &[("class", "space-y-4")])?;
    write_start(w, "li", &[("class", "flex items-start gap-3")])?;
    write_icon(w, "ri-map-pin-line text-white text-lg mt-1")?;
    write_start(w, "div", &[("class", "text-sm text-teal-50")])?;
    write_text(w, &base.street)?;
    write_empty_elem(w, "br", &[] as &[(&str, &str)])?;
    write_text(w, &format!("{} {}", base.locality, base.postcode))?;
    write_empty_elem(w, "br", &[] as &[(&str, &str)])?;
    write_text(w, "United Kingdom")?;
    write_end(w, "div")?;
    write_end(w, "li")?;
    write_start(w, "li", &[("class", "flex items-center gap-3")])?;
    write_icon(w, "ri-phone-line text-white text-lg")?;
    write_elem(w, "a", &[("href", tel.as_str()), ("class", LINK)], &base.phone_display)?;
    write_end(w, "li")?;
    write_start(w, "li", &[("class", "flex items-center gap-3")])?;
    write_icon(w, "ri-mail-line text-white text-lg")?;
    write_elem(w, "a", &[("href", mailto.as_str()), ("class", LINK)], &base.email)?;
    write_end(w, "li")?;
    write_end(w, "ul")?;
    write_end(w, "div")?;

    write_end(w, "div")?;

    // bottom bar
    let copyright = format!("© {year} {}. All rights reserved.", base.copyright_holder());
    write_start(w, "div", &[("class", "border-t border-teal-600 pt-8")])?;
    write_start(w, "div", &[("class", "flex flex-col md:flex-row justify-between items-center gap-4")])?;
    write_elem(w, "p", &[("class", "text-sm text-teal-100")], &copyright)?;
    write_elem(
        w,
        "a",
        &[("href", "/legal"), ("class", "text-sm text-teal-100 hover:text-white transition-colors")],
        "Legal Information",
    )?;
    write_end(w, "div")?;
    write_end(w, "div")?;

    write_end(w, "div")?;
    write_end(w, "footer")
}
