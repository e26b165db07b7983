use super::enquiry::write_enquiry_form;
use super::services::{IMMIGRATION, OTHER, Service, service_slug};
use super::{AREAS_SERVED, PageContext, PageView, write_cta, write_rich, write_section_heading};
use crate::config::SiteConfig;
use crate::router::Route;
use crate::seo::{MetaSnapshot, SeoError, schema};
use crate::shell::CONTACT_FORM_ANCHOR;
use crate::utils::xml::{XmlWriter, write_elem, write_empty_elem, write_end, write_icon, write_start, write_text};
use anyhow::Result;

/// Anchor of the home page enquiry section.
pub(super) const CONTACT_SECTION: &str = "contact-section";

const OFFERS: [(&str, &str); 3] = [
    ("Immigration Law", "Visas, asylum, settlement and citizenship applications"),
    ("Asylum & Human Rights", "Asylum applications and human rights claims"),
    ("Family Law", "Divorce, child custody and financial settlements"),
];

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "ri-global-line",
        "Immigration Specialists",
        "We focus on UK immigration law, with years of experience helping clients with visas, asylum and settlement",
    ),
    (
        "ri-map-pin-line",
        "Local to Forest Gate",
        "Based in E7, serving Ilford, Barking, Stratford, East Ham and surrounding East London areas",
    ),
    (
        "ri-translate-2",
        "Multilingual Team",
        "We speak English, Pashto, Dari, Sinhala, Hindi, Urdu, Gujarati, Marathi, Bengali and Persian",
    ),
    (
        "ri-award-line",
        "Lexcel Accredited",
        "Recognised for excellence in legal practice management and client care standards",
    ),
];

/// `(name, location, text)`
const REVIEWS: [(&str, &str, &str); 3] = [
    (
        "Amira Hassan",
        "Forest Gate",
        "The team helped me with my spouse visa application. They were professional, patient and explained everything clearly in a way I could understand. I highly recommend their immigration services.",
    ),
    (
        "Rajesh Patel",
        "Ilford",
        "Excellent service for my property purchase. The solicitors were thorough, kept me informed throughout and made the whole process stress-free. Very happy with the outcome.",
    ),
    (
        "Sarah Ahmed",
        "East Ham",
        "I was very stressed about my asylum case but the team were compassionate and supportive throughout. They fought hard for me and I got a positive result. Thank you.",
    ),
];

const LOCAL_AREAS: [&str; 12] = [
    "Forest Gate",
    "Ilford",
    "Barking",
    "East Ham",
    "Stratford",
    "Leyton",
    "Plaistow",
    "Upton Park",
    "Leytonstone",
    "Walthamstow",
    "Canning Town",
    "Manor Park",
];

pub(super) struct Home;

impl PageView for Home {
    fn route(&self) -> Route {
        Route::Home
    }

    fn meta(&self, config: &SiteConfig) -> Result<MetaSnapshot, SeoError> {
        let graph = schema::graph(vec![
            schema::legal_service(
                "Immigration solicitors specialising in UK visas, asylum, settlement and citizenship applications. Based in Forest Gate, serving East London and the wider UK.",
                &AREAS_SERVED,
                &OFFERS,
                config,
            ),
            schema::breadcrumbs(&[("Home", "/")], config.base_url()),
        ]);

        MetaSnapshot::builder(
            "Immigration Solicitors Forest Gate | Nandy & Co. Solicitors E7",
            "Expert immigration solicitors in Forest Gate, London E7. Specialist advice on visas, asylum, settlement & citizenship. Serving Ilford, Barking, East Ham & East London. Call 020 8534 7000.",
        )
        .keywords("immigration solicitors Forest Gate, immigration lawyers East London, asylum solicitors E7, visa solicitors Forest Gate, immigration law Ilford, Forest Gate solicitors")
        .canonical("/")
        .schema(graph)
        .build()
    }

    fn render(&self, w: &mut XmlWriter, ctx: &PageContext<'_>) -> Result<()> {
        let config = ctx.config;

        write_start(w, "main", &[])?;
        write_home_hero(w, config)?;

        write_start(w, "section", &[("class", "py-24 bg-white")])?;
        write_start(w, "div", &[("class", "max-w-7xl mx-auto px-6")])?;
        write_section_heading(
            w,
            "Immigration Law Services",
            "We specialise in helping individuals and families navigate UK immigration law",
        )?;
        write_start(w, "div", &[("class", "grid md:grid-cols-2 lg:grid-cols-3 gap-8")])?;
        for service in &IMMIGRATION {
            write_summary(w, service)?;
        }
        write_end(w, "div")?;
        write_end(w, "div")?;
        write_end(w, "section")?;

        write_start(w, "section", &[("class", "py-24 bg-gradient-to-br from-gray-50 to-teal-50")])?;
        write_start(w, "div", &[("class", "max-w-7xl mx-auto px-6")])?;
        write_section_heading(
            w,
            "Other Legal Services",
            "We also provide expert advice in family law, property and employment matters",
        )?;
        write_start(w, "div", &[("class", "grid md:grid-cols-2 lg:grid-cols-4 gap-8")])?;
        for service in &OTHER {
            write_summary(w, service)?;
        }
        write_end(w, "div")?;
        write_end(w, "div")?;
        write_end(w, "section")?;

        write_features(w)?;
        write_reviews(w)?;
        write_areas(w)?;
        write_contact_section(w, ctx)?;

        write_cta(
            w,
            config,
            "Need Help with Immigration or Another Legal Matter?",
            "Our experienced solicitors are here to help. Contact us today for clear advice and transparent fees.",
            "Request a Consultation",
        )?;
        write_end(w, "main")
    }
}

fn write_home_hero(w: &mut XmlWriter, config: &SiteConfig) -> Result<()> {
    let tel = config.base.tel_href();
    let form_href = format!("#{CONTACT_SECTION}");

    write_start(w, "section", &[("class", "relative min-h-screen flex items-center bg-gradient-to-b from-teal-800 to-teal-600")])?;
    write_start(w, "div", &[("class", "relative z-10 w-full max-w-7xl mx-auto px-6 py-32 text-center text-white")])?;
    write_start(w, "h1", &[("class", "text-5xl md:text-6xl lg:text-7xl font-bold mb-6 leading-tight")])?;
    write_text(w, "Immigration Solicitors")?;
    write_empty_elem(w, "br", &[] as &[(&str, &str)])?;
    write_text(w, "in Forest Gate, East London")?;
    write_end(w, "h1")?;
    write_elem(
        w,
        "p",
        &[("class", "text-xl md:text-2xl mb-8 max-w-3xl mx-auto font-light")],
        "Expert legal support for immigration, visas, asylum and family matters. Serving Forest Gate and surrounding East London communities.",
    )?;
    write_start(w, "div", &[("class", "flex flex-col sm:flex-row gap-4 justify-center items-center mb-8")])?;
    write_start(w, "a", &[("href", tel.as_str()), ("class", "whitespace-nowrap bg-teal-600 hover:bg-teal-700 text-white px-8 py-4 rounded-lg text-lg font-semibold inline-flex items-center gap-2")])?;
    write_icon(w, "ri-phone-line text-xl")?;
    write_text(w, "Call Our Office")?;
    write_end(w, "a")?;
    write_elem(
        w,
        "a",
        &[("href", form_href.as_str()), ("class", "whitespace-nowrap bg-white hover:bg-gray-50 text-teal-700 px-8 py-4 rounded-lg text-lg font-semibold")],
        "Request a Consultation",
    )?;
    write_end(w, "div")?;
    write_start(w, "p", &[("class", "text-sm flex items-center justify-center gap-2")])?;
    write_icon(w, "ri-shield-check-line text-teal-400")?;
    write_text(w, "Lexcel Accredited • Serving Forest Gate since 2005")?;
    write_end(w, "p")?;
    write_end(w, "div")?;
    write_end(w, "section")
}

/// Short service card linking to its anchor on the services page.
fn write_summary(w: &mut XmlWriter, service: &Service) -> Result<()> {
    let href = format!("{}#{}", Route::Services.path().unwrap_or("/services"), service_slug(service.title));
    let icon = format!("{} text-3xl text-teal-600", service.icon);

    write_start(w, "div", &[("class", "bg-gradient-to-br from-gray-50 to-teal-50 rounded-xl p-8 border border-gray-100")])?;
    write_start(w, "div", &[("class", "w-16 h-16 flex items-center justify-center bg-teal-100 rounded-lg mb-6")])?;
    write_icon(w, &icon)?;
    write_end(w, "div")?;
    write_elem(w, "h3", &[("class", "text-xl font-bold text-gray-900 mb-4")], service.title)?;
    write_elem(w, "p", &[("class", "text-gray-600 mb-6 leading-relaxed")], service.summary)?;
    write_start(w, "a", &[("href", href.as_str()), ("class", "text-teal-600 hover:text-teal-700 font-semibold inline-flex items-center gap-2")])?;
    write_text(w, "Learn more")?;
    write_icon(w, "ri-arrow-right-line")?;
    write_end(w, "a")?;
    write_end(w, "div")
}

fn write_features(w: &mut XmlWriter) -> Result<()> {
    write_start(w, "section", &[("class", "py-24 bg-white")])?;
    write_start(w, "div", &[("class", "max-w-7xl mx-auto px-6")])?;
    write_section_heading(w, "Why Choose Nandy & Co", "Your trusted immigration solicitors in Forest Gate")?;
    write_start(w, "div", &[("class", "grid md:grid-cols-2 lg:grid-cols-4 gap-8")])?;
    for (icon, title, description) in FEATURES {
        let icon = format!("{icon} text-3xl text-teal-600");
        write_start(w, "div", &[("class", "text-center")])?;
        write_start(w, "div", &[("class", "w-16 h-16 flex items-center justify-center bg-teal-100 rounded-full mx-auto mb-6")])?;
        write_icon(w, &icon)?;
        write_end(w, "div")?;
        write_elem(w, "h3", &[("class", "text-xl font-bold text-gray-900 mb-3")], title)?;
        write_elem(w, "p", &[("class", "text-gray-600 leading-relaxed")], description)?;
        write_end(w, "div")?;
    }
    write_end(w, "div")?;
    write_start(w, "div", &[("class", "mt-12 flex items-center justify-center gap-4")])?;
    write_icon(w, "ri-shield-star-line text-4xl text-teal-600")?;
    write_start(w, "div", &[])?;
    write_elem(w, "p", &[("class", "font-bold text-gray-900")], "Lexcel Accredited Firm")?;
    write_elem(
        w,
        "p",
        &[("class", "text-sm text-gray-600")],
        "Recognised for high standards in legal practice and client care",
    )?;
    write_end(w, "div")?;
    write_end(w, "div")?;
    write_end(w, "div")?;
    write_end(w, "section")
}

fn write_reviews(w: &mut XmlWriter) -> Result<()> {
    write_start(w, "section", &[("class", "py-24 bg-gradient-to-br from-gray-50 to-teal-50")])?;
    write_start(w, "div", &[("class", "max-w-7xl mx-auto px-6")])?;
    write_section_heading(
        w,
        "What Our Clients Say",
        "5-star reviews from clients across Forest Gate and East London",
    )?;
    write_start(w, "div", &[("class", "grid md:grid-cols-3 gap-8")])?;
    for (name, location, text) in REVIEWS {
        write_start(w, "figure", &[("class", "bg-white rounded-xl p-8 shadow-lg")])?;
        write_start(w, "div", &[("class", "flex gap-1 mb-4"), ("aria-label", "5 out of 5 stars")])?;
        for _ in 0..5 {
            write_icon(w, "ri-star-fill text-yellow-400")?;
        }
        write_end(w, "div")?;
        write_elem(
            w,
            "blockquote",
            &[("class", "text-gray-700 mb-6 leading-relaxed italic")],
            &format!("\"{text}\""),
        )?;
        write_start(w, "figcaption", &[])?;
        write_elem(w, "p", &[("class", "font-bold text-gray-900")], name)?;
        write_elem(w, "p", &[("class", "text-sm text-gray-600")], location)?;
        write_end(w, "figcaption")?;
        write_end(w, "figure")?;
    }
    write_end(w, "div")?;
    write_end(w, "div")?;
    write_end(w, "section")
}

fn write_areas(w: &mut XmlWriter) -> Result<()> {
    write_start(w, "section", &[("class", "py-24 bg-white")])?;
    write_start(w, "div", &[("class", "max-w-7xl mx-auto px-6")])?;
    write_elem(w, "h2", &[("class", "text-4xl md:text-5xl font-bold text-gray-900 mb-6")], "Areas We Serve")?;
    write_rich(
        w,
        "p",
        &[("class", "text-lg text-gray-700 mb-6 leading-relaxed")],
        "Based in **Forest Gate (E7)**, we are your local immigration solicitors serving clients across East London and the wider UK.",
    )?;
    write_elem(w, "h3", &[("class", "text-xl font-bold text-gray-900 mb-4")], "East London Areas:")?;
    write_start(w, "ul", &[("class", "grid grid-cols-2 gap-3 mb-6")])?;
    for area in LOCAL_AREAS {
        write_start(w, "li", &[("class", "flex items-center gap-2")])?;
        write_icon(w, "ri-map-pin-fill text-teal-600")?;
        write_elem(w, "span", &[("class", "text-gray-700")], area)?;
        write_end(w, "li")?;
    }
    write_end(w, "ul")?;
    write_start(w, "div", &[("class", "bg-gradient-to-br from-teal-50 to-gray-50 rounded-xl p-6 border border-gray-100")])?;
    write_start(w, "h3", &[("class", "text-lg font-bold text-gray-900 mb-3")])?;
    write_icon(w, "ri-video-line text-teal-600")?;
    write_text(w, " Remote Consultations Available")?;
    write_end(w, "h3")?;
    write_rich(
        w,
        "p",
        &[("class", "text-gray-700 leading-relaxed")],
        "We offer **phone and Zoom consultations** for clients across the UK who need immigration law advice.",
    )?;
    write_end(w, "div")?;
    write_end(w, "div")?;
    write_end(w, "section")
}

fn write_contact_section(w: &mut XmlWriter, ctx: &PageContext<'_>) -> Result<()> {
    let base = &ctx.config.base;
    let tel = base.tel_href();
    let mailto = format!("mailto:{}", base.email);

    write_start(w, "section", &[("id", CONTACT_SECTION), ("class", "py-24 bg-gradient-to-br from-gray-50 to-teal-50")])?;
    write_start(w, "div", &[("class", "max-w-4xl mx-auto px-6")])?;
    write_section_heading(
        w,
        "Get in Touch",
        "Need help with immigration or another legal matter? Contact us today",
    )?;
    write_enquiry_form(w, "enquiry-form", &ctx.form_action(), ctx.form)?;
    write_elem(
        w,
        "p",
        &[("class", "text-center text-sm text-gray-600 mt-4")],
        "We aim to respond to all enquiries within 24 working hours",
    )?;

    write_start(w, "div", &[("class", "mt-12 grid md:grid-cols-3 gap-6 text-center")])?;
    write_start(w, "div", &[])?;
    write_icon(w, "ri-phone-line text-2xl text-teal-600")?;
    write_elem(w, "h3", &[("class", "font-bold text-gray-900 mb-2")], "Call Us")?;
    write_elem(w, "a", &[("href", tel.as_str()), ("class", "text-teal-600 text-lg font-semibold")], &base.phone_display)?;
    write_end(w, "div")?;
    write_start(w, "div", &[])?;
    write_icon(w, "ri-mail-line text-2xl text-teal-600")?;
    write_elem(w, "h3", &[("class", "font-bold text-gray-900 mb-2")], "Email Us")?;
    write_elem(w, "a", &[("href", mailto.as_str()), ("class", "text-teal-600")], &base.email)?;
    write_end(w, "div")?;
    write_start(w, "div", &[])?;
    write_icon(w, "ri-map-pin-line text-2xl text-teal-600")?;
    write_elem(w, "h3", &[("class", "font-bold text-gray-900 mb-2")], "Visit Us")?;
    write_start(w, "p", &[("class", "text-gray-600 text-sm")])?;
    write_text(w, &base.street)?;
    write_empty_elem(w, "br", &[] as &[(&str, &str)])?;
    write_text(w, &format!("{} {}", base.locality, base.postcode))?;
    write_end(w, "p")?;
    write_end(w, "div")?;
    write_end(w, "div")?;

    write_start(w, "p", &[("class", "text-center text-sm text-gray-600 mt-8")])?;
    write_text(w, "Prefer a dedicated page? ")?;
    let contact_href = format!("/contact#{CONTACT_FORM_ANCHOR}");
    write_elem(w, "a", &[("href", contact_href.as_str()), ("class", "text-teal-600 font-semibold")], "Visit our contact page")?;
    write_end(w, "p")?;

    write_end(w, "div")?;
    write_end(w, "section")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::xml::{create_xml_writer, into_string};

    fn render() -> String {
        let config = SiteConfig::default();
        let mut w = create_xml_writer();
        Home.render(&mut w, &PageContext::new(&config)).unwrap();
        into_string(w).unwrap()
    }

    #[test]
    fn test_learn_more_links_target_service_anchors() {
        let html = render();
        for service in IMMIGRATION.iter().chain(OTHER.iter()) {
            let href = format!(r#"href="/services#{}""#, service_slug(service.title));
            assert!(html.contains(&href), "{href}");
        }
    }

    #[test]
    fn test_contact_section_holds_form() {
        let html = render();
        let section = html.find(r#"id="contact-section""#).unwrap();
        let form = html.find(r#"id="enquiry-form""#).unwrap();
        assert!(section < form);
        assert!(html.contains(r##"href="#contact-section""##));
    }

    #[test]
    fn test_reviews_and_areas() {
        let html = render();
        for (name, location, _) in REVIEWS {
            assert!(html.contains(name));
            assert!(html.contains(location));
        }
        assert_eq!(html.matches("ri-map-pin-fill").count(), LOCAL_AREAS.len());
    }

    #[test]
    fn test_meta_schema() {
        let meta = Home.meta(&SiteConfig::default()).unwrap();
        let graph = meta.structured_data.unwrap();
        assert_eq!(graph["@graph"][0]["@type"], "LegalService");
        assert_eq!(graph["@graph"][1]["@type"], "BreadcrumbList");
        assert_eq!(meta.canonical_path.as_deref(), Some("/"));
    }

    #[test]
    fn test_visit_us_address() {
        assert!(render().contains("Forest Gate<br/>London E7"));
    }
}
