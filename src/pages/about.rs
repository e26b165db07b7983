use super::{PageContext, PageView, write_cta, write_hero, write_rich, write_section_heading};
use crate::config::SiteConfig;
use crate::router::Route;
use crate::seo::{MetaSnapshot, SeoError, schema};
use crate::utils::xml::{XmlWriter, write_elem, write_end, write_icon, write_start, write_text};
use anyhow::Result;

const OVERVIEW: [&str; 4] = [
    "**Nandy & Co. Solicitors** has been serving the **Forest Gate community** since 2005. We are a local law firm with a strong focus on **immigration law**, helping individuals and families navigate the UK visa system, asylum applications and settlement matters.",
    "We know that dealing with immigration issues is stressful. Many of our clients are worried about their future, separated from loved ones, or facing urgent deadlines. That's why we take the time to listen, explain your options clearly and work hard to get the right result for you.",
    "Our immigration solicitors have helped hundreds of clients with spouse visas, work permits, asylum claims, deportation cases and citizenship applications. We understand the Home Office system and know how to present strong applications that give you the best chance of success.",
    "Beyond immigration, we also help with family law matters, property transactions, employment disputes and civil litigation. Whatever your legal need, we're here to provide clear advice and professional representation.",
];

const EXPERTISE: [&str; 3] = [
    "Our team of **qualified immigration solicitors** brings decades of combined experience helping clients with visas, asylum, deportation defence and settlement applications. We stay current with the latest immigration rules and Home Office guidance so we can give you accurate, up-to-date advice.",
    "What makes us different is our **understanding of the communities we serve**. Many of our clients are navigating an unfamiliar legal system while dealing with language barriers and cultural differences. We've built a multilingual team that can communicate with you in your own language and understand your cultural background.",
    "Whether you need help with a spouse visa, are seeking asylum, facing deportation or applying for British citizenship, our immigration solicitors have the knowledge and experience to guide you through every step of the process.",
];

const LANGUAGES: [&str; 10] = [
    "English", "Pashto", "Dari", "Sinhala", "Hindi", "Urdu", "Gujarati", "Marathi", "Bengali", "Persian",
];

const ACCREDITATIONS: [(&str, &str, &str); 3] = [
    (
        "ri-award-line",
        "Lexcel Accredited",
        "Awarded by the Law Society for excellence in legal practice management, client care and compliance.",
    ),
    (
        "ri-shield-check-line",
        "SRA Regulated",
        "Regulated by the Solicitors Regulation Authority, meeting strict professional and ethical standards.",
    ),
    (
        "ri-star-line",
        "5-Star Reviews",
        "Highly rated by clients on Google for our immigration law services and professional approach.",
    ),
];

const LEXCEL: [&str; 3] = [
    "**Lexcel** is the Law Society's quality mark for excellence in legal practice management and client care. It shows we are committed to providing high-quality legal services and maintaining strong compliance systems.",
    "To maintain our Lexcel accreditation, we undergo regular independent assessments covering client care, case management, financial management, risk management and information security. This means you can trust that your case is being handled professionally and securely.",
    "When you choose Nandy & Co., you're choosing a firm that meets the highest professional standards in the legal industry.",
];

const COMMUNITY: [&str; 4] = [
    "We are based in **Forest Gate (E7)** and proud to serve the diverse communities of **East London**. Our clients come from Ilford, Barking, East Ham, Stratford, Leyton, Plaistow, Upton Park, Leytonstone, Walthamstow, Canning Town, Wanstead and Manor Park.",
    "Our **local knowledge** means we understand the specific challenges faced by residents in these areas. We've helped countless families reunite through spouse visas, supported asylum seekers through difficult times and guided many clients on their journey to British citizenship.",
    "While we're based locally, we also serve clients **across the UK** through phone and Zoom consultations. Whether you're in London or elsewhere in the country, our immigration solicitors can provide expert advice and representation.",
    "Our reputation is built on **results and trust**. Many of our clients come to us through recommendations from family and friends who we've helped in the past.",
];

const REASONS: [(&str, &str, &str); 4] = [
    (
        "ri-focus-line",
        "Immigration Law Focus",
        "We specialise in UK immigration law with years of experience in visas, asylum and settlement",
    ),
    (
        "ri-map-pin-user-line",
        "Local to You",
        "Based in Forest Gate, we understand the East London community and are easy to reach",
    ),
    (
        "ri-chat-check-line",
        "Clear Communication",
        "We explain everything in plain English and keep you informed throughout your case",
    ),
    (
        "ri-hand-heart-line",
        "Compassionate Approach",
        "We understand immigration matters are stressful and treat every client with care and respect",
    ),
];

pub(super) struct About;

impl PageView for About {
    fn route(&self) -> Route {
        Route::About
    }

    fn meta(&self, config: &SiteConfig) -> Result<MetaSnapshot, SeoError> {
        let description = "Meet our experienced immigration solicitors in Forest Gate. Lexcel accredited, multilingual team serving East London since 2005. Expert advice on UK immigration law.";
        let graph = schema::graph(vec![
            schema::typed_page("AboutPage", "Our Immigration Solicitors Team", description, "/about", config),
            schema::breadcrumbs(&[("Home", "/"), ("Our Team", "/about")], config.base_url()),
        ]);

        MetaSnapshot::builder("Our Immigration Solicitors Team | Nandy & Co. Forest Gate E7", description)
            .keywords("immigration solicitors team, Forest Gate lawyers, Lexcel accredited solicitors, multilingual legal team, East London immigration lawyers")
            .canonical("/about")
            .schema(graph)
            .build()
    }

    fn render(&self, w: &mut XmlWriter, ctx: &PageContext<'_>) -> Result<()> {
        write_start(w, "main", &[])?;
        write_hero(
            w,
            "Our Team",
            "Experienced immigration solicitors serving Forest Gate and East London communities",
        )?;

        write_start(w, "section", &[("class", "py-24 bg-white")])?;
        write_start(w, "div", &[("class", "max-w-4xl mx-auto px-6")])?;
        write_prose(w, "About Nandy & Co", &OVERVIEW)?;
        write_end(w, "div")?;
        write_end(w, "section")?;

        write_start(w, "section", &[("class", "py-24 bg-gradient-to-br from-gray-50 to-teal-50")])?;
        write_start(w, "div", &[("class", "max-w-5xl mx-auto px-6")])?;
        write_section_heading(
            w,
            "Immigration Law Expertise",
            "Qualified solicitors with years of experience in UK immigration law",
        )?;
        write_paragraphs(w, &EXPERTISE)?;
        write_languages(w)?;
        write_end(w, "div")?;
        write_end(w, "section")?;

        write_start(w, "section", &[("class", "py-24 bg-white")])?;
        write_start(w, "div", &[("class", "max-w-7xl mx-auto px-6")])?;
        write_section_heading(
            w,
            "Accreditations & Quality Standards",
            "Recognised for excellence in legal services and client care",
        )?;
        write_tiles(w, &ACCREDITATIONS, "grid md:grid-cols-3 gap-8 mb-16")?;
        write_start(w, "div", &[("class", "max-w-4xl mx-auto bg-teal-50 rounded-2xl p-10 border border-teal-100")])?;
        write_prose(w, "What Lexcel Accreditation Means", &LEXCEL)?;
        write_end(w, "div")?;
        write_end(w, "div")?;
        write_end(w, "section")?;

        write_start(w, "section", &[("class", "py-24 bg-gradient-to-br from-gray-50 to-teal-50")])?;
        write_start(w, "div", &[("class", "max-w-4xl mx-auto px-6")])?;
        write_prose(w, "Serving Forest Gate & East London", &COMMUNITY)?;
        write_end(w, "div")?;
        write_end(w, "section")?;

        write_start(w, "section", &[("class", "py-24 bg-white")])?;
        write_start(w, "div", &[("class", "max-w-7xl mx-auto px-6")])?;
        write_elem(
            w,
            "h2",
            &[("class", "text-4xl md:text-5xl font-bold text-gray-900 mb-16 text-center")],
            "Why Choose Nandy & Co",
        )?;
        write_tiles(w, &REASONS, "grid md:grid-cols-2 lg:grid-cols-4 gap-8")?;
        write_end(w, "div")?;
        write_end(w, "section")?;

        write_cta(
            w,
            ctx.config,
            "Ready to Get Started?",
            "Contact our immigration solicitors in Forest Gate for expert legal advice",
            "Get in Touch",
        )?;
        write_end(w, "main")
    }
}

fn write_prose(w: &mut XmlWriter, heading: &str, paragraphs: &[&str]) -> Result<()> {
    write_elem(w, "h2", &[("class", "text-4xl font-bold text-gray-900 mb-8")], heading)?;
    write_paragraphs(w, paragraphs)
}

fn write_paragraphs(w: &mut XmlWriter, paragraphs: &[&str]) -> Result<()> {
    write_start(w, "div", &[("class", "space-y-6 text-lg text-gray-700 leading-relaxed")])?;
    for paragraph in paragraphs {
        write_rich(w, "p", &[], paragraph)?;
    }
    write_end(w, "div")
}

/// Icon tiles from `(icon, title, text)` triples.
fn write_tiles(w: &mut XmlWriter, tiles: &[(&str, &str, &str)], grid: &str) -> Result<()> {
    write_start(w, "div", &[("class", grid)])?;
    for (icon, title, text) in tiles {
        let icon = format!("{icon} text-4xl text-teal-600");
        write_start(w, "div", &[("class", "text-center bg-gradient-to-br from-gray-50 to-teal-50 rounded-xl p-8")])?;
        write_start(w, "div", &[("class", "w-20 h-20 flex items-center justify-center bg-white rounded-full mx-auto mb-6 shadow-lg")])?;
        write_icon(w, &icon)?;
        write_end(w, "div")?;
        write_elem(w, "h3", &[("class", "text-xl font-bold text-gray-900 mb-3")], title)?;
        write_elem(w, "p", &[("class", "text-gray-600 leading-relaxed")], text)?;
        write_end(w, "div")?;
    }
    write_end(w, "div")
}

fn write_languages(w: &mut XmlWriter) -> Result<()> {
    write_start(w, "div", &[("class", "mt-16 bg-white rounded-2xl p-10 shadow-lg")])?;
    write_start(w, "div", &[("class", "text-center mb-8")])?;
    write_icon(w, "ri-translate-2 text-4xl text-teal-600")?;
    write_elem(w, "h3", &[("class", "text-2xl font-bold text-gray-900 mt-4 mb-2")], "We Speak Your Language")?;
    write_elem(
        w,
        "p",
        &[("class", "text-gray-600")],
        "Our team can assist you in the following languages",
    )?;
    write_end(w, "div")?;
    write_start(w, "ul", &[("class", "grid grid-cols-2 md:grid-cols-5 gap-4")])?;
    for language in LANGUAGES {
        write_start(w, "li", &[("class", "flex items-center gap-2 bg-teal-50 rounded-lg px-4 py-3")])?;
        write_icon(w, "ri-check-line text-teal-600")?;
        write_text(w, language)?;
        write_end(w, "li")?;
    }
    write_end(w, "ul")?;
    write_start(w, "p", &[("class", "text-center text-sm text-gray-600 mt-6")])?;
    write_icon(w, "ri-information-line text-teal-600")?;
    write_text(w, " Interpreters can be arranged for other languages")?;
    write_end(w, "p")?;
    write_end(w, "div")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::xml::{create_xml_writer, into_string};

    #[test]
    fn test_render_lists_languages_and_accreditations() {
        let config = SiteConfig::default();
        let mut w = create_xml_writer();
        About.render(&mut w, &PageContext::new(&config)).unwrap();
        let html = into_string(w).unwrap();

        for language in LANGUAGES {
            assert!(html.contains(language), "{language}");
        }
        assert!(html.contains("SRA Regulated"));
        assert!(html.contains("<strong>Nandy &amp; Co. Solicitors</strong> has been serving"));
    }

    #[test]
    fn test_meta_schema_is_about_page() {
        let meta = About.meta(&SiteConfig::default()).unwrap();
        let graph = meta.structured_data.unwrap();
        assert_eq!(graph["@graph"][0]["@type"], "AboutPage");
        assert_eq!(graph["@graph"][1]["itemListElement"][1]["name"], "Our Team");
    }
}
