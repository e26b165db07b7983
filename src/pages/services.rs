use super::{AREAS_SERVED, PageContext, PageView, write_cta, write_hero, write_rich, write_section_heading};
use crate::config::SiteConfig;
use crate::router::Route;
use crate::seo::{MetaSnapshot, SeoError, schema};
use crate::utils::xml::{XmlWriter, write_elem, write_end, write_icon, write_start, write_text};
use anyhow::Result;

/// One service card.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    /// Short text for the home page.
    pub summary: &'static str,
    pub description: &'static str,
}

pub(crate) const IMMIGRATION: [Service; 6] = [
    Service {
        icon: "ri-passport-line",
        title: "Visas & Leave to Remain",
        summary: "Help with spouse visas, work permits, student visas and visa extensions. We guide you through applications to maximise your chances of success.",
        description: "Whether you need a spouse visa, work permit, student visa or an extension to your current leave, we can help. Our immigration solicitors guide you through the application process, check all your documents are correct and submit everything on time to give you the best chance of success.",
    },
    Service {
        icon: "ri-shield-user-line",
        title: "Asylum & Human Rights",
        summary: "Compassionate support for asylum seekers and human rights cases. We understand the urgency and work to present the strongest case.",
        description: "If you are seeking protection in the UK, our asylum solicitors provide compassionate support with asylum applications, fresh claims and human rights appeals. We understand how urgent and stressful these cases are and work hard to present the strongest possible case on your behalf.",
    },
    Service {
        icon: "ri-alert-line",
        title: "Deportation & Detention",
        summary: "Urgent legal representation to challenge deportation orders and apply for bail from detention centres.",
        description: "Facing deportation or being held in an immigration detention centre is extremely stressful. Our immigration lawyers provide urgent legal representation to challenge deportation orders, apply for bail and explore all options to keep you and your family together in the UK.",
    },
    Service {
        icon: "ri-building-line",
        title: "Sponsorship Licences",
        summary: "Helping UK employers obtain and maintain sponsor licences to hire overseas workers.",
        description: "UK employers need a sponsor licence to hire workers from overseas. We help businesses in Forest Gate and across the UK with sponsor licence applications, compliance advice and renewals. Our clear guidance helps you meet Home Office requirements and avoid costly mistakes.",
    },
    Service {
        icon: "ri-file-list-line",
        title: "Appeals & Reviews",
        summary: "If your visa was refused, we can help. We analyse decisions, identify grounds for appeal and represent you at tribunal.",
        description: "If your visa application has been refused, you may have the right to appeal or request an administrative review. Our immigration solicitors analyse refusal decisions, identify grounds for challenge and represent you at tribunal hearings to fight for the outcome you deserve.",
    },
    Service {
        icon: "ri-user-heart-line",
        title: "Settlement & Citizenship",
        summary: "Applications for indefinite leave to remain (ILR) and British citizenship, including Life in the UK test guidance.",
        description: "We help clients apply for indefinite leave to remain (ILR) and British citizenship. Our immigration solicitors make sure you meet all residence requirements, prepare comprehensive applications and guide you through the Life in the UK test and citizenship ceremony process.",
    },
];

pub(crate) const OTHER: [Service; 4] = [
    Service {
        icon: "ri-parent-line",
        title: "Family Law",
        summary: "Divorce, child custody and financial settlements handled with sensitivity.",
        description: "Our family law solicitors handle divorce, child custody arrangements, financial settlements and domestic violence injunctions with sensitivity and professionalism. We understand these are difficult times and provide clear advice to help you move forward.",
    },
    Service {
        icon: "ri-home-heart-line",
        title: "Residential Property",
        summary: "Conveyancing for buying, selling and remortgaging properties.",
        description: "Complete conveyancing services for property purchases, sales, remortgaging and lease extensions across London and the UK. We keep you informed at every stage and work to make your property transaction as smooth as possible.",
    },
    Service {
        icon: "ri-briefcase-line",
        title: "Employment Law",
        summary: "Advice on unfair dismissal and workplace discrimination.",
        description: "We represent employees in unfair dismissal claims, discrimination cases, redundancy matters and employment tribunal proceedings. If you are having problems at work, we can advise you on your rights and options.",
    },
    Service {
        icon: "ri-scales-3-line",
        title: "Civil Litigation",
        summary: "Representation in contract disputes and debt recovery.",
        description: "Expert representation in contract disputes, debt recovery, property disputes and other civil matters. We work to protect your rights and achieve the best possible outcome for your case.",
    },
];

const FEE_PROMISE: [(&str, &str); 4] = [
    (
        "Clear explanation before work begins",
        "We discuss all fees upfront so you know exactly what to expect",
    ),
    (
        "Fixed fees where possible",
        "Many of our immigration services are offered at fixed prices for your peace of mind",
    ),
    (
        "No hidden costs",
        "We provide a detailed breakdown of all charges including disbursements and Home Office fees",
    ),
    (
        "Payment plans available",
        "We can discuss flexible payment arrangements where appropriate",
    ),
];

const FEE_FAQ: [(&str, &str); 3] = [
    (
        "Do you offer fixed fees for immigration work?",
        "Yes. Many of our immigration services are offered at fixed prices, and every fee is explained before work begins.",
    ),
    (
        "Are there any hidden costs?",
        "No. We provide a detailed breakdown of all charges including disbursements and Home Office fees.",
    ),
    (
        "Can I pay in instalments?",
        "We can discuss flexible payment arrangements where appropriate.",
    ),
];

/// In-page anchor of a service card: lowercase, whitespace runs become
/// `-`, `&` becomes `and`.
pub fn service_slug(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .replace('&', "and")
}

pub(super) struct Services;

impl PageView for Services {
    fn route(&self) -> Route {
        Route::Services
    }

    fn meta(&self, config: &SiteConfig) -> Result<MetaSnapshot, SeoError> {
        let mut areas = AREAS_SERVED.to_vec();
        areas.push("East London");

        let graph = schema::graph(vec![
            schema::service(
                "Immigration Law Services",
                "Comprehensive immigration law services including visas, asylum, deportation defence, settlement and citizenship applications",
                &areas,
                config,
            ),
            schema::faq(&FEE_FAQ),
            schema::breadcrumbs(&[("Home", "/"), ("Services", "/services")], config.base_url()),
        ]);

        MetaSnapshot::builder(
            "Immigration Law Services Forest Gate | Visa & Asylum Solicitors E7",
            "Specialist immigration law services in Forest Gate: visas, asylum, deportation defence, settlement & citizenship. Transparent fees. Serving East London. Call 020 8534 7000.",
        )
        .keywords("immigration law services, visa solicitors Forest Gate, asylum lawyers E7, deportation defence, settlement citizenship, immigration solicitors East London")
        .canonical("/services")
        .schema(graph)
        .build()
    }

    fn render(&self, w: &mut XmlWriter, ctx: &PageContext<'_>) -> Result<()> {
        let config = ctx.config;
        let tel = config.base.tel_href();

        write_start(w, "main", &[])?;
        write_hero(
            w,
            "Our Legal Services",
            "Immigration law specialists in Forest Gate, also providing family law, property and employment advice",
        )?;

        write_start(w, "section", &[("class", "py-16 bg-white")])?;
        write_start(w, "div", &[("class", "max-w-4xl mx-auto px-6 text-center")])?;
        write_rich(
            w,
            "p",
            &[("class", "text-lg text-gray-700 leading-relaxed mb-6")],
            "**We specialise in immigration law**, helping individuals and families navigate the complex UK visa system, asylum applications and settlement matters. Based in **Forest Gate (E7)**, we serve clients across East London and the wider UK.",
        )?;
        write_rich(
            w,
            "p",
            &[("class", "text-lg text-gray-700 leading-relaxed")],
            "We pride ourselves on providing **clear advice, transparent fees and local knowledge**. Our multilingual team speaks English, Pashto, Dari, Sinhala, Hindi, Urdu, Gujarati, Marathi, Bengali and Persian.",
        )?;
        write_end(w, "div")?;
        write_end(w, "section")?;

        write_start(w, "section", &[("class", "py-24 bg-gradient-to-br from-gray-50 to-teal-50")])?;
        write_start(w, "div", &[("class", "max-w-7xl mx-auto px-6")])?;
        write_section_heading(
            w,
            "Immigration Law Services",
            "Our core expertise: helping clients with UK visas, asylum, settlement and citizenship",
        )?;
        write_start(w, "div", &[("class", "grid md:grid-cols-2 lg:grid-cols-3 gap-8")])?;
        for service in &IMMIGRATION {
            write_card(w, service, "bg-white rounded-xl p-8 shadow-lg scroll-mt-24")?;
        }
        write_end(w, "div")?;
        write_start(w, "div", &[("class", "text-center mt-12")])?;
        write_elem(
            w,
            "p",
            &[("class", "text-lg text-gray-700 mb-6")],
            "Need help with an immigration matter? Our immigration solicitors in Forest Gate are here to help.",
        )?;
        write_start(w, "a", &[("href", tel.as_str()), ("class", "bg-teal-600 hover:bg-teal-700 text-white px-8 py-4 rounded-lg text-lg font-semibold inline-flex items-center gap-2")])?;
        write_icon(w, "ri-phone-line text-xl")?;
        write_text(w, &format!("Call {}", config.base.phone_display))?;
        write_end(w, "a")?;
        write_end(w, "div")?;
        write_end(w, "div")?;
        write_end(w, "section")?;

        write_start(w, "section", &[("class", "py-24 bg-white")])?;
        write_start(w, "div", &[("class", "max-w-7xl mx-auto px-6")])?;
        write_section_heading(
            w,
            "Other Legal Services",
            "In addition to immigration law, we provide expert legal services in these areas",
        )?;
        write_start(w, "div", &[("class", "grid md:grid-cols-2 gap-8")])?;
        for service in &OTHER {
            write_card(
                w,
                service,
                "bg-gradient-to-br from-gray-50 to-teal-50 rounded-xl p-8 border border-gray-100 scroll-mt-24",
            )?;
        }
        write_end(w, "div")?;
        write_end(w, "div")?;
        write_end(w, "section")?;

        write_fees(w, config)?;

        write_cta(
            w,
            config,
            "Ready to Discuss Your Case?",
            "Contact our immigration solicitors in Forest Gate for expert legal advice and transparent fees",
            "Send Enquiry",
        )?;
        write_end(w, "main")
    }
}

fn write_card(w: &mut XmlWriter, service: &Service, class: &str) -> Result<()> {
    let slug = service_slug(service.title);
    let icon = format!("{} text-3xl text-teal-600", service.icon);

    write_start(w, "div", &[("id", slug.as_str()), ("class", class)])?;
    write_start(w, "div", &[("class", "w-16 h-16 flex items-center justify-center bg-teal-100 rounded-lg mb-6")])?;
    write_icon(w, &icon)?;
    write_end(w, "div")?;
    write_elem(w, "h3", &[("class", "text-xl font-bold text-gray-900 mb-4")], service.title)?;
    write_elem(w, "p", &[("class", "text-gray-600 leading-relaxed")], service.description)?;
    write_end(w, "div")
}

fn write_fees(w: &mut XmlWriter, config: &SiteConfig) -> Result<()> {
    write_start(w, "section", &[("class", "py-24 bg-gradient-to-br from-gray-50 to-teal-50")])?;
    write_start(w, "div", &[("class", "max-w-4xl mx-auto px-6")])?;
    write_start(w, "div", &[("class", "bg-white rounded-2xl p-12 shadow-xl")])?;
    write_elem(w, "h2", &[("class", "text-4xl font-bold text-gray-900 mb-4 text-center")], "Clear & Transparent Fees")?;
    write_start(w, "div", &[("class", "space-y-6 text-lg text-gray-700 leading-relaxed")])?;
    write_rich(
        w,
        "p",
        &[],
        "At Nandy & Co., we believe in **complete transparency when it comes to legal fees**. We understand that cost is an important consideration when choosing a solicitor, especially for immigration matters.",
    )?;
    write_start(w, "div", &[("class", "bg-teal-50 rounded-xl p-6 border border-teal-100")])?;
    write_elem(w, "h3", &[("class", "text-xl font-bold text-gray-900 mb-4")], "Our Fee Promise:")?;
    write_start(w, "ul", &[("class", "space-y-3")])?;
    for (promise, detail) in FEE_PROMISE {
        write_start(w, "li", &[("class", "flex items-start gap-3")])?;
        write_icon(w, "ri-check-line text-xl text-teal-600 mt-1")?;
        write_rich(w, "span", &[], &format!("**{promise}** – {detail}"))?;
        write_end(w, "li")?;
    }
    write_end(w, "ul")?;
    write_end(w, "div")?;
    write_rich(
        w,
        "p",
        &[],
        "Every case is different, so we encourage you to **contact our office for an accurate quote** based on your specific circumstances.",
    )?;
    write_elem(
        w,
        "p",
        &[("class", "text-center font-semibold text-gray-900")],
        &format!(
            "Call us on {} or use our enquiry form to discuss your case and get a clear fee estimate.",
            config.base.phone_display
        ),
    )?;
    write_end(w, "div")?;
    write_end(w, "div")?;
    write_end(w, "div")?;
    write_end(w, "section")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::xml::{create_xml_writer, into_string};

    #[test]
    fn test_service_slug() {
        assert_eq!(service_slug("Visas & Leave to Remain"), "visas-and-leave-to-remain");
        assert_eq!(service_slug("Family Law"), "family-law");
        assert_eq!(service_slug("  Asylum  &  Human   Rights "), "asylum-and-human-rights");
    }

    #[test]
    fn test_cards_carry_slug_anchors() {
        let config = SiteConfig::default();
        let mut w = create_xml_writer();
        Services.render(&mut w, &PageContext::new(&config)).unwrap();
        let html = into_string(w).unwrap();

        for service in IMMIGRATION.iter().chain(OTHER.iter()) {
            assert!(html.contains(&format!(r#"id="{}""#, service_slug(service.title))), "{}", service.title);
        }
        assert!(html.contains("No hidden costs"));
    }

    #[test]
    fn test_meta_schema_has_service_and_faq() {
        let meta = Services.meta(&SiteConfig::default()).unwrap();
        let graph = meta.structured_data.unwrap();
        let types: Vec<_> = graph["@graph"]
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["@type"].as_str().unwrap().to_owned())
            .collect();
        assert_eq!(types, ["Service", "FAQPage", "BreadcrumbList"]);
        assert_eq!(graph["@graph"][0]["areaServed"].as_array().unwrap().len(), 7);
    }
}
