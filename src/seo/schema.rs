//! Schema.org JSON-LD generators.
//!
//! Every page publishes one `@graph` combining a page-specific node with a
//! breadcrumb trail. Firm identity comes from `[base]`; absolute URLs are
//! built against the configured base URL.

use super::url::absolute;
use crate::config::SiteConfig;
use serde_json::{Value, json};

const CONTEXT: &str = "https://schema.org";

/// Wrap nodes in a single `@graph` document.
pub fn graph(nodes: Vec<Value>) -> Value {
    json!({
        "@context": CONTEXT,
        "@graph": nodes,
    })
}

/// `BreadcrumbList` from `(name, path)` pairs, positions starting at 1.
pub fn breadcrumbs(items: &[(&str, &str)], base: &str) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(index, (name, path))| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": name,
                "item": absolute(base, path),
            })
        })
        .collect();

    json!({
        "@context": CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

/// `WebPage` node that is part of the firm's `WebSite`.
pub fn web_page(name: &str, description: &str, path: &str, config: &SiteConfig) -> Value {
    let base = config.base_url();
    json!({
        "@context": CONTEXT,
        "@type": "WebPage",
        "name": name,
        "description": description,
        "url": absolute(base, path),
        "isPartOf": website(config),
        "provider": provider(config),
    })
}

/// A page node of an arbitrary `WebPage` subtype (`AboutPage`, `ContactPage`).
pub fn typed_page(kind: &str, name: &str, description: &str, path: &str, config: &SiteConfig) -> Value {
    json!({
        "@type": kind,
        "name": name,
        "description": description,
        "url": absolute(config.base_url(), path),
        "isPartOf": website(config),
    })
}

/// `FAQPage` from `(question, answer)` pairs.
pub fn faq(entries: &[(&str, &str)]) -> Value {
    let questions: Vec<Value> = entries
        .iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": answer,
                },
            })
        })
        .collect();

    json!({
        "@context": CONTEXT,
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

/// `Service` offered by the firm in the given areas.
pub fn service(name: &str, description: &str, areas: &[&str], config: &SiteConfig) -> Value {
    let mut provider = provider(config);
    provider["address"] = postal_address(config);

    json!({
        "@context": CONTEXT,
        "@type": "Service",
        "name": name,
        "description": description,
        "provider": provider,
        "areaServed": cities(areas),
    })
}

/// Full `LegalService` organisation node for the home page.
pub fn legal_service(description: &str, areas: &[&str], offers: &[(&str, &str)], config: &SiteConfig) -> Value {
    let base = &config.base;
    let offers: Vec<Value> = offers
        .iter()
        .map(|(name, description)| {
            json!({
                "@type": "Offer",
                "itemOffered": {
                    "@type": "Service",
                    "name": name,
                    "description": description,
                },
            })
        })
        .collect();

    json!({
        "@type": "LegalService",
        "name": base.title,
        "description": description,
        "url": absolute(config.base_url(), "/"),
        "telephone": base.phone,
        "email": base.email,
        "address": postal_address(config),
        "areaServed": cities(areas),
        "priceRange": "££",
        "openingHoursSpecification": [
            {
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
                "opens": "09:00",
                "closes": "18:00",
            },
            {
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": "Saturday",
                "opens": "10:00",
                "closes": "14:00",
            },
        ],
        "hasOfferCatalog": {
            "@type": "OfferCatalog",
            "name": "Legal Services",
            "itemListElement": offers,
        },
    })
}

fn website(config: &SiteConfig) -> Value {
    json!({
        "@type": "WebSite",
        "name": config.base.title,
        "url": config.base_url(),
    })
}

fn provider(config: &SiteConfig) -> Value {
    json!({
        "@type": "LegalService",
        "name": config.base.title,
        "telephone": config.base.phone,
        "email": config.base.email,
    })
}

fn postal_address(config: &SiteConfig) -> Value {
    let base = &config.base;
    json!({
        "@type": "PostalAddress",
        "streetAddress": base.street,
        "addressLocality": base.locality,
        "postalCode": base.postcode,
        "addressRegion": base.region,
        "addressCountry": base.country,
    })
}

fn cities(areas: &[&str]) -> Vec<Value> {
    areas
        .iter()
        .map(|area| json!({ "@type": "City", "name": area }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_base(url: &str) -> SiteConfig {
        SiteConfig::from_str(&format!("[base]\nurl = \"{url}\"")).unwrap()
    }

    #[test]
    fn test_breadcrumbs_positions_and_urls() {
        let crumbs = breadcrumbs(&[("Home", "/"), ("Contact", "/contact")], "https://example.com");

        assert_eq!(crumbs["@type"], "BreadcrumbList");
        let items = crumbs["itemListElement"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[0]["item"], "https://example.com/");
        assert_eq!(items[1]["position"], 2);
        assert_eq!(items[1]["name"], "Contact");
        assert_eq!(items[1]["item"], "https://example.com/contact");
    }

    #[test]
    fn test_breadcrumbs_root_relative_without_base() {
        let crumbs = breadcrumbs(&[("Home", "/")], "");
        assert_eq!(crumbs["itemListElement"][0]["item"], "/");
    }

    #[test]
    fn test_web_page_links_site_and_provider() {
        let config = config_with_base("https://example.com");
        let page = web_page("Legal", "Policies", "/legal", &config);

        assert_eq!(page["@type"], "WebPage");
        assert_eq!(page["url"], "https://example.com/legal");
        assert_eq!(page["isPartOf"]["@type"], "WebSite");
        assert_eq!(page["isPartOf"]["url"], "https://example.com");
        assert_eq!(page["provider"]["telephone"], "+442085347000");
    }

    #[test]
    fn test_faq_pairs() {
        let doc = faq(&[("Do you offer fixed fees?", "Yes, for many services.")]);

        assert_eq!(doc["@type"], "FAQPage");
        assert_eq!(doc["mainEntity"][0]["@type"], "Question");
        assert_eq!(doc["mainEntity"][0]["acceptedAnswer"]["text"], "Yes, for many services.");
    }

    #[test]
    fn test_service_has_address_and_areas() {
        let config = SiteConfig::default();
        let doc = service("Immigration", "Visas", &["Ilford", "Barking"], &config);

        assert_eq!(doc["provider"]["address"]["postalCode"], "E7");
        assert_eq!(doc["areaServed"][1]["name"], "Barking");
        assert_eq!(doc["areaServed"][1]["@type"], "City");
    }

    #[test]
    fn test_legal_service_offer_catalog() {
        let config = config_with_base("https://example.com");
        let doc = legal_service("Firm", &["Forest Gate"], &[("Family Law", "Divorce")], &config);

        assert_eq!(doc["url"], "https://example.com/");
        assert_eq!(doc["hasOfferCatalog"]["itemListElement"][0]["itemOffered"]["name"], "Family Law");
        assert_eq!(doc["openingHoursSpecification"][1]["dayOfWeek"], "Saturday");
    }

    #[test]
    fn test_graph_wraps_nodes() {
        let doc = graph(vec![json!({"a": 1}), json!({"b": 2})]);
        assert_eq!(doc["@context"], "https://schema.org");
        assert_eq!(doc["@graph"].as_array().unwrap().len(), 2);
    }
}
