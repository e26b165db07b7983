//! `[base]` section configuration.
//!
//! Firm identity shared by the head, the footer, the JSON-LD schema and the
//! contact form messages.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in lexsite.toml.
///
/// # Example
/// ```toml
/// [base]
/// title = "Nandy & Co. Solicitors"
/// url = "https://nandyandco.co.uk"
/// phone = "+442085347000"
/// phone_display = "020 8534 7000"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Firm name used in schema payloads and the footer.
    #[serde(default = "defaults::base::title")]
    #[educe(Default = defaults::base::title())]
    pub title: String,

    /// Short brand shown in the navigation bar.
    #[serde(default = "defaults::base::short_name")]
    #[educe(Default = defaults::base::short_name())]
    pub short_name: String,

    /// Footer blurb.
    #[serde(default = "defaults::base::description")]
    #[educe(Default = defaults::base::description())]
    pub description: String,

    /// Base URL for canonical and Open Graph URLs.
    /// Overridden by `SITE_URL`, then by `--base-url`.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// E.164 phone number for `tel:` links and schema.
    #[serde(default = "defaults::base::phone")]
    #[educe(Default = defaults::base::phone())]
    pub phone: String,

    /// Human-readable phone number.
    #[serde(default = "defaults::base::phone_display")]
    #[educe(Default = defaults::base::phone_display())]
    pub phone_display: String,

    #[serde(default = "defaults::base::email")]
    #[educe(Default = defaults::base::email())]
    pub email: String,

    #[serde(default = "defaults::base::street")]
    #[educe(Default = defaults::base::street())]
    pub street: String,

    #[serde(default = "defaults::base::locality")]
    #[educe(Default = defaults::base::locality())]
    pub locality: String,

    #[serde(default = "defaults::base::postcode")]
    #[educe(Default = defaults::base::postcode())]
    pub postcode: String,

    #[serde(default = "defaults::base::region")]
    #[educe(Default = defaults::base::region())]
    pub region: String,

    /// ISO 3166 country code.
    #[serde(default = "defaults::base::country")]
    #[educe(Default = defaults::base::country())]
    pub country: String,

    /// BCP 47 language code for `<html lang>`.
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,

    /// Copyright holder shown in the footer; defaults to `title`.
    #[serde(default)]
    pub copyright: String,
}

impl BaseConfig {
    /// `tel:` link target.
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn copyright_holder(&self) -> &str {
        if self.copyright.is_empty() {
            &self.title
        } else {
            &self.copyright
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.base.title, "Nandy & Co. Solicitors");
        assert_eq!(config.base.phone_display, "020 8534 7000");
        assert_eq!(config.base.url, None);
        assert_eq!(config.base.language, "en-GB");
        assert_eq!(config.base.tel_href(), "tel:+442085347000");
    }

    #[test]
    fn test_base_config_override() {
        let config = r#"
            [base]
            title = "Example Law LLP"
            url = "https://example.com"
            email = "hello@example.com"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "Example Law LLP");
        assert_eq!(config.base.url.as_deref(), Some("https://example.com"));
        assert_eq!(config.base.email, "hello@example.com");
        // untouched fields keep the firm defaults
        assert_eq!(config.base.postcode, "E7");
    }

    #[test]
    fn test_copyright_holder_falls_back_to_title() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.base.copyright_holder(), "Nandy & Co. Solicitors");

        let config: SiteConfig = toml::from_str("[base]\ncopyright = \"N&C Ltd\"").unwrap();
        assert_eq!(config.base.copyright_holder(), "N&C Ltd");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            unknown_field = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unknown field"));
    }
}
