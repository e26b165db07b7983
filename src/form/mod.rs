//! Contact form: field model, validation and the submission lifecycle.
//!
//! ```text
//!   ContactForm ──validate──► Enquiry ──Submitter──► endpoint
//!        ▲                                   │
//!        └──── FormController (Ticket) ◄─────┘
//! ```
//!
//! Both the home page enquiry form and the contact page form post the same
//! field names to `/contact`; the server relays them to `[form] endpoint`.

mod state;
mod submit;

pub use state::{FormController, FormState};
pub use submit::{HttpSubmitter, SubmitError, Submitter};

use std::{borrow::Cow, fmt, str::FromStr};
use thiserror::Error;

/// Maximum message length in characters.
pub const MESSAGE_LIMIT: usize = 500;

pub const SUCCESS_MESSAGE: &str =
    "Thank you for your enquiry. We aim to respond within 24 working hours.";

/// Generic failure text with the phone fallback.
pub fn failure_message(phone_display: &str) -> String {
    format!("Something went wrong. Please try again or call us on {phone_display}.")
}

/// Local validation failures. The display text is shown inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter your {0}.")]
    MissingField(&'static str),

    #[error("Please choose an area of law.")]
    UnknownArea(String),

    #[error("Your message must be 500 characters or less.")]
    MessageTooLong(usize),

    #[error("Your enquiry is already being sent.")]
    InFlight,
}

/// Areas of law offered in the enquiry select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaOfLaw {
    Immigration,
    Asylum,
    FamilyLaw,
    Property,
    Employment,
    Other,
}

impl AreaOfLaw {
    pub const ALL: [AreaOfLaw; 6] = [
        AreaOfLaw::Immigration,
        AreaOfLaw::Asylum,
        AreaOfLaw::FamilyLaw,
        AreaOfLaw::Property,
        AreaOfLaw::Employment,
        AreaOfLaw::Other,
    ];

    /// Wire value, also the label shown in the select.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Immigration => "Immigration",
            Self::Asylum => "Asylum",
            Self::FamilyLaw => "Family Law",
            Self::Property => "Property",
            Self::Employment => "Employment",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for AreaOfLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AreaOfLaw {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|area| area.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FormError::UnknownArea(s.to_owned()))
    }
}

/// Raw form input as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub area_of_law: String,
    pub message: String,
}

impl ContactForm {
    /// Parse an `application/x-www-form-urlencoded` body. Unknown fields
    /// are ignored; `enquiry` is accepted as an older name for `message`.
    pub fn from_urlencoded(body: &str) -> Self {
        let mut form = Self::default();
        for pair in body.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(value).into_owned();
            match decode_component(key).as_ref() {
                "name" => form.name = value,
                "phone" => form.phone = value,
                "email" => form.email = value,
                "area_of_law" => form.area_of_law = value,
                "message" | "enquiry" => form.message = value,
                _ => {}
            }
        }
        form
    }

    /// Check the fields locally. Never touches the network.
    pub fn validate(&self) -> Result<Enquiry, FormError> {
        let required = [
            ("name", &self.name),
            ("phone number", &self.phone),
            ("email address", &self.email),
            ("enquiry", &self.message),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(FormError::MissingField(label));
            }
        }

        let len = self.message.chars().count();
        if len > MESSAGE_LIMIT {
            return Err(FormError::MessageTooLong(len));
        }

        Ok(Enquiry {
            name: self.name.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            email: self.email.trim().to_owned(),
            area: self.area_of_law.parse()?,
            message: self.message.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// A validated enquiry, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enquiry {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub area: AreaOfLaw,
    pub message: String,
}

impl Enquiry {
    /// URL-encoded request body.
    pub fn to_urlencoded(&self) -> String {
        let fields = [
            ("name", self.name.as_str()),
            ("phone", self.phone.as_str()),
            ("email", self.email.as_str()),
            ("area_of_law", self.area.as_str()),
            ("message", self.message.as_str()),
        ];
        fields
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn decode_component(raw: &str) -> Cow<'_, str> {
    let raw: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    match urlencoding::decode(&raw).map(Cow::into_owned) {
        Ok(decoded) => Cow::Owned(decoded),
        Err(_) => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(message: &str) -> ContactForm {
        ContactForm {
            name: "Amira Khan".into(),
            phone: "07700 900123".into(),
            email: "amira@example.com".into(),
            area_of_law: "Immigration".into(),
            message: message.into(),
        }
    }

    #[test]
    fn test_message_limit_boundary() {
        assert!(filled(&"a".repeat(500)).validate().is_ok());
        assert_eq!(
            filled(&"a".repeat(501)).validate(),
            Err(FormError::MessageTooLong(501))
        );
    }

    #[test]
    fn test_message_limit_counts_characters() {
        // 500 two-byte characters are still 500 characters
        assert!(filled(&"é".repeat(500)).validate().is_ok());
        assert!(filled(&"é".repeat(501)).validate().is_err());
    }

    #[test]
    fn test_validation_message_text() {
        let err = filled(&"x".repeat(600)).validate().unwrap_err();
        assert_eq!(err.to_string(), "Your message must be 500 characters or less.");
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled("Hello");
        form.email = "   ".into();
        assert_eq!(form.validate(), Err(FormError::MissingField("email address")));

        let mut form = filled("");
        form.name.clear();
        assert_eq!(form.validate(), Err(FormError::MissingField("name")));
    }

    #[test]
    fn test_area_of_law_parsing() {
        assert_eq!("Family Law".parse::<AreaOfLaw>(), Ok(AreaOfLaw::FamilyLaw));
        assert_eq!(" asylum ".parse::<AreaOfLaw>(), Ok(AreaOfLaw::Asylum));
        assert_eq!(
            "".parse::<AreaOfLaw>(),
            Err(FormError::UnknownArea(String::new()))
        );
        assert!("Tax".parse::<AreaOfLaw>().is_err());
    }

    #[test]
    fn test_from_urlencoded() {
        let form = ContactForm::from_urlencoded(
            "name=Amira+Khan&phone=07700%20900123&email=amira%40example.com&area_of_law=Family+Law&message=Hi%2C+there&utm=x",
        );
        assert_eq!(form.name, "Amira Khan");
        assert_eq!(form.phone, "07700 900123");
        assert_eq!(form.email, "amira@example.com");
        assert_eq!(form.area_of_law, "Family Law");
        assert_eq!(form.message, "Hi, there");
    }

    #[test]
    fn test_legacy_enquiry_field() {
        let form = ContactForm::from_urlencoded("enquiry=Need+advice");
        assert_eq!(form.message, "Need advice");
    }

    #[test]
    fn test_enquiry_body_field_names() {
        let enquiry = filled("Visa & settlement").validate().unwrap();
        assert_eq!(
            enquiry.to_urlencoded(),
            "name=Amira%20Khan&phone=07700%20900123&email=amira%40example.com&area_of_law=Immigration&message=Visa%20%26%20settlement"
        );
    }

    #[test]
    fn test_clear() {
        let mut form = filled("Hello");
        assert!(!form.is_empty());
        form.clear();
        assert!(form.is_empty());
    }
}
