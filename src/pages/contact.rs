use super::enquiry::write_enquiry_form;
use super::{PageContext, PageView, write_hero, write_rich};
use crate::config::SiteConfig;
use crate::router::Route;
use crate::seo::{MetaSnapshot, SeoError, schema};
use crate::shell::CONTACT_FORM_ANCHOR;
use crate::utils::xml::{XmlWriter, write_elem, write_empty_elem, write_end, write_icon, write_start, write_text};
use anyhow::Result;

const OFFICE_HOURS: [(&str, &str); 3] = [
    ("Monday - Friday", "9:00 AM - 6:00 PM"),
    ("Saturday", "10:00 AM - 2:00 PM"),
    ("Sunday", "Closed"),
];

pub(super) struct Contact;

impl PageView for Contact {
    fn route(&self) -> Route {
        Route::Contact
    }

    fn meta(&self, config: &SiteConfig) -> Result<MetaSnapshot, SeoError> {
        let graph = schema::graph(vec![
            schema::typed_page(
                "ContactPage",
                "Contact Immigration Solicitors Forest Gate",
                "Contact our immigration solicitors in Forest Gate, London E7. Phone, email or visit our office.",
                "/contact",
                config,
            ),
            schema::breadcrumbs(&[("Home", "/"), ("Contact", "/contact")], config.base_url()),
        ]);

        MetaSnapshot::builder(
            "Contact Immigration Solicitors Forest Gate | Nandy & Co. E7",
            "Contact our immigration solicitors in Forest Gate, London E7. Phone, email or visit our office. Remote consultations available UK-wide. Call 020 8534 7000 today.",
        )
        .keywords("contact immigration solicitors, Forest Gate solicitors contact, immigration lawyers E7, legal consultation Forest Gate")
        .canonical("/contact")
        .schema(graph)
        .build()
    }

    fn render(&self, w: &mut XmlWriter, ctx: &PageContext<'_>) -> Result<()> {
        write_start(w, "main", &[])?;
        write_hero(w, "Contact Us", "Get in touch with our immigration solicitors in Forest Gate")?;
        write_channels(w, ctx.config)?;

        write_start(
            w,
            "section",
            &[("id", CONTACT_FORM_ANCHOR), ("class", "py-24 bg-gradient-to-br from-gray-50 to-teal-50 scroll-mt-24")],
        )?;
        write_start(w, "div", &[("class", "max-w-7xl mx-auto px-6 grid lg:grid-cols-2 gap-12")])?;

        write_start(w, "div", &[])?;
        write_elem(w, "h2", &[("class", "text-4xl font-bold text-gray-900 mb-4")], "Send an Enquiry")?;
        write_elem(
            w,
            "p",
            &[("class", "text-lg text-gray-600 mb-8")],
            "Complete the form below and we will get back to you as soon as possible.",
        )?;
        write_enquiry_form(w, "contact-enquiry-form", &ctx.form_action(), ctx.form)?;
        write_end(w, "div")?;

        write_start(w, "div", &[])?;
        write_office(w, ctx.config)?;
        write_end(w, "div")?;

        write_end(w, "div")?;
        write_end(w, "section")?;
        write_end(w, "main")
    }
}

/// Call, email and visit cards.
fn write_channels(w: &mut XmlWriter, config: &SiteConfig) -> Result<()> {
    let base = &config.base;
    let tel = base.tel_href();
    let mailto = format!("mailto:{}", base.email);
    let link = "text-teal-600 hover:text-teal-700 text-lg font-semibold";

    write_start(w, "section", &[("class", "py-16 bg-white")])?;
    write_start(w, "div", &[("class", "max-w-7xl mx-auto px-6 grid md:grid-cols-3 gap-8")])?;

    open_card(w, "ri-phone-line", "Call Us", "Speak to our team")?;
    write_elem(w, "a", &[("href", tel.as_str()), ("class", link)], &base.phone_display)?;
    close_card(w, "For urgent matters")?;

    open_card(w, "ri-mail-line", "Email Us", "Send your enquiry")?;
    write_elem(w, "a", &[("href", mailto.as_str()), ("class", link)], &base.email)?;
    close_card(w, "24 hour response time")?;

    open_card(w, "ri-map-pin-line", "Visit Us", "Our office")?;
    write_start(w, "p", &[("class", "text-gray-900 font-semibold")])?;
    write_text(w, &base.street)?;
    write_empty_elem(w, "br", &[] as &[(&str, &str)])?;
    write_text(w, &format!("{} {}", base.locality, base.postcode))?;
    write_empty_elem(w, "br", &[] as &[(&str, &str)])?;
    write_text(w, "United Kingdom")?;
    write_end(w, "p")?;
    close_card(w, "By appointment")?;

    write_end(w, "div")?;
    write_end(w, "section")
}

fn open_card(w: &mut XmlWriter, icon: &str, title: &str, lead: &str) -> Result<()> {
    let icon = format!("{icon} text-3xl text-teal-600");
    write_start(w, "div", &[("class", "text-center bg-gradient-to-br from-gray-50 to-teal-50 rounded-xl p-8")])?;
    write_start(w, "div", &[("class", "w-16 h-16 flex items-center justify-center bg-teal-100 rounded-full mx-auto mb-6")])?;
    write_icon(w, &icon)?;
    write_end(w, "div")?;
    write_elem(w, "h3", &[("class", "text-xl font-bold text-gray-900 mb-2")], title)?;
    write_elem(w, "p", &[("class", "text-gray-600 mb-4")], lead)
}

fn close_card(w: &mut XmlWriter, note: &str) -> Result<()> {
    write_elem(w, "p", &[("class", "text-sm text-gray-500 mt-2")], note)?;
    write_end(w, "div")
}

fn write_office(w: &mut XmlWriter, config: &SiteConfig) -> Result<()> {
    write_elem(w, "h2", &[("class", "text-4xl font-bold text-gray-900 mb-4")], "Find Us")?;
    write_elem(
        w,
        "p",
        &[("class", "text-lg text-gray-600 mb-8")],
        &format!(
            "Our office is in {}, easily accessible from across East London.",
            config.base.street
        ),
    )?;

    write_start(w, "div", &[("class", "bg-white rounded-xl p-8 shadow-lg mb-6")])?;
    write_elem(w, "h3", &[("class", "text-xl font-bold text-gray-900 mb-4")], "Office Hours")?;
    write_start(w, "dl", &[("class", "space-y-3")])?;
    for (day, hours) in OFFICE_HOURS {
        write_start(w, "div", &[("class", "flex justify-between border-b border-gray-100 pb-2")])?;
        write_elem(w, "dt", &[("class", "text-gray-700")], day)?;
        write_elem(w, "dd", &[("class", "font-semibold text-gray-900")], hours)?;
        write_end(w, "div")?;
    }
    write_end(w, "dl")?;
    write_start(w, "p", &[("class", "text-sm text-gray-600 mt-4")])?;
    write_icon(w, "ri-information-line text-teal-600")?;
    write_text(w, " Appointments recommended - call ahead to book")?;
    write_end(w, "p")?;
    write_end(w, "div")?;

    write_start(w, "div", &[("class", "bg-teal-50 rounded-xl p-8 border border-teal-100")])?;
    write_start(w, "h3", &[("class", "text-xl font-bold text-gray-900 mb-3")])?;
    write_icon(w, "ri-video-chat-line text-teal-600")?;
    write_text(w, " Remote Consultations")?;
    write_end(w, "h3")?;
    write_rich(
        w,
        "p",
        &[("class", "text-gray-700 leading-relaxed")],
        "Can't visit our Forest Gate office? We offer **phone and Zoom consultations** for clients across the UK. Our immigration solicitors can provide expert advice wherever you are.",
    )?;
    write_end(w, "div")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{ContactForm, FormController};
    use crate::utils::xml::{create_xml_writer, into_string};

    fn render(ctx: &PageContext<'_>) -> String {
        let mut w = create_xml_writer();
        Contact.render(&mut w, ctx).unwrap();
        into_string(w).unwrap()
    }

    #[test]
    fn test_form_lives_in_anchor_section() {
        let config = SiteConfig::default();
        let html = render(&PageContext::new(&config));
        let section = html.find(r#"id="contact-form-section""#).unwrap();
        let form = html.find(r#"id="contact-enquiry-form""#).unwrap();
        assert!(section < form);
        assert!(html.contains("Monday - Friday"));
        assert!(html.contains("By appointment"));
    }

    #[test]
    fn test_renders_live_form_state() {
        let config = SiteConfig::default();
        let mut controller = FormController::new(&config.base.phone_display);
        controller.fill(ContactForm {
            name: "Sarah".into(),
            ..ContactForm::default()
        });
        assert!(controller.begin().is_err());

        let html = render(&PageContext::new(&config).with_form(&controller));
        assert!(html.contains("Please enter your phone number."));
        assert!(html.contains(r#"value="Sarah""#));
    }
}
