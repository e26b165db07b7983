//! Page views.
//!
//! Each page produces its [`MetaSnapshot`] and writes its `<main>` content.
//! Pages never touch the head; the session hands the snapshot to the
//! head synchronizer.

mod about;
mod contact;
mod enquiry;
mod home;
mod legal;
mod not_found;
mod services;

use crate::config::SiteConfig;
use crate::form::FormController;
use crate::router::Route;
use crate::seo::{MetaSnapshot, SeoError};
use crate::utils::xml::{XmlWriter, write_elem, write_end, write_icon, write_start, write_text};
use anyhow::Result;

/// Areas served, used in schema `areaServed` lists.
pub const AREAS_SERVED: [&str; 6] = ["Forest Gate", "Ilford", "Barking", "East Ham", "Stratford", "Leyton"];

/// Where enquiry forms are posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormTarget {
    /// The server's own `POST /contact` handler.
    #[default]
    Local,
    /// `[form] endpoint` directly; used by static export where no server
    /// handles the post.
    Endpoint,
}

/// Render-time inputs shared by all pages.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub config: &'a SiteConfig,
    /// Live form state, present once a visitor has submitted.
    pub form: Option<&'a FormController>,
    pub target: FormTarget,
}

impl<'a> PageContext<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            config,
            form: None,
            target: FormTarget::Local,
        }
    }

    pub fn with_form(mut self, form: &'a FormController) -> Self {
        self.form = Some(form);
        self
    }

    pub fn with_target(mut self, target: FormTarget) -> Self {
        self.target = target;
        self
    }

    /// `action` of the enquiry forms.
    pub fn form_action(&self) -> String {
        match self.target {
            FormTarget::Local => format!("/contact#{}", crate::shell::CONTACT_FORM_ANCHOR),
            FormTarget::Endpoint => self.config.form.endpoint.clone(),
        }
    }
}

pub trait PageView: Sync {
    fn route(&self) -> Route;

    /// SEO values of the page.
    fn meta(&self, config: &SiteConfig) -> Result<MetaSnapshot, SeoError>;

    /// Write the page content between the nav bar and the footer.
    fn render(&self, w: &mut XmlWriter, ctx: &PageContext<'_>) -> Result<()>;
}

/// The view for `route`.
pub fn page(route: Route) -> &'static dyn PageView {
    match route {
        Route::Home => &home::Home,
        Route::Services => &services::Services,
        Route::About => &about::About,
        Route::Contact => &contact::Contact,
        Route::Legal => &legal::Legal,
        Route::NotFound => &not_found::NotFound,
    }
}

/// Write `text` inside `tag`, turning `**segments**` into `<strong>`.
pub(crate) fn write_rich(w: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)], text: &str) -> Result<()> {
    write_start(w, tag, attrs)?;
    for (i, part) in text.split("**").enumerate() {
        if part.is_empty() {
            continue;
        }
        if i % 2 == 1 {
            write_elem(w, "strong", &[], part)?;
        } else {
            write_text(w, part)?;
        }
    }
    write_end(w, tag)
}

/// Teal banner at the top of every inner page.
pub(crate) fn write_hero(w: &mut XmlWriter, title: &str, subtitle: &str) -> Result<()> {
    write_start(w, "section", &[("class", "relative pt-32 pb-20 bg-gradient-to-br from-teal-600 to-teal-700")])?;
    write_start(w, "div", &[("class", "max-w-7xl mx-auto px-6 text-center text-white")])?;
    write_elem(w, "h1", &[("class", "text-5xl md:text-6xl font-bold mb-6")], title)?;
    write_elem(w, "p", &[("class", "text-xl md:text-2xl max-w-3xl mx-auto font-light")], subtitle)?;
    write_end(w, "div")?;
    write_end(w, "section")
}

/// Closing call-to-action strip: phone button plus a link to the form.
pub(crate) fn write_cta(w: &mut XmlWriter, config: &SiteConfig, heading: &str, text: &str, link_label: &str) -> Result<()> {
    let tel = config.base.tel_href();
    let form_href = format!("/contact#{}", crate::shell::CONTACT_FORM_ANCHOR);

    write_start(w, "section", &[("class", "py-20 bg-gradient-to-r from-teal-600 to-teal-700")])?;
    write_start(w, "div", &[("class", "max-w-4xl mx-auto px-6 text-center")])?;
    write_elem(w, "h2", &[("class", "text-4xl md:text-5xl font-bold text-white mb-6")], heading)?;
    write_elem(w, "p", &[("class", "text-xl text-teal-50 mb-8")], text)?;
    write_start(w, "div", &[("class", "flex flex-col sm:flex-row gap-4 justify-center")])?;
    write_start(
        w,
        "a",
        &[
            ("href", tel.as_str()),
            ("class", "whitespace-nowrap bg-white hover:bg-gray-50 text-teal-700 px-8 py-4 rounded-lg text-lg font-semibold inline-flex items-center justify-center gap-2"),
        ],
    )?;
    write_icon(w, "ri-phone-line text-xl")?;
    write_text(w, &config.base.phone_display)?;
    write_end(w, "a")?;
    write_start(
        w,
        "a",
        &[
            ("href", form_href.as_str()),
            ("class", "whitespace-nowrap bg-teal-800 hover:bg-teal-900 text-white px-8 py-4 rounded-lg text-lg font-semibold inline-flex items-center justify-center gap-2"),
        ],
    )?;
    write_text(w, link_label)?;
    write_icon(w, "ri-arrow-right-line")?;
    write_end(w, "a")?;
    write_end(w, "div")?;
    write_end(w, "div")?;
    write_end(w, "section")
}

/// Centered section heading with a lead paragraph.
pub(crate) fn write_section_heading(w: &mut XmlWriter, title: &str, lead: &str) -> Result<()> {
    write_start(w, "div", &[("class", "text-center mb-16")])?;
    write_elem(w, "h2", &[("class", "text-4xl md:text-5xl font-bold text-gray-900 mb-4")], title)?;
    write_elem(w, "p", &[("class", "text-xl text-gray-600 max-w-3xl mx-auto")], lead)?;
    write_end(w, "div")
}
