//! Page-view session.
//!
//! A session owns everything one visitor's page view mutates: the head
//! synchronizer, the mounted navigation shell with its scroll hub, and the
//! contact form controller. Sessions are single-threaded; static export
//! opens one per route.
//!
//! ```text
//!   open(route) ── apply(meta) ──► active
//!        navigate(next): teardown ─► unmount form ─► apply(next meta)
//!        close():        teardown
//! ```

use crate::config::SiteConfig;
use crate::document;
use crate::form::{ContactForm, FormController, FormState, Submitter};
use crate::head::{Head, HeadSync};
use crate::pages::{FormTarget, PageContext, page};
use crate::router::Route;
use crate::shell::{NavShell, ScrollHub};
use anyhow::Result;

pub struct Session<'c> {
    config: &'c SiteConfig,
    route: Route,
    head: HeadSync,
    hub: ScrollHub,
    nav: NavShell,
    form: Option<FormController>,
    target: FormTarget,
}

impl<'c> Session<'c> {
    /// Mount a page view for `route` and apply its metadata.
    pub fn open(config: &'c SiteConfig, route: Route) -> Result<Self> {
        let mut head = HeadSync::new(Head::from_config(config), config.base_url());
        head.apply(&page(route).meta(config)?);

        let hub = ScrollHub::new();
        let nav = NavShell::mount(&hub, route, config.nav.scroll_threshold);
        Ok(Self {
            config,
            route,
            head,
            hub,
            nav,
            form: None,
            target: FormTarget::Local,
        })
    }

    /// Post enquiry forms to `target` instead of the local handler.
    pub fn with_target(mut self, target: FormTarget) -> Self {
        self.target = target;
        self
    }

    pub const fn route(&self) -> Route {
        self.route
    }

    pub fn head(&self) -> &Head {
        self.head.head()
    }

    pub fn nav(&self) -> &NavShell {
        &self.nav
    }

    pub fn nav_mut(&mut self) -> &mut NavShell {
        &mut self.nav
    }

    pub fn form(&self) -> Option<&FormController> {
        self.form.as_ref()
    }

    /// Leave the current page for `route`. The old page schema is removed
    /// before the new snapshot is applied; a pending submission of the old
    /// page can no longer settle.
    pub fn navigate(&mut self, route: Route) -> Result<()> {
        let meta = page(route).meta(self.config)?;

        self.head.teardown();
        if let Some(mut form) = self.form.take() {
            form.unmount();
        }
        self.nav.navigate(route);
        self.route = route;
        self.head.apply(&meta);
        Ok(())
    }

    /// Deliver a scroll offset to every mounted listener.
    pub fn scroll(&self, offset: f64) {
        self.hub.dispatch(offset);
    }

    /// Fill the form with `input` and send it once through `submitter`.
    pub fn submit(&mut self, input: ContactForm, submitter: &dyn Submitter) -> &FormState {
        let phone = &self.config.base.phone_display;
        let form = self.form.get_or_insert_with(|| FormController::new(phone.as_str()));
        form.fill(input);
        form.submit(submitter)
    }

    /// Render the full HTML document of the current page.
    pub fn render(&self) -> Result<String> {
        let mut ctx = PageContext::new(self.config).with_target(self.target);
        if let Some(form) = &self.form {
            ctx = ctx.with_form(form);
        }
        document::render(self.head.head(), &self.nav, page(self.route), &ctx)
    }

    /// Unmount the page view: its schema node is removed from the head.
    pub fn close(mut self) -> Head {
        self.head.teardown();
        if let Some(form) = self.form.as_mut() {
            form.unmount();
        }
        self.head.into_head()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Enquiry, SubmitError};
    use crate::head::Lookup;
    use crate::shell::NavState;

    struct Accept;

    impl Submitter for Accept {
        fn submit(&self, _: &Enquiry) -> Result<(), SubmitError> {
            Ok(())
        }
    }

    fn config() -> SiteConfig {
        SiteConfig::from_str("[base]\nurl = \"https://example.com\"").unwrap()
    }

    fn enquiry() -> ContactForm {
        ContactForm {
            name: "Rajesh".into(),
            phone: "07700 900456".into(),
            email: "rajesh@example.com".into(),
            area_of_law: "Property".into(),
            message: "Remortgage".into(),
        }
    }

    #[test]
    fn test_open_applies_page_meta() {
        let config = config();
        let session = Session::open(&config, Route::About).unwrap();
        let head = session.head();

        assert_eq!(head.title(), "Our Immigration Solicitors Team | Nandy & Co. Forest Gate E7");
        assert_eq!(
            head.find(&Lookup::CANONICAL).and_then(|n| n.attr("href")),
            Some("https://example.com/about")
        );
        assert_eq!(head.count(&Lookup::PAGE_SCHEMA), 1);
    }

    #[test]
    fn test_navigate_supersedes_previous_page() {
        let config = config();
        let mut session = Session::open(&config, Route::Services).unwrap();
        session.navigate(Route::NotFound).unwrap();
        let head = session.head();

        assert_eq!(session.route(), Route::NotFound);
        assert!(head.find(&Lookup::CANONICAL).is_none());
        assert_eq!(head.count(&Lookup::PAGE_SCHEMA), 0);
        assert_eq!(head.meta_content("keywords"), None);
        assert_eq!(head.meta_content("og:url"), Some("https://example.com"));
    }

    #[test]
    fn test_navigate_unmounts_form() {
        let config = config();
        let mut session = Session::open(&config, Route::Contact).unwrap();
        assert!(matches!(session.submit(enquiry(), &Accept), FormState::Success(_)));

        session.navigate(Route::Home).unwrap();
        assert!(session.form().is_none());
    }

    #[test]
    fn test_close_removes_only_schema() {
        let config = config();
        let session = Session::open(&config, Route::Home).unwrap();
        let before = session.head().nodes().len();

        let head = session.close();
        assert_eq!(head.nodes().len(), before - 1);
        assert_eq!(head.count(&Lookup::PAGE_SCHEMA), 0);
        assert!(head.find(&Lookup::CANONICAL).is_some());
    }

    #[test]
    fn test_scroll_reaches_mounted_shell() {
        let config = config();
        let session = Session::open(&config, Route::Home).unwrap();
        session.scroll(0.0);
        session.scroll(60.0);

        assert_eq!(session.nav().state(), NavState::Solid);
        assert_eq!(session.nav().transitions(), 1);
    }

    #[test]
    fn test_menu_closes_on_navigate() {
        let config = config();
        let mut session = Session::open(&config, Route::Home).unwrap();
        session.nav_mut().toggle_menu();
        assert!(session.nav().menu_open());

        session.navigate(Route::Legal).unwrap();
        assert!(!session.nav().menu_open());
    }

    #[test]
    fn test_render_carries_form_state() {
        let config = config();
        let mut session = Session::open(&config, Route::Contact).unwrap();
        session.submit(ContactForm::default(), &Accept);

        let html = session.render().unwrap();
        assert!(html.contains("Please enter your name."));
    }
}
