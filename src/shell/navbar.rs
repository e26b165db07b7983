use super::{NavState, NavStyle, ScrollHub, ScrollTracker, Subscription};
use crate::config::SiteConfig;
use crate::router::Route;
use crate::utils::xml::{XmlWriter, write_elem, write_end, write_icon, write_start};
use anyhow::Result;
use std::{cell::Cell, rc::Rc};

/// In-page anchor of the contact form.
pub const CONTACT_FORM_ANCHOR: &str = "contact-form-section";

const NAV_LINKS: [(&str, Route); 4] = [
    ("Home", Route::Home),
    ("Services", Route::Services),
    ("About", Route::About),
    ("Contact", Route::Contact),
];

const BAR_BASE: &str = "fixed top-0 left-0 right-0 z-50 transition-all duration-300";
const LOGO_BASE: &str = "ri-scales-3-line text-2xl";
const BRAND_BASE: &str = "text-xl font-bold";
const LINK_BASE: &str = "font-medium transition-colors";
const CALL_BASE: &str = "px-6 py-2 rounded-full font-medium transition-all whitespace-nowrap";
const TOGGLE_BASE: &str = "md:hidden p-2 rounded-lg transition-colors";
const MOBILE_LINK: &str = "text-gray-700 hover:text-teal-600 font-medium transition-colors";

/// The mounted navigation bar of one page view.
///
/// Owns its scroll subscription: dropping the shell removes the listener.
#[derive(Debug)]
pub struct NavShell {
    route: Route,
    menu_open: bool,
    tracker: Rc<Cell<ScrollTracker>>,
    transitions: Rc<Cell<u32>>,
    _subscription: Subscription,
}

impl NavShell {
    pub fn mount(hub: &ScrollHub, route: Route, threshold: u32) -> Self {
        let tracker = Rc::new(Cell::new(ScrollTracker::new(threshold)));
        let transitions = Rc::new(Cell::new(0));

        let subscription = {
            let tracker = Rc::clone(&tracker);
            let transitions = Rc::clone(&transitions);
            hub.subscribe(move |offset| {
                let mut current = tracker.get();
                if current.observe(offset).is_some() {
                    transitions.set(transitions.get() + 1);
                }
                tracker.set(current);
            })
        };

        Self {
            route,
            menu_open: false,
            tracker,
            transitions,
            _subscription: subscription,
        }
    }

    pub fn state(&self) -> NavState {
        self.tracker.get().state()
    }

    /// Number of state changes seen since mount.
    pub fn transitions(&self) -> u32 {
        self.transitions.get()
    }

    pub const fn route(&self) -> Route {
        self.route
    }

    pub const fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Follow a link: the mobile menu always closes.
    pub fn navigate(&mut self, route: Route) {
        self.route = route;
        self.menu_open = false;
    }

    /// Link target for a nav entry. On the contact page the contact link
    /// jumps to the form instead of reloading the page.
    fn href(&self, target: Route) -> String {
        match (target, self.route) {
            (Route::Contact, Route::Contact) => format!("#{CONTACT_FORM_ANCHOR}"),
            _ => target.path().unwrap_or("/").to_owned(),
        }
    }

    pub fn write(&self, w: &mut XmlWriter, config: &SiteConfig) -> Result<()> {
        let style = NavStyle::for_state(self.state());
        let base = &config.base;
        let tel = base.tel_href();
        let call_label = format!("Call {}", base.phone_display);
        let threshold = config.nav.scroll_threshold.to_string();

        let bar = Styled::new(BAR_BASE, |s| s.bar);
        let mut attrs = bar.attrs(style);
        attrs.push(("data-scroll-threshold", threshold));
        attrs.push(("data-nav-state", self.state().as_str().to_owned()));
        write_start(w, "nav", &as_refs(&attrs))?;
        write_start(w, "div", &[("class", "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8")])?;
        write_start(w, "div", &[("class", "flex justify-between items-center h-20")])?;

        write_start(w, "a", &[("href", "/"), ("class", "flex items-center space-x-2")])?;
        write_start(w, "i", &as_refs(&Styled::new(LOGO_BASE, |s| s.logo_icon).attrs(style)))?;
        write_end(w, "i")?;
        write_elem(
            w,
            "span",
            &as_refs(&Styled::new(BRAND_BASE, |s| s.brand).attrs(style)),
            &base.short_name,
        )?;
        write_end(w, "a")?;

        // desktop links
        write_start(w, "div", &[("class", "hidden md:flex items-center space-x-8")])?;
        let link = Styled::new(LINK_BASE, |s| s.link);
        for (label, target) in NAV_LINKS {
            let mut attrs = link.attrs(style);
            attrs.push(("href", self.href(target)));
            if target == self.route {
                attrs.push(("aria-current", "page".to_owned()));
            }
            write_elem(w, "a", &as_refs(&attrs), label)?;
        }
        let mut attrs = Styled::new(CALL_BASE, |s| s.call).attrs(style);
        attrs.push(("href", tel.clone()));
        write_elem(w, "a", &as_refs(&attrs), &call_label)?;
        write_end(w, "div")?;

        let mut attrs = Styled::new(TOGGLE_BASE, |s| s.toggle).attrs(style);
        attrs.push(("aria-label", "Toggle menu".to_owned()));
        attrs.push(("data-menu-toggle", "true".to_owned()));
        attrs.push(("aria-expanded", self.menu_open.to_string()));
        write_start(w, "button", &as_refs(&attrs))?;
        let icon = if self.menu_open { "ri-close-line text-2xl" } else { "ri-menu-line text-2xl" };
        write_icon(w, icon)?;
        write_end(w, "button")?;
        write_end(w, "div")?;

        // mobile menu
        let mut menu: Vec<(&str, &str)> = vec![
            ("class", "md:hidden py-4 bg-white border-t border-gray-100"),
            ("data-mobile-menu", "true"),
        ];
        if !self.menu_open {
            menu.push(("hidden", ""));
        }
        write_start(w, "div", &menu)?;
        write_start(w, "div", &[("class", "flex flex-col space-y-4")])?;
        for (label, target) in NAV_LINKS {
            let href = self.href(target);
            write_elem(w, "a", &[("href", href.as_str()), ("class", MOBILE_LINK)], label)?;
        }
        write_elem(
            w,
            "a",
            &[
                ("href", tel.as_str()),
                (
                    "class",
                    "bg-teal-600 text-white px-6 py-2 rounded-full font-medium hover:bg-teal-700 transition-all text-center whitespace-nowrap",
                ),
            ],
            &call_label,
        )?;
        write_end(w, "div")?;
        write_end(w, "div")?;

        write_end(w, "div")?;
        write_end(w, "nav")
    }
}

/// An element whose classes depend on the nav state. The rendered element
/// carries both class sets so the browser script can swap them.
struct Styled {
    base: &'static str,
    pick: fn(&NavStyle) -> &'static str,
}

impl Styled {
    fn new(base: &'static str, pick: fn(&NavStyle) -> &'static str) -> Self {
        Self { base, pick }
    }

    fn attrs(&self, style: &NavStyle) -> Vec<(&'static str, String)> {
        vec![
            ("class", format!("{} {}", self.base, (self.pick)(style))),
            ("data-base", self.base.to_owned()),
            ("data-transparent", (self.pick)(&NavStyle::TRANSPARENT).to_owned()),
            ("data-solid", (self.pick)(&NavStyle::SOLID).to_owned()),
        ]
    }
}

fn as_refs<'a>(attrs: &'a [(&'static str, String)]) -> Vec<(&'a str, &'a str)> {
    attrs.iter().map(|(k, v)| (*k, v.as_str())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::xml::{create_xml_writer, into_string};

    fn render(shell: &NavShell) -> String {
        let mut w = create_xml_writer();
        shell.write(&mut w, &SiteConfig::default()).unwrap();
        into_string(w).unwrap()
    }

    #[test]
    fn test_scroll_drives_state() {
        let hub = ScrollHub::new();
        let shell = NavShell::mount(&hub, Route::Home, 50);
        assert_eq!(shell.state(), NavState::Transparent);

        for offset in [0.0, 30.0, 60.0, 80.0] {
            hub.dispatch(offset);
        }
        assert_eq!(shell.state(), NavState::Solid);
        assert_eq!(shell.transitions(), 1);
    }

    #[test]
    fn test_unmount_removes_listener() {
        let hub = ScrollHub::new();
        let shell = NavShell::mount(&hub, Route::About, 50);
        assert_eq!(hub.listener_count(), 1);
        drop(shell);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_menu_closes_on_navigation() {
        let hub = ScrollHub::new();
        let mut shell = NavShell::mount(&hub, Route::Home, 50);
        shell.toggle_menu();
        assert!(shell.menu_open());

        shell.navigate(Route::Services);
        assert!(!shell.menu_open());
        assert_eq!(shell.route(), Route::Services);
    }

    #[test]
    fn test_contact_link_targets_form_on_contact_page() {
        let hub = ScrollHub::new();
        let mut shell = NavShell::mount(&hub, Route::Home, 50);
        assert_eq!(shell.href(Route::Contact), "/contact");

        shell.navigate(Route::Contact);
        assert_eq!(shell.href(Route::Contact), "#contact-form-section");
        assert_eq!(shell.href(Route::About), "/about");
    }

    #[test]
    fn test_render_reflects_state_and_route() {
        let hub = ScrollHub::new();
        let shell = NavShell::mount(&hub, Route::Services, 50);

        let html = render(&shell);
        assert!(html.contains(r#"data-scroll-threshold="50""#));
        assert!(html.contains(r#"data-nav-state="transparent""#));
        assert!(html.contains("bg-transparent"));
        assert!(html.contains(r#"href="/services" aria-current="page""#));
        assert!(html.contains(r#"href="tel:+442085347000""#));
        assert!(html.contains("Call 020 8534 7000"));
        assert!(html.contains(r#"data-mobile-menu="true" hidden="""#));

        hub.dispatch(200.0);
        let html = render(&shell);
        assert!(html.contains(r#"class="fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-white shadow-md""#));
    }
}
