//! Navigation shell: the scroll-reactive nav bar and the footer shared by
//! every page.
//!
//! The server renders the shell in the state matching the current scroll
//! offset. In the browser, [`NAV_SCRIPT`] re-derives the same state from
//! the `data-scroll-threshold` attribute and swaps between the
//! `data-transparent` / `data-solid` class sets each styled element carries.

mod footer;
mod listener;
mod navbar;
mod scroll;

pub use footer::write_footer;
pub use listener::{ScrollHub, Subscription};
pub use navbar::{CONTACT_FORM_ANCHOR, NavShell};
pub use scroll::{NavState, NavStyle, ScrollTracker};

/// Browser-side scroll and menu handling for the rendered shell.
pub const NAV_SCRIPT: &str = r#"(function () {
  var nav = document.querySelector("nav[data-scroll-threshold]");
  if (!nav) return;
  var threshold = Number(nav.dataset.scrollThreshold) || 0;
  var styled = [nav].concat(Array.prototype.slice.call(nav.querySelectorAll("[data-solid]")));
  var current = nav.dataset.navState;
  function sync() {
    var next = window.scrollY > threshold ? "solid" : "transparent";
    if (next === current) return;
    current = next;
    nav.dataset.navState = next;
    styled.forEach(function (el) {
      el.className = el.dataset.base + " " + el.dataset[next];
    });
  }
  var toggle = nav.querySelector("[data-menu-toggle]");
  var menu = nav.querySelector("[data-mobile-menu]");
  if (toggle && menu) {
    toggle.addEventListener("click", function () {
      var open = menu.hasAttribute("hidden");
      if (open) {
        menu.removeAttribute("hidden");
      } else {
        menu.setAttribute("hidden", "");
      }
      toggle.setAttribute("aria-expanded", String(open));
      var icon = toggle.querySelector("i");
      if (icon) icon.className = (open ? "ri-close-line" : "ri-menu-line") + " text-2xl";
    });
  }
  window.addEventListener("scroll", sync, { passive: true });
  sync();
})();"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_matches_rendered_attributes() {
        for attr in [
            "data-scroll-threshold",
            "data-solid",
            "data-menu-toggle",
            "data-mobile-menu",
        ] {
            assert!(NAV_SCRIPT.contains(attr), "{attr}");
        }
        assert!(!NAV_SCRIPT.contains("</"));
    }
}
