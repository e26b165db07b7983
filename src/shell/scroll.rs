//! Scroll-derived navigation state.
//!
//! The state is a pure function of the scroll offset; rendering is a
//! separate lookup from state to class sets.

/// Visual state of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Transparent,
    Solid,
}

impl NavState {
    /// `Solid` once the page has scrolled past `threshold` pixels.
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            Self::Solid
        } else {
            Self::Transparent
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transparent => "transparent",
            Self::Solid => "solid",
        }
    }
}

/// Re-derives [`NavState`] on every scroll event and reports changes.
#[derive(Debug, Clone, Copy)]
pub struct ScrollTracker {
    threshold: f64,
    state: NavState,
}

impl ScrollTracker {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: f64::from(threshold),
            state: NavState::Transparent,
        }
    }

    pub const fn state(&self) -> NavState {
        self.state
    }

    /// Feed a scroll offset; returns the new state only on a transition.
    pub fn observe(&mut self, offset: f64) -> Option<NavState> {
        let next = NavState::from_offset(offset, self.threshold);
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }
}

/// State-dependent classes of each styled element in the nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavStyle {
    pub bar: &'static str,
    pub logo_icon: &'static str,
    pub brand: &'static str,
    pub link: &'static str,
    pub call: &'static str,
    pub toggle: &'static str,
}

impl NavStyle {
    pub const TRANSPARENT: Self = Self {
        bar: "bg-transparent",
        logo_icon: "text-white",
        brand: "text-white",
        link: "text-white hover:text-teal-200",
        call: "bg-white text-teal-600 hover:bg-teal-50",
        toggle: "text-white hover:bg-white/10",
    };

    pub const SOLID: Self = Self {
        bar: "bg-white shadow-md",
        logo_icon: "text-teal-600",
        brand: "text-gray-900",
        link: "text-gray-700 hover:text-teal-600",
        call: "bg-teal-600 text-white hover:bg-teal-700",
        toggle: "text-gray-700 hover:bg-gray-100",
    };

    pub const fn for_state(state: NavState) -> &'static Self {
        match state {
            NavState::Transparent => &Self::TRANSPARENT,
            NavState::Solid => &Self::SOLID,
        }
    }
}
