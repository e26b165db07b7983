//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "Nandy & Co. Solicitors".into()
    }

    pub fn short_name() -> String {
        "Nandy & Co.".into()
    }

    pub fn description() -> String {
        "Immigration solicitors in Forest Gate, London E7.".into()
    }

    pub fn url() -> Option<String> {
        None
    }

    pub fn phone() -> String {
        "+442085347000".into()
    }

    pub fn phone_display() -> String {
        "020 8534 7000".into()
    }

    pub fn email() -> String {
        "info@nandyandco.co.uk".into()
    }

    pub fn street() -> String {
        "Forest Gate".into()
    }

    pub fn locality() -> String {
        "London".into()
    }

    pub fn postcode() -> String {
        "E7".into()
    }

    pub fn region() -> String {
        "Greater London".into()
    }

    pub fn country() -> String {
        "GB".into()
    }

    pub fn language() -> String {
        "en-GB".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn assets() -> PathBuf {
        "assets".into()
    }

    pub mod sitemap {
        use std::path::PathBuf;

        pub fn path() -> PathBuf {
            "sitemap.xml".into()
        }
    }

    pub mod head {
        pub fn styles() -> Vec<String> {
            vec![
                "https://cdn.jsdelivr.net/npm/remixicon@4.5.0/fonts/remixicon.css".into(),
                "/assets/site.css".into(),
            ]
        }
    }
}

// ============================================================================
// [serve] Section Defaults
// ============================================================================

pub mod serve {
    pub fn interface() -> String {
        "127.0.0.1".into()
    }

    pub fn port() -> u16 {
        5277
    }
}

// ============================================================================
// [nav] Section Defaults
// ============================================================================

pub mod nav {
    /// One threshold for every page.
    pub fn scroll_threshold() -> u32 {
        50
    }
}

// ============================================================================
// [form] Section Defaults
// ============================================================================

pub mod form {
    pub fn endpoint() -> String {
        "https://readdy.ai/api/form/d4s72hp5bv6k73lc3f80".into()
    }

    pub fn timeout_secs() -> u64 {
        10
    }
}
