//! `[nav]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[nav]` section in lexsite.toml - navigation shell behaviour.
///
/// ```toml
/// [nav]
/// scroll_threshold = 50
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct NavConfig {
    /// Scroll offset in pixels past which the bar turns solid.
    /// Applies to every page.
    #[serde(default = "defaults::nav::scroll_threshold")]
    #[educe(Default = defaults::nav::scroll_threshold())]
    pub scroll_threshold: u32,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_nav_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.nav.scroll_threshold, 50);
    }

    #[test]
    fn test_nav_override() {
        let config: SiteConfig = toml::from_str("[nav]\nscroll_threshold = 100").unwrap();
        assert_eq!(config.nav.scroll_threshold, 100);
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[nav]\nscroll_threshold = -5");
        assert!(result.is_err());
    }
}
