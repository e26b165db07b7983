//! `[form]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// `[form]` section in lexsite.toml - contact form relay.
///
/// ```toml
/// [form]
/// endpoint = "https://forms.example.com/f/abc123"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct FormConfig {
    /// Third-party collection endpoint receiving the url-encoded POST.
    #[serde(default = "defaults::form::endpoint")]
    #[educe(Default = defaults::form::endpoint())]
    pub endpoint: String,

    /// Whole-request timeout for the outbound POST.
    #[serde(default = "defaults::form::timeout_secs")]
    #[educe(Default = defaults::form::timeout_secs())]
    pub timeout_secs: u64,
}

impl FormConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
