//! Global config handle.
//!
//! Uses `arc-swap` for lock-free reads. `main` publishes the loaded config
//! once; request handlers take a snapshot with [`cfg`] per request.
//!
//! ```ignore
//! use crate::config::cfg;
//!
//! let c = cfg();
//! render_route(route, &c)?;  // Arc auto-derefs to &SiteConfig
//! ```

use super::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage, initialized with defaults and replaced in `main`.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Get current config as `Arc<SiteConfig>`. Wait-free.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Publish the loaded config (called once at startup).
#[inline]
pub fn init_config(config: SiteConfig) {
    CONFIG.store(Arc::new(config));
}
