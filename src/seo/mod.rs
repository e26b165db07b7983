//! Per-page SEO metadata.
//!
//! A page view describes its head with a [`MetaSnapshot`]; the JSON-LD
//! payload inside it is assembled from the generators in [`schema`]. URLs
//! are made absolute with [`url::absolute`].

pub mod schema;
mod snapshot;
pub mod url;

pub use snapshot::MetaSnapshot;

use thiserror::Error;

/// Errors raised while assembling page metadata.
///
/// These are programmer errors: static page data is expected to be well
/// formed, so they surface loudly instead of rendering a broken head.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeoError {
    #[error("page title must not be empty")]
    EmptyTitle,
}
