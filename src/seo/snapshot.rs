use super::SeoError;
use serde_json::Value;

/// Open Graph type used when a page does not pick one.
pub const DEFAULT_OG_TYPE: &str = "website";

/// The complete set of SEO values applied to the document head at once.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaSnapshot {
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
    /// Site-relative path such as `/about`.
    pub canonical_path: Option<String>,
    pub og_type: String,
    /// JSON-LD payload for the page schema script.
    pub structured_data: Option<Value>,
}

impl MetaSnapshot {
    pub fn builder(title: impl Into<String>, description: impl Into<String>) -> MetaSnapshotBuilder {
        MetaSnapshotBuilder {
            title: title.into(),
            description: description.into(),
            keywords: None,
            canonical_path: None,
            og_type: None,
            structured_data: None,
        }
    }
}

/// Builder for [`MetaSnapshot`]; `build` rejects an empty title.
#[derive(Debug, Clone)]
pub struct MetaSnapshotBuilder {
    title: String,
    description: String,
    keywords: Option<String>,
    canonical_path: Option<String>,
    og_type: Option<String>,
    structured_data: Option<Value>,
}

impl MetaSnapshotBuilder {
    pub fn keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn canonical(mut self, path: impl Into<String>) -> Self {
        self.canonical_path = Some(path.into());
        self
    }

    pub fn og_type(mut self, og_type: impl Into<String>) -> Self {
        self.og_type = Some(og_type.into());
        self
    }

    pub fn schema(mut self, schema: Value) -> Self {
        self.structured_data = Some(schema);
        self
    }

    pub fn build(self) -> Result<MetaSnapshot, SeoError> {
        if self.title.trim().is_empty() {
            return Err(SeoError::EmptyTitle);
        }
        Ok(MetaSnapshot {
            title: self.title,
            description: self.description,
            keywords: self.keywords,
            canonical_path: self.canonical_path,
            og_type: self.og_type.unwrap_or_else(|| DEFAULT_OG_TYPE.to_owned()),
            structured_data: self.structured_data,
        })
    }
}
