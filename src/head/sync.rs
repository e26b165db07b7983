use super::{Head, Lookup, PAGE_SCHEMA_ATTR};
use crate::log;
use crate::seo::{MetaSnapshot, url::absolute};
use chrono::{Local, NaiveDate};
use serde_json::Value;

/// Meta tags keyed by `name`.
const NAMED_TAGS: [&str; 3] = ["description", "twitter:title", "twitter:description"];

/// Reconciles a [`Head`] with the active [`MetaSnapshot`].
///
/// Only one snapshot is active at a time. `apply` supersedes whatever was
/// applied before; `teardown` drops the page schema of the outgoing page
/// and leaves shared tags for the next `apply` to overwrite.
#[derive(Debug, Clone)]
pub struct HeadSync {
    head: Head,
    base_url: String,
    today: String,
    active: Option<MetaSnapshot>,
}

impl HeadSync {
    pub fn new(head: Head, base_url: impl Into<String>) -> Self {
        Self::with_date(head, base_url, Local::now().date_naive())
    }

    /// Same as [`HeadSync::new`] with a fixed last-modified date.
    pub fn with_date(head: Head, base_url: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            head,
            base_url: base_url.into(),
            today: date.format("%Y-%m-%d").to_string(),
            active: None,
        }
    }

    pub fn head(&self) -> &Head {
        &self.head
    }

    #[cfg(test)]
    pub fn active(&self) -> Option<&MetaSnapshot> {
        self.active.as_ref()
    }

    pub fn into_head(self) -> Head {
        self.head
    }

    /// Write `snapshot` into the head. Calling it again with an equal
    /// snapshot leaves the head untouched.
    pub fn apply(&mut self, snapshot: &MetaSnapshot) {
        if self.active.as_ref() == Some(snapshot) {
            return;
        }

        let head = &mut self.head;
        head.set_title(&snapshot.title);

        let named = [
            &snapshot.description,
            &snapshot.title,
            &snapshot.description,
        ];
        for (name, content) in NAMED_TAGS.into_iter().zip(named) {
            set_meta(head, Lookup::meta_name(name), content);
        }

        let properties = [
            ("og:title", snapshot.title.as_str()),
            ("og:description", snapshot.description.as_str()),
            ("og:type", snapshot.og_type.as_str()),
        ];
        for (property, content) in properties {
            set_meta(head, Lookup::meta_property(property), content);
        }

        match &snapshot.keywords {
            Some(keywords) => set_meta(head, Lookup::meta_name("keywords"), keywords),
            None => {
                head.remove(&Lookup::meta_name("keywords"));
            }
        }

        let path = snapshot.canonical_path.as_deref().unwrap_or("");
        let url = absolute(&self.base_url, path);
        if snapshot.canonical_path.is_some() {
            head.find_or_insert(&Lookup::CANONICAL).set_attr("href", &url);
        } else {
            head.remove(&Lookup::CANONICAL);
        }
        set_meta(head, Lookup::meta_property("og:url"), &url);

        match &snapshot.structured_data {
            Some(data) => write_page_schema(head, data),
            None => {
                head.remove(&Lookup::PAGE_SCHEMA);
            }
        }

        if let Some(node) = head.find_mut(&Lookup::meta_name("last-modified")) {
            node.set_attr("content", &self.today);
        }

        self.active = Some(snapshot.clone());
    }

    /// Remove the page schema node of the outgoing page.
    pub fn teardown(&mut self) {
        self.head.remove(&Lookup::PAGE_SCHEMA);
        self.active = None;
    }
}

fn set_meta(head: &mut Head, lookup: Lookup<'_>, content: &str) {
    head.find_or_insert(&lookup).set_attr("content", content);
}

fn write_page_schema(head: &mut Head, data: &Value) {
    let json = match serde_json::to_string(data) {
        Ok(json) => json,
        Err(e) => {
            debug_assert!(false, "page schema failed to serialize: {e}");
            log!("head"; "skipping page schema: {e}");
            head.remove(&Lookup::PAGE_SCHEMA);
            return;
        }
    };

    let node = head.find_or_insert(&Lookup::PAGE_SCHEMA);
    node.set_attr("type", "application/ld+json");
    node.set_attr(PAGE_SCHEMA_ATTR, "true");
    node.set_text(escape_script(&json));
}

/// JSON is safe inside `<script>` once no `<` can start a closing tag.
fn escape_script(json: &str) -> String {
    json.replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use serde_json::json;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn sync(base: &str) -> HeadSync {
        let config = SiteConfig::from_str("[build.head]\nscripts = [\"/assets/app.js\"]").unwrap();
        HeadSync::with_date(Head::from_config(&config), base, date())
    }

    fn full(title: &str, path: &str, schema: Value) -> MetaSnapshot {
        MetaSnapshot::builder(title, format!("{title} description"))
            .keywords(format!("{title} keywords"))
            .canonical(path)
            .og_type("website")
            .schema(schema)
            .build()
            .unwrap()
    }

    fn schema_text(sync: &HeadSync) -> Option<&str> {
        sync.head().find(&Lookup::PAGE_SCHEMA).and_then(|n| n.text())
    }

    fn canonical_href(sync: &HeadSync) -> Option<&str> {
        sync.head().find(&Lookup::CANONICAL).and_then(|n| n.attr("href"))
    }

    #[test]
    fn test_home_scenario() {
        let mut sync = sync("https://example.com");
        let snapshot = MetaSnapshot::builder("Home", "D")
            .canonical("/")
            .schema(json!({"a": 1}))
            .build()
            .unwrap();

        sync.apply(&snapshot);

        assert_eq!(sync.head().title(), "Home");
        assert_eq!(canonical_href(&sync), Some("https://example.com/"));
        assert_eq!(sync.head().meta_content("og:url"), Some("https://example.com/"));
        assert_eq!(schema_text(&sync), Some(r#"{"a":1}"#));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut sync = sync("https://example.com");
        let snapshot = full("About", "/about", json!({"@type": "AboutPage"}));

        sync.apply(&snapshot);
        let once = sync.head().clone();
        sync.apply(&snapshot);
        assert_eq!(sync.head(), &once);

        // a fresh clone of the same values goes through the full write path
        sync.active = None;
        sync.apply(&snapshot.clone());
        assert_eq!(sync.head(), &once);
    }

    #[test]
    fn test_one_node_per_key() {
        let mut sync = sync("");
        sync.apply(&full("A", "/a", json!({"a": 1})));
        sync.apply(&full("B", "/b", json!({"b": 2})));

        let head = sync.head();
        for name in ["description", "keywords", "twitter:title", "twitter:description"] {
            assert_eq!(head.count(&Lookup::meta_name(name)), 1, "{name}");
        }
        for property in ["og:title", "og:description", "og:type", "og:url"] {
            assert_eq!(head.count(&Lookup::meta_property(property)), 1, "{property}");
        }
        assert_eq!(head.count(&Lookup::CANONICAL), 1);
        assert_eq!(head.count(&Lookup::PAGE_SCHEMA), 1);
    }

    #[test]
    fn test_second_snapshot_supersedes_first() {
        let mut sync = sync("https://example.com");
        sync.apply(&full("A", "/a", json!({"page": "a"})));
        let b = full("B", "/b", json!({"page": "b"}));
        sync.apply(&b);

        let head = sync.head();
        assert_eq!(head.title(), "B");
        assert_eq!(head.meta_content("description"), Some("B description"));
        assert_eq!(head.meta_content("keywords"), Some("B keywords"));
        assert_eq!(head.meta_content("og:title"), Some("B"));
        assert_eq!(head.meta_content("twitter:description"), Some("B description"));
        assert_eq!(head.meta_content("og:url"), Some("https://example.com/b"));
        assert_eq!(canonical_href(&sync), Some("https://example.com/b"));
        assert_eq!(schema_text(&sync), Some(r#"{"page":"b"}"#));
        assert_eq!(sync.active(), Some(&b));
    }

    #[test]
    fn test_optional_fields_do_not_linger() {
        let mut sync = sync("https://example.com");
        sync.apply(&full("A", "/a", json!({"a": 1})));
        sync.apply(&MetaSnapshot::builder("Bare", "D").build().unwrap());

        let head = sync.head();
        assert_eq!(head.meta_content("keywords"), None);
        assert!(head.find(&Lookup::CANONICAL).is_none());
        assert!(head.find(&Lookup::PAGE_SCHEMA).is_none());
        assert_eq!(head.meta_content("og:url"), Some("https://example.com"));
    }

    #[test]
    fn test_og_url_without_base_or_path() {
        let mut sync = sync("");
        sync.apply(&MetaSnapshot::builder("Home", "D").build().unwrap());
        assert_eq!(sync.head().meta_content("og:url"), Some(""));
    }

    #[test]
    fn test_teardown_removes_only_page_schema() {
        let mut sync = sync("https://example.com");
        sync.apply(&full("A", "/a", json!({"a": 1})));
        let before = sync.head().nodes().to_vec();

        sync.teardown();

        let after = sync.head().nodes();
        assert_eq!(after.len(), before.len() - 1);
        let removed: Vec<_> = before.iter().filter(|n| !after.contains(n)).collect();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].attr(PAGE_SCHEMA_ATTR), Some("true"));
        assert!(sync.active().is_none());
        // the plain script from the base head survives
        assert_eq!(sync.head().count(&Lookup { tag: "script", attr: "src", value: None }), 1);
    }

    #[test]
    fn test_schema_script_cannot_close_early() {
        let mut sync = sync("");
        sync.apply(&full("A", "/a", json!({"text": "</script><b>"})));

        let text = schema_text(&sync).unwrap();
        assert!(!text.contains('<'));
        assert_eq!(text, r#"{"text":"\u003c/script>\u003cb>"}"#);
    }

    #[test]
    fn test_schema_node_marked_and_typed() {
        let mut sync = sync("");
        sync.apply(&full("A", "/a", json!({})));

        let node = sync.head().find(&Lookup::PAGE_SCHEMA).unwrap();
        assert_eq!(node.attr("type"), Some("application/ld+json"));
        assert_eq!(node.attr(PAGE_SCHEMA_ATTR), Some("true"));
    }

    #[test]
    fn test_last_modified_stamped() {
        let mut sync = sync("");
        assert_eq!(sync.head().meta_content("last-modified"), Some(""));
        sync.apply(&full("A", "/a", json!({})));
        assert_eq!(sync.head().meta_content("last-modified"), Some("2026-03-14"));
    }
}
