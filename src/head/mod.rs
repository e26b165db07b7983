//! Document head model and its synchronizer.
//!
//! [`Head`] is an ordered list of head nodes plus the document title. It is
//! readable from anywhere but only [`HeadSync`] (and the base-head
//! constructor in this module) can mutate it, so no page touches head nodes
//! directly.
//!
//! ```text
//!   Head::from_config()          HeadSync::apply(snapshot)
//!   ┌──────────────────┐         ┌──────────────────────────────┐
//!   │ charset          │         │ <title>                      │
//!   │ viewport         │ ──────► │ meta description / og / tw   │
//!   │ last-modified    │         │ link rel=canonical           │
//!   │ icon, styles     │         │ meta og:url                  │
//!   │ scripts          │         │ script[data-page-schema]     │
//!   └──────────────────┘         └──────────────────────────────┘
//! ```

mod sync;

pub use sync::HeadSync;

use crate::config::SiteConfig;
use crate::utils::xml::{XmlWriter, write_empty_elem, write_script, write_text_element};
use anyhow::Result;

/// Marker attribute that identifies the page schema script.
pub const PAGE_SCHEMA_ATTR: &str = "data-page-schema";

/// A single element inside `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: &'static str,
    attrs: Vec<(String, String)>,
    text: Option<String>,
}

impl Node {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            text: None,
        }
    }

    fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[cfg(test)]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn set_attr(&mut self, key: &str, value: &str) {
        match self.attrs.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => {
                if v != value {
                    *v = value.to_owned();
                }
            }
            None => self.attrs.push((key.to_owned(), value.to_owned())),
        }
    }

    fn set_text(&mut self, text: String) {
        self.text = Some(text);
    }

    fn matches(&self, lookup: &Lookup<'_>) -> bool {
        self.tag == lookup.tag
            && match lookup.value {
                Some(value) => self.attr(lookup.attr) == Some(value),
                None => self.attr(lookup.attr).is_some(),
            }
    }

    fn write(&self, writer: &mut XmlWriter) -> Result<()> {
        match self.tag {
            "script" => write_script(writer, &self.attrs, self.text.as_deref().unwrap_or("")),
            tag => write_empty_elem(writer, tag, &self.attrs),
        }
    }
}

/// Stable lookup key for a head node: a tag plus an attribute, optionally
/// with a required value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup<'a> {
    pub tag: &'static str,
    pub attr: &'static str,
    pub value: Option<&'a str>,
}

impl<'a> Lookup<'a> {
    /// `<meta name="...">`
    pub const fn meta_name(name: &'a str) -> Self {
        Self {
            tag: "meta",
            attr: "name",
            value: Some(name),
        }
    }

    /// `<meta property="...">`
    pub const fn meta_property(property: &'a str) -> Self {
        Self {
            tag: "meta",
            attr: "property",
            value: Some(property),
        }
    }

    /// `<link rel="canonical">`
    pub const CANONICAL: Lookup<'static> = Lookup {
        tag: "link",
        attr: "rel",
        value: Some("canonical"),
    };

    /// `<script data-page-schema>`
    pub const PAGE_SCHEMA: Lookup<'static> = Lookup {
        tag: "script",
        attr: PAGE_SCHEMA_ATTR,
        value: None,
    };

    fn create(&self) -> Node {
        let node = Node::new(self.tag);
        match self.value {
            Some(value) => node.with_attr(self.attr, value),
            None => node.with_attr(self.attr, "true"),
        }
    }
}

/// The document head: title plus ordered nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Head {
    title: String,
    nodes: Vec<Node>,
}

impl Head {
    /// Page-independent head built from `[base]` and `[build.head]`.
    pub fn from_config(config: &SiteConfig) -> Self {
        let head_cfg = &config.build.head;
        let mut head = Self {
            title: config.base.title.clone(),
            nodes: Vec::new(),
        };

        head.nodes.push(Node::new("meta").with_attr("charset", "utf-8"));
        head.nodes.push(
            Node::new("meta")
                .with_attr("name", "viewport")
                .with_attr("content", "width=device-width, initial-scale=1"),
        );
        if config.build.last_modified {
            head.nodes.push(
                Node::new("meta")
                    .with_attr("name", "last-modified")
                    .with_attr("content", ""),
            );
        }
        if let Some(icon) = &head_cfg.icon {
            head.nodes
                .push(Node::new("link").with_attr("rel", "icon").with_attr("href", icon));
        }
        for style in &head_cfg.styles {
            head.nodes.push(
                Node::new("link")
                    .with_attr("rel", "stylesheet")
                    .with_attr("href", style),
            );
        }
        for script in &head_cfg.scripts {
            let mut node = Node::new("script").with_attr("src", script.src());
            if script.is_defer() {
                node.set_attr("defer", "");
            }
            if script.is_async() {
                node.set_attr("async", "");
            }
            head.nodes.push(node);
        }

        head
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn find(&self, lookup: &Lookup<'_>) -> Option<&Node> {
        self.nodes.iter().find(|node| node.matches(lookup))
    }

    pub fn count(&self, lookup: &Lookup<'_>) -> usize {
        self.nodes.iter().filter(|node| node.matches(lookup)).count()
    }

    /// Content attribute of `<meta name=...>` or `<meta property=...>`.
    pub fn meta_content(&self, key: &str) -> Option<&str> {
        self.find(&Lookup::meta_name(key))
            .or_else(|| self.find(&Lookup::meta_property(key)))
            .and_then(|node| node.attr("content"))
    }

    fn set_title(&mut self, title: &str) {
        if self.title != title {
            title.clone_into(&mut self.title);
        }
    }

    fn find_or_insert(&mut self, lookup: &Lookup<'_>) -> &mut Node {
        let index = match self.nodes.iter().position(|node| node.matches(lookup)) {
            Some(index) => index,
            None => {
                self.nodes.push(lookup.create());
                self.nodes.len() - 1
            }
        };
        &mut self.nodes[index]
    }

    fn find_mut(&mut self, lookup: &Lookup<'_>) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|node| node.matches(lookup))
    }

    /// Remove every node matching `lookup`; returns how many were removed.
    fn remove(&mut self, lookup: &Lookup<'_>) -> usize {
        let before = self.nodes.len();
        self.nodes.retain(|node| !node.matches(lookup));
        before - self.nodes.len()
    }

    /// Write the `<head>` element.
    pub fn write(&self, writer: &mut XmlWriter) -> Result<()> {
        use quick_xml::events::{BytesEnd, BytesStart, Event};

        writer.write_event(Event::Start(BytesStart::new("head")))?;
        // charset must come first
        for node in self.nodes.iter().filter(|n| n.attr("charset").is_some()) {
            node.write(writer)?;
        }
        write_text_element(writer, "title", &self.title)?;
        for node in self.nodes.iter().filter(|n| n.attr("charset").is_none()) {
            node.write(writer)?;
        }
        writer.write_event(Event::End(BytesEnd::new("head")))?;
        Ok(())
    }
}
