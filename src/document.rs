//! The document shell: wraps rendered page content in the full HTML document.
//!
//! Every document carries exactly one charset and one viewport `<meta>`. Page
//! meta is appended after them, with page-supplied `viewport` entries dropped
//! and only the last title kept. The distributed value is embedded in the head
//! as a JSON data island so client code can pick it up.

use askama::Template;
use serde_json::Value;

use crate::configuration::DocumentSettings;
use crate::server::error::AppError;
use crate::server::root::RootContext;
use crate::templates::{DocumentTemplate, MetaAttr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaTag {
    Title(String),
    Name { name: String, content: String },
    Property { property: String, content: String },
}

impl MetaTag {
    pub fn title(title: impl Into<String>) -> Self {
        MetaTag::Title(title.into())
    }

    pub fn name(name: impl Into<String>, content: impl Into<String>) -> Self {
        MetaTag::Name {
            name: name.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Document<'a> {
    settings: &'a DocumentSettings,
    meta: Vec<MetaTag>,
}

impl<'a> Document<'a> {
    pub fn new(settings: &'a DocumentSettings) -> Self {
        let mut meta = Vec::new();
        if let Some(title) = &settings.title {
            meta.push(MetaTag::title(title.clone()));
        }
        if let Some(description) = &settings.description {
            meta.push(MetaTag::name("description", description.clone()));
        }
        Self { settings, meta }
    }

    pub fn with_meta(mut self, meta: impl IntoIterator<Item = MetaTag>) -> Self {
        self.meta.extend(meta);
        self
    }

    pub fn render(&self, ctx: &RootContext, body: &str) -> Result<String, AppError> {
        let (title, meta) = resolve_meta(&self.meta);
        let root_value_json = serialize_for_script(ctx.value());

        let template = DocumentTemplate {
            lang: &self.settings.lang,
            title,
            meta: &meta,
            stylesheets: &self.settings.stylesheets,
            root_value_json: &root_value_json,
            body,
            scroll_restoration: self.settings.scroll_restoration,
            scripts: &self.settings.scripts,
        };
        Ok(template.render()?)
    }

    /// The title the rendered document will carry, if any.
    pub fn title(&self) -> Option<&str> {
        self.meta.iter().rev().find_map(|tag| match tag {
            MetaTag::Title(title) => Some(title.as_str()),
            _ => None,
        })
    }
}

fn resolve_meta(tags: &[MetaTag]) -> (Option<&str>, Vec<MetaAttr>) {
    let mut title = None;
    let mut meta = Vec::new();
    for tag in tags {
        match tag {
            MetaTag::Title(t) => title = Some(t.as_str()),
            MetaTag::Name { name, .. } if is_reserved(name) => {}
            MetaTag::Name { name, content } => meta.push(MetaAttr {
                attr: "name",
                key: name.clone(),
                content: content.clone(),
            }),
            MetaTag::Property { property, content } => meta.push(MetaAttr {
                attr: "property",
                key: property.clone(),
                content: content.clone(),
            }),
        }
    }
    (title, meta)
}

// The shell always emits these itself.
fn is_reserved(name: &str) -> bool {
    name.eq_ignore_ascii_case("viewport") || name.eq_ignore_ascii_case("charset")
}

/// JSON that is safe to place inside a `<script>` element.
pub fn serialize_for_script(value: &Value) -> String {
    let json = value.to_string();
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}
