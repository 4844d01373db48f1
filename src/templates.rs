use askama::Template;

/// A `<meta>` entry already resolved to its key attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaAttr {
    pub attr: &'static str,
    pub key: String,
    pub content: String,
}

#[derive(Template)]
#[template(path = "layouts/root.html")]
pub struct DocumentTemplate<'a> {
    pub lang: &'a str,
    pub title: Option<&'a str>,
    pub meta: &'a [MetaAttr],
    pub stylesheets: &'a [String],
    pub root_value_json: &'a str,
    pub body: &'a str,
    pub scroll_restoration: bool,
    pub scripts: &'a [String],
}

#[derive(Template)]
#[template(path = "routes/index.html")]
pub struct IndexTemplate<'a> {
    pub text: &'a str,
}
