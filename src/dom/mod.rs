//! Host-document seam
//!
//! The widget never creates structural elements; it looks up elements the
//! host page declared, writes a handful of geometry-dependent styles, and
//! appends stylesheet links. [`HostPage`] is that whole surface as a trait,
//! so the same widget runs against a real browser document ([`web`], feature
//! `wasm`) or an in-memory document ([`memory`]) in tests and headless
//! embedders.

pub mod memory;
#[cfg(feature = "wasm")]
pub mod web;

/// A `<link rel="stylesheet">` entry in the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetLink {
    pub href: String,
    pub integrity: Option<String>,
}

impl StylesheetLink {
    pub fn new(href: impl Into<String>, integrity: Option<String>) -> Self {
        Self {
            href: href.into(),
            integrity,
        }
    }
}

/// Handle to one host element. Clones refer to the same element; handles
/// are owned and outlive any borrow of the page (`'static`), so gesture
/// closures can capture them.
pub trait ElementHandle: Clone + 'static {
    /// Writes a single style property (`"height"`, `"display"`, ...).
    fn set_style(&self, property: &str, value: &str);

    /// Reads back a style property previously written, if any.
    fn style(&self, property: &str) -> Option<String>;

    /// The element's rendered text content.
    fn text_content(&self) -> String;

    /// Sets the element's tooltip title.
    fn set_title(&self, title: &str);
}

/// The host document: element lookup plus the page-wide stylesheet link
/// registry. The registry lives as long as the document and is shared by
/// every widget instance on the page.
pub trait HostPage {
    type Element: ElementHandle;

    /// Resolves an element by id, `None` when the page did not declare it.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// The page origin, e.g. `"https://host.example"`.
    fn origin(&self) -> String;

    /// Href values of every `<link>` element currently in the document.
    fn stylesheet_hrefs(&self) -> Vec<String>;

    /// Appends a stylesheet link to the document head.
    fn append_stylesheet(&self, link: StylesheetLink);
}
