//! In-memory host document
//!
//! A fakeable [`HostPage`] so the stylesheet registry and element styling
//! can be asserted on without a browser. Clones share the same underlying
//! document, which lets a test keep a handle after handing the page to the
//! widget.

use super::{ElementHandle, HostPage, StylesheetLink};
use fxhash::FxHashMap as HashMap;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct ElementState {
    styles: HashMap<String, String>,
    text: String,
    title: String,
}

/// Element of a [`MemoryPage`]. Clones refer to the same element state.
#[derive(Debug, Clone)]
pub struct MemoryElement {
    id: String,
    state: Rc<RefCell<ElementState>>,
}

impl MemoryElement {
    fn new(id: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            state: Rc::new(RefCell::new(ElementState {
                text: text.to_string(),
                ..ElementState::default()
            })),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> String {
        self.state.borrow().title.clone()
    }
}

impl ElementHandle for MemoryElement {
    fn set_style(&self, property: &str, value: &str) {
        self.state
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn style(&self, property: &str) -> Option<String> {
        self.state.borrow().styles.get(property).cloned()
    }

    fn text_content(&self) -> String {
        self.state.borrow().text.clone()
    }

    fn set_title(&self, title: &str) {
        self.state.borrow_mut().title = title.to_string();
    }
}

#[derive(Debug, Default)]
struct PageState {
    elements: HashMap<String, MemoryElement>,
    links: Vec<StylesheetLink>,
}

/// In-memory host document. Cheap to clone; clones share state.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    origin: String,
    state: Rc<RefCell<PageState>>,
}

impl MemoryPage {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            state: Rc::new(RefCell::new(PageState::default())),
        }
    }

    /// Declares an empty element, as the host page markup would.
    pub fn insert_element(&self, id: &str) -> MemoryElement {
        self.insert_text_element(id, "")
    }

    /// Declares an element with text content (e.g. popup markup).
    pub fn insert_text_element(&self, id: &str, text: &str) -> MemoryElement {
        let element = MemoryElement::new(id, text);
        self.state
            .borrow_mut()
            .elements
            .insert(id.to_string(), element.clone());
        element
    }

    /// Declares a pre-existing `<link>`, as a host page that already loads
    /// the stylesheet would.
    pub fn insert_link(&self, href: &str) {
        self.state
            .borrow_mut()
            .links
            .push(StylesheetLink::new(href, None));
    }

    /// Snapshot of the current link list.
    pub fn links(&self) -> Vec<StylesheetLink> {
        self.state.borrow().links.clone()
    }
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new("https://host.example")
    }
}

impl HostPage for MemoryPage {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.state.borrow().elements.get(id).cloned()
    }

    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn stylesheet_hrefs(&self) -> Vec<String> {
        self.state
            .borrow()
            .links
            .iter()
            .map(|link| link.href.clone())
            .collect()
    }

    fn append_stylesheet(&self, link: StylesheetLink) {
        self.state.borrow_mut().links.push(link);
    }
}
