//! Browser host-page adapter (feature `wasm`)
//!
//! Implements [`HostPage`] over the live document via `web-sys` and bridges
//! DOM gestures into the widget's entry points. Pan-start is approximated
//! by pointer movement with a pressed button on the map element; the
//! rendering engine owning the real drag recognizer can call
//! [`crate::widget::Widget::pan_started`] directly instead.

use super::{ElementHandle, HostPage, StylesheetLink};
use crate::core::config::WidgetConfig;
use crate::widget::Widget;
use crate::{Result, WidgetError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlLinkElement, MouseEvent};

/// Handle to a live DOM element.
#[derive(Clone)]
pub struct WebElement {
    inner: HtmlElement,
}

impl WebElement {
    pub fn raw(&self) -> &HtmlElement {
        &self.inner
    }
}

impl ElementHandle for WebElement {
    fn set_style(&self, property: &str, value: &str) {
        // Style writes are best-effort, matching the embeddable-widget
        // policy of never throwing into the host page.
        let _ = self.inner.style().set_property(property, value);
    }

    fn style(&self, property: &str) -> Option<String> {
        self.inner
            .style()
            .get_property_value(property)
            .ok()
            .filter(|value| !value.is_empty())
    }

    fn text_content(&self) -> String {
        self.inner.inner_text()
    }

    fn set_title(&self, title: &str) {
        self.inner.set_title(title);
    }
}

/// The live browser document.
#[derive(Clone)]
pub struct WebPage {
    document: Document,
    origin: String,
}

impl WebPage {
    /// Binds to the current window's document.
    pub fn current() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| WidgetError::Host("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| WidgetError::Host("no document".to_string()))?;
        let origin = window
            .location()
            .origin()
            .map_err(|e| host_error("location.origin", e))?;
        Ok(Self { document, origin })
    }

    /// Reads the widget configuration from `data-*` attributes on the
    /// currently executing script tag.
    pub fn config_from_current_script(&self) -> Option<WidgetConfig> {
        let script = self.document.current_script()?;
        Some(crate::core::attrs::config_from_attributes(|name| {
            script.get_attribute(name)
        }))
    }
}

impl HostPage for WebPage {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        let element = self.document.get_element_by_id(id)?;
        let inner = element.dyn_into::<HtmlElement>().ok()?;
        Some(WebElement { inner })
    }

    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn stylesheet_hrefs(&self) -> Vec<String> {
        let mut hrefs = Vec::new();
        if let Ok(links) = self.document.query_selector_all("link") {
            for index in 0..links.length() {
                if let Some(node) = links.get(index) {
                    if let Some(link) = node.dyn_ref::<HtmlLinkElement>() {
                        // link.href() is the resolved absolute URL, which is
                        // what the three-way guard check expects.
                        hrefs.push(link.href());
                    }
                }
            }
        }
        hrefs
    }

    fn append_stylesheet(&self, link: StylesheetLink) {
        let element = match self.document.create_element("link") {
            Ok(element) => element,
            Err(_) => return,
        };
        let _ = element.set_attribute("rel", "stylesheet");
        let _ = element.set_attribute("href", &link.href);
        if let Some(integrity) = &link.integrity {
            let _ = element.set_attribute("integrity", integrity);
        }
        if let Some(head) = self.document.head() {
            let _ = head.append_child(&element);
        }
    }
}

/// Mounts the widget against the live document and wires DOM gestures.
///
/// The widget is kept alive for the page lifetime (listeners hold it); the
/// map is destroyed with the host element by the surrounding page, never by
/// us.
pub fn mount(config: WidgetConfig) -> Result<()> {
    let page = WebPage::current()?;

    let icon_element = config
        .icon_element_id
        .as_deref()
        .and_then(|id| page.document.get_element_by_id(id));
    let map_element = page.document.get_element_by_id(&config.map_element_id);
    let button_element = config
        .center_control_button_id
        .as_deref()
        .and_then(|id| page.document.get_element_by_id(id));

    let widget = Rc::new(RefCell::new(Widget::mount(page, config)?));

    if let Some(icon) = icon_element {
        let handle = widget.clone();
        listen(&icon, "click", move |event| {
            // Keeps the map click handler from re-hiding what this click
            // just showed.
            event.stop_propagation();
            handle.borrow_mut().icon_clicked();
        })?;
    }

    if let Some(map) = map_element {
        let handle = widget.clone();
        listen(&map, "click", move |_| handle.borrow_mut().map_clicked())?;

        let handle = widget.clone();
        listen(&map, "pointermove", move |event| {
            if event.buttons() != 0 {
                handle.borrow_mut().pan_started();
            }
        })?;
    }

    if let Some(button) = button_element {
        let handle = widget.clone();
        listen(&button, "click", move |_| {
            handle.borrow_mut().center_control_clicked()
        })?;
    }

    Ok(())
}

/// Convenience boot path: read `data-*` attributes from the current script
/// tag and mount. Logs and swallows failures like [`crate::widget::init`].
pub fn boot_from_current_script() {
    let page = match WebPage::current() {
        Ok(page) => page,
        Err(error) => {
            log::warn!("widget setup aborted: {error}");
            return;
        }
    };
    let Some(config) = page.config_from_current_script() else {
        log::warn!("no current script tag, widget not configured");
        return;
    };
    if let Err(error) = mount(config) {
        log::warn!("widget setup aborted: {error}");
    }
}

fn listen<F>(target: &Element, kind: &str, callback: F) -> Result<()>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::<dyn FnMut(MouseEvent)>::new(callback);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(|e| host_error("addEventListener", e))?;
    // The listener lives as long as the page does.
    closure.forget();
    Ok(())
}

fn host_error(context: &str, value: JsValue) -> WidgetError {
    WidgetError::Host(format!("{context}: {value:?}"))
}
