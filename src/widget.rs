//! Widget entry point
//!
//! Reads the configuration, runs the stylesheet guard, composes the map,
//! attaches the optional recenter control and the overlay controller, and
//! registers the gesture subscriptions. Setup is synchronous and one-way;
//! afterwards the widget is purely reactive.

use crate::core::config::WidgetConfig;
use crate::core::geo::from_lon_lat;
use crate::dom::{ElementHandle, HostPage};
use crate::map::composer;
use crate::map::events::MapEvent;
use crate::map::MapHandle;
use crate::stylesheet;
use crate::ui::control::CenterControl;
use crate::ui::overlay::{popup_offset, Gesture, Overlay, OverlayController, PopupState};
use crate::Result;
use log::{debug, warn};
use std::cell::RefCell;
use std::rc::Rc;

/// A mounted widget: the map handle plus the overlay controller, with
/// gesture entry points for the host adapter.
pub struct Widget<P: HostPage> {
    page: P,
    map: MapHandle<P::Element>,
    controller: Rc<RefCell<OverlayController<P::Element>>>,
}

impl<P: HostPage> Widget<P> {
    /// Performs the full synchronous setup against `page`.
    ///
    /// Fails only on an invalid configuration or a missing map element;
    /// every other absent collaborator (control elements, icon, popup
    /// content) silently skips its feature.
    pub fn mount(page: P, config: WidgetConfig) -> Result<Self> {
        config.validate()?;

        stylesheet::ensure_loaded(
            &page,
            &config.stylesheet_href,
            config.stylesheet_integrity_hash.as_deref(),
        );

        let mut map = composer::compose(&page, &config)?;
        attach_center_control(&page, &config, &mut map);
        let controller = attach_overlays(&page, &config, &mut map);

        Ok(Self {
            page,
            map,
            controller,
        })
    }

    /// The host document this widget was mounted on.
    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn map(&self) -> &MapHandle<P::Element> {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut MapHandle<P::Element> {
        &mut self.map
    }

    /// Current popup visibility state.
    pub fn popup_state(&self) -> PopupState {
        self.controller.borrow().state()
    }

    pub fn controller(&self) -> &Rc<RefCell<OverlayController<P::Element>>> {
        &self.controller
    }

    /// A click whose target is the icon element.
    ///
    /// Propagation stops here: the map-level click path is never invoked
    /// for the same physical click, so it cannot immediately re-hide what
    /// this click just showed. Browser adapters additionally call
    /// `stopPropagation()` on the DOM event.
    pub fn icon_clicked(&mut self) {
        self.controller.borrow_mut().apply(Gesture::IconClick);
    }

    /// A click on the map surface, including empty background.
    pub fn map_clicked(&mut self) {
        self.map.fire(MapEvent::Click);
    }

    /// A drag of the map surface began.
    pub fn pan_started(&mut self) {
        self.map.fire(MapEvent::MoveStart);
    }

    /// A click on the recenter control button.
    pub fn center_control_clicked(&mut self) {
        self.map.recenter();
    }
}

/// Fire-and-forget setup. Mount failures are logged, never surfaced; an
/// embeddable widget must not throw into host-page script.
pub fn init<P: HostPage>(page: P, config: WidgetConfig) {
    if let Err(error) = Widget::mount(page, config) {
        warn!("widget setup aborted: {error}");
    }
}

/// Attaches the recenter control when both of its elements resolve; the
/// feature is optional and absence is not an error.
fn attach_center_control<P: HostPage>(
    page: &P,
    config: &WidgetConfig,
    map: &mut MapHandle<P::Element>,
) {
    let element = config
        .center_control_element_id
        .as_deref()
        .and_then(|id| page.element_by_id(id));
    let button = config
        .center_control_button_id
        .as_deref()
        .and_then(|id| page.element_by_id(id));

    match (element, button) {
        (Some(element), Some(button)) => {
            let center = from_lon_lat(config.center());
            map.add_control(CenterControl::new(element, button, center));
        }
        _ => debug!("center control elements missing, skipping control"),
    }
}

/// Builds the overlay pair the configuration allows for, attaches it to the
/// map and subscribes the controller to the hide gestures.
fn attach_overlays<P: HostPage>(
    page: &P,
    config: &WidgetConfig,
    map: &mut MapHandle<P::Element>,
) -> Rc<RefCell<OverlayController<P::Element>>> {
    let point = config.point().map(from_lon_lat);
    let icon_element = config
        .icon_element_id
        .as_deref()
        .and_then(|id| page.element_by_id(id));

    let (position, icon_element) = match (point, icon_element) {
        (Some(position), Some(element)) => (position, element),
        _ => {
            debug!("no point or icon element configured, skipping overlays");
            return Rc::new(RefCell::new(OverlayController::without_icon()));
        }
    };

    let icon = Rc::new(RefCell::new(Overlay::icon(
        icon_element,
        config.icon_size_pixels,
        position,
    )));
    map.add_overlay(icon.clone());

    let popup_element = config
        .popup_element_id
        .as_deref()
        .and_then(|id| page.element_by_id(id))
        .filter(|element| !element.text_content().trim().is_empty());

    let popup_element = match popup_element {
        Some(element) => element,
        None => {
            debug!("popup element missing or empty, icon stays inert");
            return Rc::new(RefCell::new(OverlayController::icon_only(icon)));
        }
    };

    let popup = Rc::new(RefCell::new(Overlay::popup(
        popup_element,
        popup_offset(config.icon_size_pixels),
    )));
    map.add_overlay(popup.clone());

    let controller = Rc::new(RefCell::new(OverlayController::with_popup(icon, popup)));

    let on_move = controller.clone();
    map.on_move_start(move |_| on_move.borrow_mut().apply(Gesture::PanStart));
    let on_click = controller.clone();
    map.on_click(move |_| on_click.borrow_mut().apply(Gesture::MapClick));

    controller
}
