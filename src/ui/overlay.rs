//! Overlays and the popup interaction state machine
//!
//! A widget owns at most two overlays: the icon, fixed at the point's
//! projected coordinate, and the popup, whose position is unset while
//! hidden and equal to the icon's position while shown. All visibility
//! rules live in [`OverlayController`] as one explicit transition table
//! rather than scattered callbacks, which keeps the mutual-exclusion
//! invariant checkable.

use crate::core::geo::Point;
use crate::dom::ElementHandle;
use std::cell::RefCell;
use std::rc::Rc;

/// How an overlay element is anchored to its map coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Positioning {
    /// Horizontal midpoint of the element, bottom edge, sits on the
    /// coordinate. The icon's tip points at the point; the popup hangs
    /// above it.
    #[default]
    BottomCenter,
}

/// A positioned host element attached to the map surface.
#[derive(Debug, Clone)]
pub struct Overlay<E: ElementHandle> {
    element: E,
    positioning: Positioning,
    offset: Point,
    position: Option<Point>,
    stop_event: bool,
}

impl<E: ElementHandle> Overlay<E> {
    /// Builds the icon overlay: a square of `size_px`, shown at `position`.
    /// The position never changes afterwards; markers are static per
    /// widget instance.
    pub fn icon(element: E, size_px: u32, position: Point) -> Self {
        let length = format!("{size_px}px");
        element.set_style("height", &length);
        element.set_style("width", &length);
        element.set_style("display", "block");

        Self {
            element,
            positioning: Positioning::BottomCenter,
            offset: Point::new(0.0, 0.0),
            position: Some(position),
            // The icon must stay clickable without swallowing map gestures
            stop_event: false,
        }
    }

    /// Builds the popup overlay, initially hidden (no resolved position).
    pub fn popup(element: E, offset: Point) -> Self {
        element.set_style("display", "block");

        Self {
            element,
            positioning: Positioning::BottomCenter,
            offset,
            position: None,
            stop_event: false,
        }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn positioning(&self) -> Positioning {
        self.positioning
    }

    /// Offset in screen pixels applied on top of the anchored position.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// The overlay's resolved position; `None` means not shown.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub fn set_position(&mut self, position: Option<Point>) {
        self.position = position;
    }

    /// Whether the overlay element swallows map gestures (it never does).
    pub fn stop_event(&self) -> bool {
        self.stop_event
    }
}

/// Vertical popup offset for a marker of `icon_size_pixels` height.
///
/// Fixed empirical factor placing the popup just above the icon, derived
/// from the configured size instead of measured post-layout to avoid a
/// layout-read round trip.
pub fn popup_offset(icon_size_pixels: u32) -> Point {
    Point::new(0.0, -1.2 * icon_size_pixels as f64)
}

/// Popup visibility states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupState {
    /// No point configured or icon element missing. Terminal.
    NoIcon,
    /// Icon present, no popup content. The icon stays clickable but inert.
    IconOnly,
    /// Both overlays exist, popup position unset.
    PopupHidden,
    /// Popup position equals the icon position.
    PopupShown,
}

/// User gestures the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Click on the icon element. The host adapter stops propagation so
    /// the map-level click for the same physical click never fires.
    IconClick,
    /// A drag of the map surface began.
    PanStart,
    /// Click anywhere on the map background.
    MapClick,
}

/// Owns the two overlays and applies the show/hide transition table.
pub struct OverlayController<E: ElementHandle> {
    icon: Option<Rc<RefCell<Overlay<E>>>>,
    popup: Option<Rc<RefCell<Overlay<E>>>>,
    state: PopupState,
}

impl<E: ElementHandle> OverlayController<E> {
    /// Controller for a widget without a point or icon element.
    pub fn without_icon() -> Self {
        Self {
            icon: None,
            popup: None,
            state: PopupState::NoIcon,
        }
    }

    /// Controller for an icon with no popup content.
    pub fn icon_only(icon: Rc<RefCell<Overlay<E>>>) -> Self {
        Self {
            icon: Some(icon),
            popup: None,
            state: PopupState::IconOnly,
        }
    }

    /// Controller for the full icon-plus-popup pair, popup hidden.
    pub fn with_popup(icon: Rc<RefCell<Overlay<E>>>, popup: Rc<RefCell<Overlay<E>>>) -> Self {
        Self {
            icon: Some(icon),
            popup: Some(popup),
            state: PopupState::PopupHidden,
        }
    }

    pub fn state(&self) -> PopupState {
        self.state
    }

    pub fn icon(&self) -> Option<&Rc<RefCell<Overlay<E>>>> {
        self.icon.as_ref()
    }

    pub fn popup(&self) -> Option<&Rc<RefCell<Overlay<E>>>> {
        self.popup.as_ref()
    }

    /// Applies one gesture to the state machine.
    ///
    /// Transitions only exist between `PopupHidden` and `PopupShown`;
    /// `NoIcon` and `IconOnly` are terminal.
    pub fn apply(&mut self, gesture: Gesture) {
        self.state = match (self.state, gesture) {
            (PopupState::PopupHidden | PopupState::PopupShown, Gesture::IconClick) => {
                let anchor = self
                    .icon
                    .as_ref()
                    .and_then(|icon| icon.borrow().position());
                if let Some(popup) = &self.popup {
                    popup.borrow_mut().set_position(anchor);
                }
                PopupState::PopupShown
            }
            (
                PopupState::PopupHidden | PopupState::PopupShown,
                Gesture::PanStart | Gesture::MapClick,
            ) => {
                if let Some(popup) = &self.popup {
                    popup.borrow_mut().set_position(None);
                }
                PopupState::PopupHidden
            }
            (state, _) => state,
        };
    }
}
