//! Map handle: the engine-facing surface
//!
//! [`MapHandle`] owns everything the widget attaches to the rendering
//! engine: the tile layer descriptor, the view, overlays, controls and the
//! gesture listener table. It is created by [`composer::compose`] and lives
//! until the host element is detached.

pub mod composer;
pub mod events;
pub mod view;

use crate::dom::ElementHandle;
use crate::layers::tile::TileLayer;
use crate::ui::control::CenterControl;
use crate::ui::overlay::Overlay;
use events::{EventManager, MapEvent};
use std::cell::RefCell;
use std::rc::Rc;
use view::View;

/// Opaque handle to the map surface.
pub struct MapHandle<E: ElementHandle> {
    target: E,
    tile_layer: TileLayer,
    view: View,
    overlays: Vec<Rc<RefCell<Overlay<E>>>>,
    controls: Vec<CenterControl<E>>,
    events: EventManager,
}

impl<E: ElementHandle> MapHandle<E> {
    pub fn new(target: E, tile_layer: TileLayer, view: View) -> Self {
        Self {
            target,
            tile_layer,
            view,
            overlays: Vec::new(),
            controls: Vec::new(),
            events: EventManager::new(),
        }
    }

    /// The host element the map renders into.
    pub fn target(&self) -> &E {
        &self.target
    }

    pub fn tile_layer(&self) -> &TileLayer {
        &self.tile_layer
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    /// Attaches an overlay to the map surface.
    pub fn add_overlay(&mut self, overlay: Rc<RefCell<Overlay<E>>>) {
        self.overlays.push(overlay);
    }

    pub fn overlays(&self) -> &[Rc<RefCell<Overlay<E>>>] {
        &self.overlays
    }

    /// Attaches a control to the map surface.
    pub fn add_control(&mut self, control: CenterControl<E>) {
        self.controls.push(control);
    }

    pub fn controls(&self) -> &[CenterControl<E>] {
        &self.controls
    }

    /// Subscribes to pan-start gestures.
    pub fn on_move_start<F>(&mut self, callback: F)
    where
        F: FnMut(&MapEvent) + 'static,
    {
        self.events.on("movestart", callback);
    }

    /// Subscribes to map clicks.
    pub fn on_click<F>(&mut self, callback: F)
    where
        F: FnMut(&MapEvent) + 'static,
    {
        self.events.on("click", callback);
    }

    /// Dispatches a gesture event from the host adapter.
    pub fn fire(&mut self, event: MapEvent) {
        self.events.fire(event);
    }

    /// Applies the first attached center control, as its button click does.
    pub fn recenter(&mut self) {
        if let Some(center) = self.controls.first().map(CenterControl::center) {
            self.view.set_center(center);
        }
    }
}
