//! Map gesture events
//!
//! Everything after setup is event-driven: the host adapter feeds gestures
//! in, listeners registered on the map react. All of it runs on the host
//! page's single UI event loop, so callbacks are plain boxed closures and
//! may capture `Rc<RefCell<..>>` state.

use fxhash::FxHashMap as HashMap;

/// Gesture events emitted by the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapEvent {
    /// A drag of the map surface began.
    MoveStart,
    /// A click anywhere on the map, including empty background.
    Click,
}

impl MapEvent {
    /// String key the listener table is indexed by.
    pub fn kind(&self) -> &'static str {
        match self {
            MapEvent::MoveStart => "movestart",
            MapEvent::Click => "click",
        }
    }
}

/// Event listener callback type
pub type EventCallback = Box<dyn FnMut(&MapEvent)>;

/// Listener registry for map events
#[derive(Default)]
pub struct EventManager {
    listeners: HashMap<String, Vec<EventCallback>>,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for one event kind (`"movestart"`, `"click"`).
    pub fn on<F>(&mut self, kind: &str, callback: F)
    where
        F: FnMut(&MapEvent) + 'static,
    {
        self.listeners
            .entry(kind.to_string())
            .or_default()
            .push(Box::new(callback));
    }

    /// Dispatches an event to every listener of its kind, synchronously.
    pub fn fire(&mut self, event: MapEvent) {
        if let Some(callbacks) = self.listeners.get_mut(event.kind()) {
            for callback in callbacks {
                callback(&event);
            }
        }
    }

    pub fn listener_count(&self, kind: &str) -> usize {
        self.listeners.get(kind).map_or(0, Vec::len)
    }
}
