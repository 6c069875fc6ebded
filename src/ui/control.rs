//! Recenter control
//!
//! A button that snaps the view back to the configured center. Plain
//! composition: a button reference, a target center and one click
//! behavior; only one behavior is ever required, so there is no control
//! hierarchy.

use crate::core::geo::Point;
use crate::dom::ElementHandle;

/// Optional recenter control. Both elements are assumed hidden by default
/// styling until the widget confirms the behavior is wired, so attaching
/// makes them visible.
#[derive(Debug, Clone)]
pub struct CenterControl<E: ElementHandle> {
    element: E,
    button: E,
    center: Point,
}

impl<E: ElementHandle> CenterControl<E> {
    pub fn new(element: E, button: E, center: Point) -> Self {
        element.set_title("Center");
        element.set_style("display", "block");
        button.set_style("display", "block");

        Self {
            element,
            button,
            center,
        }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn button(&self) -> &E {
        &self.button
    }

    /// The center a click re-applies.
    pub fn center(&self) -> Point {
        self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::MemoryPage;

    #[test]
    fn test_attach_unhides_elements() {
        let page = MemoryPage::default();
        let element = page.insert_element("center-control");
        let button = page.insert_element("center-button");

        let control = CenterControl::new(element.clone(), button.clone(), Point::new(1.0, 2.0));

        assert_eq!(element.style("display").as_deref(), Some("block"));
        assert_eq!(button.style("display").as_deref(), Some("block"));
        assert_eq!(element.title(), "Center");
        assert_eq!(control.center(), Point::new(1.0, 2.0));
    }
}
