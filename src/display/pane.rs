//! Pane: a named rectangular container of controls.

use crate::error::{Error, Result};
use crate::input::Click;
use crate::layout::{Bounds, Rect};
use crate::terminal::OutputBuffer;
use crate::widget::{fit, Control};

/// A visible (or hidden) rectangular container owning an ordered,
/// keyed collection of controls.
///
/// Insertion order is both the z-order for rendering and the default
/// tab order. The pane's own bounds are local to the display's
/// full-screen rectangle, so a pane is positioned exactly like a
/// control whose parent is the screen.
pub struct Pane {
    bounds: Bounds,
    controls: Vec<(String, Box<dyn Control>)>,
    visible: bool,
    title: Option<String>,
}

impl Pane {
    /// Create a visible, untitled pane with the given bounds.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            controls: Vec::new(),
            visible: true,
            title: None,
        }
    }

    /// Set a title, drawn over the pane's top row.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Start the pane hidden; it will not render or take clicks until
    /// shown through the display.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// The pane's boundary spec, local to the screen.
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Reposition the pane.
    pub const fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Whether the pane currently renders and takes clicks.
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) const fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// The pane's title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Add a control under a name, at the end of the z/tab order.
    ///
    /// Re-using a name replaces that control in place, keeping its
    /// position in the order.
    pub fn add_control(&mut self, name: impl Into<String>, control: impl Control + 'static) {
        let name = name.into();
        let boxed: Box<dyn Control> = Box::new(control);
        match self.controls.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = boxed,
            None => self.controls.push((name, boxed)),
        }
    }

    /// Remove a control, handing its ownership back to the caller.
    ///
    /// This is how a control moves between panes: remove here, add
    /// there.
    pub fn remove_control(&mut self, name: &str) -> Option<Box<dyn Control>> {
        let index = self.index_of(name)?;
        Some(self.controls.remove(index).1)
    }

    /// Number of controls in the pane.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Whether the pane has no controls.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Position of a control in the z/tab order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.controls.iter().position(|(n, _)| n == name)
    }

    /// Name of the control at an order position.
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.controls.get(index).map(|(n, _)| n.as_str())
    }

    /// Borrow a control by name.
    pub fn control(&self, name: &str) -> Option<&dyn Control> {
        self.controls
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.as_ref())
    }

    /// Mutably borrow a control by name.
    pub fn control_mut(&mut self, name: &str) -> Option<&mut (dyn Control + 'static)> {
        self.controls
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.as_mut())
    }

    /// Borrow a control by order position.
    pub fn control_at(&self, index: usize) -> Option<&dyn Control> {
        self.controls.get(index).map(|(_, c)| c.as_ref())
    }

    /// Render the pane: background fill, title, then every control in
    /// insertion order.
    pub(crate) fn redraw(&self, screen: Rect, out: &mut OutputBuffer) -> Result<()> {
        let area = self.bounds.resolve(screen);
        if area.width() < 0 || area.height() < 0 {
            return Err(Error::InvalidBounds(area));
        }

        #[allow(clippy::cast_sign_loss)]
        let blank = " ".repeat(area.width().max(0) as usize);
        for row in area.y1..area.y2 {
            out.place(area.x1, row, &blank);
        }

        if let Some(title) = &self.title {
            #[allow(clippy::cast_sign_loss)]
            out.place(area.x1, area.y1, fit(title, area.width().max(0) as usize));
        }

        for (_, control) in &self.controls {
            let control_area = control.bounds().resolve(area);
            if control_area.width() < 0 || control_area.height() < 0 {
                return Err(Error::InvalidBounds(control_area));
            }
            control.render(control_area, out);
        }
        Ok(())
    }

    /// Deliver a click to the topmost click-capable control under it.
    ///
    /// Returns `true` when a control consumed the click and changed.
    pub(crate) fn route_click(&mut self, area: Rect, click: &Click) -> bool {
        for (_, control) in self.controls.iter_mut().rev() {
            if !control.handles_clicks() {
                continue;
            }
            let control_area = control.bounds().resolve(area);
            if control_area.contains(click.x, click.y) {
                return control.on_click(click, control_area);
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Event;

    struct Dot {
        bounds: Bounds,
        keys: bool,
    }

    impl Control for Dot {
        fn bounds(&self) -> Bounds {
            self.bounds
        }
        fn set_bounds(&mut self, bounds: Bounds) {
            self.bounds = bounds;
        }
        fn render(&self, area: Rect, out: &mut OutputBuffer) {
            out.place(area.x1, area.y1, ".");
        }
        fn handles_keys(&self) -> bool {
            self.keys
        }
        fn on_key(&mut self, _event: &Event) -> bool {
            true
        }
    }

    fn dot() -> Dot {
        Dot {
            bounds: Bounds::new(0, 0, 1, 1),
            keys: false,
        }
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut pane = Pane::new(Bounds::FULL);
        pane.add_control("a", dot());
        pane.add_control("b", dot());
        pane.add_control("c", dot());
        assert_eq!(pane.index_of("b"), Some(1));
        assert_eq!(pane.name_at(2), Some("c"));
        assert_eq!(pane.len(), 3);
    }

    #[test]
    fn test_replacing_a_control_keeps_its_position() {
        let mut pane = Pane::new(Bounds::FULL);
        pane.add_control("a", dot());
        pane.add_control("b", dot());
        pane.add_control(
            "a",
            Dot {
                bounds: Bounds::new(0, 0, 1, 1),
                keys: true,
            },
        );
        assert_eq!(pane.index_of("a"), Some(0));
        assert_eq!(pane.len(), 2);
        assert!(pane.control("a").is_some_and(|c| c.handles_keys()));
    }

    #[test]
    fn test_remove_control_hands_back_ownership() {
        let mut pane = Pane::new(Bounds::FULL);
        pane.add_control("a", dot());
        let taken = pane.remove_control("a");
        assert!(taken.is_some());
        assert!(pane.is_empty());
        assert!(pane.remove_control("a").is_none());
    }

    #[test]
    fn test_redraw_rejects_negative_extent() {
        let screen = Rect::from_size(80, 24);
        let pane = Pane::new(Bounds::new(10, 0, 5, 5));
        let mut out = OutputBuffer::new();
        assert!(matches!(
            pane.redraw(screen, &mut out),
            Err(Error::InvalidBounds(_))
        ));
    }

    #[test]
    fn test_redraw_fills_and_titles() {
        let screen = Rect::from_size(80, 24);
        let pane = Pane::new(Bounds::new(0, 0, 4, 2)).with_title("hi");
        let mut out = OutputBuffer::new();
        pane.redraw(screen, &mut out).unwrap();
        let bytes = String::from_utf8(out.as_bytes().to_vec()).unwrap();
        // two blank rows then the title over the first
        assert_eq!(bytes, "\x1b[1;1H    \x1b[2;1H    \x1b[1;1Hhi");
    }
}
