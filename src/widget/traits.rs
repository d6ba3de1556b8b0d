//! The `Control` capability contract.

use crate::input::{Click, Event};
use crate::layout::{Bounds, Rect};
use crate::terminal::OutputBuffer;

/// A positioned leaf element inside a pane.
///
/// Rendering is mandatory; key and click handling are optional
/// capabilities. The focus router asks [`Control::handles_keys`] /
/// [`Control::handles_clicks`] rather than inspecting types, so a
/// control that leaves the defaults in place is simply excluded from
/// that dispatch path.
///
/// Controls hold no reference back to their pane: the compositor
/// resolves the pane's rectangle and passes the control's resolved
/// `area` into [`Control::render`] on every repaint.
pub trait Control {
    /// The control's boundary spec, local to its pane.
    fn bounds(&self) -> Bounds;

    /// Reposition the control within its pane.
    fn set_bounds(&mut self, bounds: Bounds);

    /// Render into the resolved area via the placement primitive.
    ///
    /// The control should only place text within `area`.
    fn render(&self, area: Rect, out: &mut OutputBuffer);

    /// Whether this control takes part in key dispatch and tab cycling.
    fn handles_keys(&self) -> bool {
        false
    }

    /// Consume a key event ([`Event::Char`] or [`Event::Key`]).
    ///
    /// Returns `true` when the control changed and its pane needs a
    /// repaint.
    fn on_key(&mut self, event: &Event) -> bool {
        let _ = event;
        false
    }

    /// Whether this control takes part in mouse dispatch.
    fn handles_clicks(&self) -> bool {
        false
    }

    /// Consume a click whose coordinates fall inside this control.
    ///
    /// `area` is the control's resolved rectangle, the same one the
    /// hit-test used, so the control can map the click's absolute
    /// coordinates into itself. Returns `true` when the control changed
    /// and its pane needs a repaint.
    fn on_click(&mut self, click: &Click, area: Rect) -> bool {
        let _ = (click, area);
        false
    }
}
