//! Button: a press-recording control.

use super::fit;
use super::traits::Control;
use crate::input::{Click, Event, MouseButton};
use crate::layout::{Bounds, Rect};
use crate::terminal::{sgr, OutputBuffer};
use std::cell::Cell;
use std::rc::Rc;

/// Shared handle to a button's press counter.
///
/// Once a button is boxed into a pane it is only reachable as a
/// `dyn Control`, so presses are observed through this handle instead:
/// clone it out before adding the button, poll it after ticks.
#[derive(Clone)]
pub struct Presses(Rc<Cell<u32>>);

impl Presses {
    /// Presses recorded since the last call, resetting the count.
    pub fn take(&self) -> u32 {
        self.0.replace(0)
    }

    /// Presses recorded since the last [`Presses::take`].
    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

/// A clickable, key-activatable button.
///
/// There are no callbacks: Enter or space presses the focused button, a
/// left click presses it directly, and the host consumes presses
/// through the [`Presses`] handle.
///
/// # Example
///
/// ```
/// use mullion::widget::{Button, Control};
/// use mullion::{Bounds, Event};
///
/// let mut button = Button::new(Bounds::new(0, 0, 10, 1), "OK");
/// let presses = button.presses();
/// button.on_key(&Event::Char(b'\r'));
/// assert_eq!(presses.take(), 1);
/// ```
pub struct Button {
    bounds: Bounds,
    label: String,
    style: Option<String>,
    presses: Rc<Cell<u32>>,
}

impl Button {
    /// Create a button with the given bounds and label.
    pub fn new(bounds: Bounds, label: impl Into<String>) -> Self {
        Self {
            bounds,
            label: label.into(),
            style: None,
            presses: Rc::new(Cell::new(0)),
        }
    }

    /// Apply SGR codes around the rendered button.
    #[must_use]
    pub fn with_style(mut self, codes: impl Into<String>) -> Self {
        self.style = Some(codes.into());
        self
    }

    /// The button's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// A shared handle to the press counter.
    pub fn presses(&self) -> Presses {
        Presses(Rc::clone(&self.presses))
    }

    fn press(&self) {
        self.presses.set(self.presses.get() + 1);
    }
}

impl Control for Button {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn render(&self, area: Rect, out: &mut OutputBuffer) {
        #[allow(clippy::cast_sign_loss)]
        let width = area.width().max(0) as usize;
        let chrome = format!("[ {} ]", self.label);
        let visible = fit(&chrome, width);
        match &self.style {
            Some(codes) => out.place(
                area.x1,
                area.y1,
                &format!("{}{visible}{}", sgr(codes), sgr("0")),
            ),
            None => out.place(area.x1, area.y1, visible),
        }
    }

    fn handles_keys(&self) -> bool {
        true
    }

    fn on_key(&mut self, event: &Event) -> bool {
        match event {
            // CR (raw-mode Enter), LF, or space all press
            Event::Char(b'\r' | b'\n' | b' ') => {
                self.press();
                true
            }
            _ => false,
        }
    }

    fn handles_clicks(&self) -> bool {
        true
    }

    fn on_click(&mut self, click: &Click, _area: Rect) -> bool {
        if click.button == MouseButton::Left {
            self.press();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Modifiers;

    fn button() -> Button {
        Button::new(Bounds::new(0, 0, 10, 1), "OK")
    }

    #[test]
    fn test_enter_and_space_press() {
        let mut b = button();
        let presses = b.presses();
        assert!(b.on_key(&Event::Char(b'\r')));
        assert!(b.on_key(&Event::Char(b' ')));
        assert!(!b.on_key(&Event::Char(b'x')));
        assert_eq!(presses.take(), 2);
        assert_eq!(presses.take(), 0);
    }

    #[test]
    fn test_left_click_presses() {
        let mut b = button();
        let presses = b.presses();
        let area = Rect::new(0, 0, 10, 1);
        let left = Click {
            button: MouseButton::Left,
            modifiers: Modifiers::empty(),
            x: 1,
            y: 0,
        };
        let right = Click {
            button: MouseButton::Right,
            ..left
        };
        assert!(b.on_click(&left, area));
        assert!(!b.on_click(&right, area));
        assert_eq!(presses.get(), 1);
    }

    #[test]
    fn test_render_brackets_the_label() {
        let b = button();
        let mut out = OutputBuffer::new();
        b.render(Rect::new(3, 2, 13, 3), &mut out);
        assert_eq!(out.as_bytes(), b"\x1b[3;4H[ OK ]");
    }
}
