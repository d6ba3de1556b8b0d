//! Alert: a prefabricated modal dialog pane.

use super::button::{Button, Presses};
use super::label::Label;
use crate::display::Pane;
use crate::layout::Bounds;

/// Builder for an alert dialog.
///
/// Produces a [`Pane`] holding a message label and an OK button, inset
/// from the screen edges so it floats over whatever is beneath it,
/// plus the button's [`Presses`] handle for dismissal. The host
/// registers the pane, sets it modal, and polls the handle:
///
/// ```rust,ignore
/// let (pane, dismissed) = Alert::new("disk almost full").build();
/// display.add_pane("alert", pane)?;
/// display.set_modal("alert")?;
/// display.set_active("alert", Alert::BUTTON)?;
/// // ... each tick:
/// if dismissed.take() > 0 {
///     display.clear_modal();
///     display.hide("alert")?;
/// }
/// ```
pub struct Alert {
    title: Option<String>,
    message: String,
    button_label: String,
    margin_x: i32,
    margin_y: i32,
}

impl Alert {
    /// Name of the message control inside the built pane.
    pub const MESSAGE: &'static str = "message";
    /// Name of the button control inside the built pane.
    pub const BUTTON: &'static str = "ok";

    /// Start an alert with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
            button_label: "OK".into(),
            margin_x: 10,
            margin_y: 5,
        }
    }

    /// Title the dialog pane.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Relabel the button.
    #[must_use]
    pub fn with_button(mut self, label: impl Into<String>) -> Self {
        self.button_label = label.into();
        self
    }

    /// Inset from the screen edges, in columns and rows.
    #[must_use]
    pub const fn with_margins(mut self, x: i32, y: i32) -> Self {
        self.margin_x = x;
        self.margin_y = y;
        self
    }

    /// Build the dialog pane and the button's press handle.
    pub fn build(self) -> (Pane, Presses) {
        let bounds = Bounds::new(
            self.margin_x,
            self.margin_y,
            -(self.margin_x + 1),
            -(self.margin_y + 1),
        );
        let mut pane = match self.title {
            Some(title) => Pane::new(bounds).with_title(title),
            None => Pane::new(bounds),
        };
        // message fills the body, button sits on the last-but-one row
        pane.add_control(
            Self::MESSAGE,
            Label::new(Bounds::new(1, 1, -2, -3), self.message),
        );
        let button = Button::new(Bounds::new(1, -2, -2, -2), self.button_label);
        let presses = button.presses();
        pane.add_control(Self::BUTTON, button);
        (pane, presses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;
    use crate::widget::Control;

    #[test]
    fn test_build_registers_message_and_button() {
        let (pane, _presses) = Alert::new("hello").build();
        assert_eq!(pane.len(), 2);
        assert_eq!(pane.index_of(Alert::MESSAGE), Some(0));
        assert_eq!(pane.index_of(Alert::BUTTON), Some(1));
        assert!(pane
            .control(Alert::BUTTON)
            .is_some_and(|c| c.handles_keys()));
    }

    #[test]
    fn test_dialog_is_inset_from_the_screen() {
        let (pane, _presses) = Alert::new("hello").with_margins(10, 5).build();
        let area = pane.bounds().resolve(Rect::from_size(80, 24));
        assert_eq!(area, Rect::new(10, 5, 70, 19));
    }

    #[test]
    fn test_button_lands_on_the_last_but_one_row() {
        let (pane, _presses) = Alert::new("hello").build();
        let dialog = pane.bounds().resolve(Rect::from_size(80, 24));
        let button = pane
            .control(Alert::BUTTON)
            .map(|c| c.bounds().resolve(dialog))
            .unwrap();
        assert_eq!(button.y1, dialog.y2 - 2);
        assert_eq!(button.height(), 1);
    }
}
