//! Label: static text, one line per row.

use super::traits::Control;
use super::fit;
use crate::layout::{Bounds, Rect};
use crate::terminal::{sgr, OutputBuffer};

/// A static text control.
///
/// Text is split on newlines and placed row by row, each line truncated
/// to the resolved width. An optional SGR style string is passed
/// through opaquely around every line.
pub struct Label {
    bounds: Bounds,
    text: String,
    style: Option<String>,
}

impl Label {
    /// Create a label with the given bounds and text.
    pub fn new(bounds: Bounds, text: impl Into<String>) -> Self {
        Self {
            bounds,
            text: text.into(),
            style: None,
        }
    }

    /// Apply SGR codes (e.g. `"1;31"`) around the text.
    #[must_use]
    pub fn with_style(mut self, codes: impl Into<String>) -> Self {
        self.style = Some(codes.into());
        self
    }

    /// The label's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text. The pane repaints it on the next dirty tick.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Control for Label {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn render(&self, area: Rect, out: &mut OutputBuffer) {
        #[allow(clippy::cast_sign_loss)]
        let width = area.width().max(0) as usize;
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        for (row, line) in self.text.lines().take(area.height().max(0) as usize).enumerate() {
            let visible = fit(line, width);
            match &self.style {
                Some(codes) => out.place(
                    area.x1,
                    area.y1 + row as i32,
                    &format!("{}{visible}{}", sgr(codes), sgr("0")),
                ),
                None => out.place(area.x1, area.y1 + row as i32, visible),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_places_each_line() {
        let label = Label::new(Bounds::new(0, 0, 10, 2), "ab\ncd");
        let mut out = OutputBuffer::new();
        label.render(Rect::new(2, 1, 12, 3), &mut out);
        assert_eq!(out.as_bytes(), b"\x1b[2;3Hab\x1b[3;3Hcd");
    }

    #[test]
    fn test_render_truncates_to_area() {
        let label = Label::new(Bounds::FULL, "abcdef\nsecond\nthird");
        let mut out = OutputBuffer::new();
        // area is 3 wide and 2 tall: lines clipped, third row dropped
        label.render(Rect::new(0, 0, 3, 2), &mut out);
        assert_eq!(out.as_bytes(), b"\x1b[1;1Habc\x1b[2;1Hsec");
    }

    #[test]
    fn test_style_wraps_every_line() {
        let label = Label::new(Bounds::FULL, "hi").with_style("1;31");
        let mut out = OutputBuffer::new();
        label.render(Rect::new(0, 0, 10, 1), &mut out);
        assert_eq!(out.as_bytes(), b"\x1b[1;1H\x1b[1;31mhi\x1b[0m");
    }

    #[test]
    fn test_label_has_no_input_capabilities() {
        let label = Label::new(Bounds::FULL, "hi");
        assert!(!label.handles_keys());
        assert!(!label.handles_clicks());
    }
}
