//! Progress bar: a ratio rendered as filled and empty cells.

use super::traits::Control;
use crate::layout::{Bounds, Rect};
use crate::terminal::OutputBuffer;

/// Glyphs used to draw the bar.
#[derive(Debug, Clone)]
pub struct ProgressGlyphs {
    /// Glyph for the filled portion.
    pub filled: char,
    /// Glyph for the unfilled portion.
    pub empty: char,
}

impl Default for ProgressGlyphs {
    fn default() -> Self {
        Self {
            filled: '█',
            empty: '░',
        }
    }
}

/// A horizontal progress bar.
///
/// Pure display: no input capabilities. The ratio is clamped to
/// `0.0..=1.0` on every update.
pub struct ProgressBar {
    bounds: Bounds,
    ratio: f32,
    glyphs: ProgressGlyphs,
}

impl ProgressBar {
    /// Create an empty bar with the given bounds.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            ratio: 0.0,
            glyphs: ProgressGlyphs::default(),
        }
    }

    /// Use custom fill glyphs.
    #[must_use]
    pub fn with_glyphs(mut self, glyphs: ProgressGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Current fill ratio.
    pub const fn ratio(&self) -> f32 {
        self.ratio
    }

    /// Set the fill ratio, clamped to `0.0..=1.0`.
    pub fn set_ratio(&mut self, ratio: f32) {
        self.ratio = ratio.clamp(0.0, 1.0);
    }

    /// Cells filled for a given total width.
    fn filled_cells(&self, width: usize) -> usize {
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        let cells = (self.ratio * width as f32).round() as usize;
        cells.min(width)
    }
}

impl Control for ProgressBar {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn render(&self, area: Rect, out: &mut OutputBuffer) {
        #[allow(clippy::cast_sign_loss)]
        let width = area.width().max(0) as usize;
        let filled = self.filled_cells(width);
        let mut bar = String::with_capacity(width * 3);
        for _ in 0..filled {
            bar.push(self.glyphs.filled);
        }
        for _ in filled..width {
            bar.push(self.glyphs.empty);
        }
        for row in area.y1..area.y2 {
            out.place(area.x1, row, &bar);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_is_clamped() {
        let mut bar = ProgressBar::new(Bounds::new(0, 0, 10, 1));
        bar.set_ratio(1.5);
        assert!((bar.ratio() - 1.0).abs() < f32::EPSILON);
        bar.set_ratio(-0.5);
        assert!(bar.ratio().abs() < f32::EPSILON);
    }

    #[test]
    fn test_fill_is_proportional() {
        let mut bar = ProgressBar::new(Bounds::new(0, 0, 10, 1));
        bar.set_ratio(0.5);
        assert_eq!(bar.filled_cells(10), 5);
        bar.set_ratio(0.0);
        assert_eq!(bar.filled_cells(10), 0);
        bar.set_ratio(1.0);
        assert_eq!(bar.filled_cells(10), 10);
    }

    #[test]
    fn test_render_fills_the_row() {
        let mut bar = ProgressBar::new(Bounds::new(0, 0, 4, 1));
        bar.set_ratio(0.5);
        let mut out = OutputBuffer::new();
        bar.render(Rect::new(0, 0, 4, 1), &mut out);
        assert_eq!(
            String::from_utf8(out.as_bytes().to_vec()).unwrap(),
            "\x1b[1;1H██░░"
        );
    }
}
