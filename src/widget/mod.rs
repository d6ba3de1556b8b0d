//! Widget module: the control contract and the stock controls.
//!
//! The engine only ever sees the [`Control`] trait; everything else in
//! here is a convenience implementation of it. Controls are plain state
//! machines: they render into a resolved area on request and report
//! whether an input event changed them, and the display decides what to
//! repaint.

mod alert;
mod button;
mod label;
mod list_box;
mod progress_bar;
mod text_input;
mod traits;

pub use alert::Alert;
pub use button::{Button, Presses};
pub use label::Label;
pub use list_box::ListBox;
pub use progress_bar::ProgressBar;
pub use text_input::TextInput;
pub use traits::Control;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Longest prefix of `text` that fits in `max_width` display columns.
///
/// Grapheme-aware, so a wide character never straddles the cut.
pub fn fit(text: &str, max_width: usize) -> &str {
    if text.width() <= max_width {
        return text;
    }
    let mut used = 0;
    let mut end = 0;
    for (offset, grapheme) in text.grapheme_indices(true) {
        let width = grapheme.width();
        if used + width > max_width {
            break;
        }
        used += width;
        end = offset + grapheme.len();
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_passes_short_text_through() {
        assert_eq!(fit("hello", 10), "hello");
        assert_eq!(fit("hello", 5), "hello");
    }

    #[test]
    fn test_fit_truncates_by_display_width() {
        assert_eq!(fit("hello", 3), "hel");
        assert_eq!(fit("", 3), "");
        assert_eq!(fit("hello", 0), "");
    }

    #[test]
    fn test_fit_never_splits_a_wide_grapheme() {
        // each CJK glyph is two columns wide
        assert_eq!(fit("日本語", 5), "日本");
        assert_eq!(fit("日本語", 1), "");
    }
}
