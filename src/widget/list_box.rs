//! List box: a scrollable, selectable list of strings.

use super::fit;
use super::traits::Control;
use crate::input::{Click, Event, Key, MouseButton};
use crate::layout::{Bounds, Rect};
use crate::terminal::{sgr, OutputBuffer};

/// Rows jumped by PageUp/PageDown.
const PAGE_STEP: usize = 10;

/// A vertical list with a single selection.
///
/// Arrow keys move the selection, PageUp/PageDown jump, Home/End go to
/// the edges, and a left click selects the row under it. The visible
/// window follows the selection; the selected row is drawn with an SGR
/// style (reverse video by default).
pub struct ListBox {
    bounds: Bounds,
    items: Vec<String>,
    selected: usize,
    selected_style: String,
}

impl ListBox {
    /// Create a list box with the given bounds and items.
    pub fn new(bounds: Bounds, items: Vec<String>) -> Self {
        Self {
            bounds,
            items,
            selected: 0,
            selected_style: "7".into(),
        }
    }

    /// Use custom SGR codes for the selected row.
    #[must_use]
    pub fn with_selected_style(mut self, codes: impl Into<String>) -> Self {
        self.selected_style = codes.into();
        self
    }

    /// The items.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Replace the items, keeping the selection in range.
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }

    /// Index of the selected item, if the list is non-empty.
    pub fn selected(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.selected)
    }

    /// The selected item, if the list is non-empty.
    pub fn selected_item(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }

    /// Move the selection, clamped to the list.
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.items.len().saturating_sub(1));
    }

    /// First visible row for a window of `height` rows: the window
    /// follows the selection, keeping it on the last row when the
    /// selection runs past the bottom.
    fn view_start(&self, height: usize) -> usize {
        if height == 0 || self.selected < height {
            0
        } else {
            self.selected + 1 - height
        }
    }

    fn move_selection(&mut self, delta: isize) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let last = self.items.len() - 1;
        let target = self
            .selected
            .saturating_add_signed(delta)
            .min(last);
        if target == self.selected {
            return false;
        }
        self.selected = target;
        true
    }
}

impl Control for ListBox {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn render(&self, area: Rect, out: &mut OutputBuffer) {
        #[allow(clippy::cast_sign_loss)]
        let width = area.width().max(0) as usize;
        #[allow(clippy::cast_sign_loss)]
        let height = area.height().max(0) as usize;
        let start = self.view_start(height);
        for (row, index) in (start..self.items.len()).take(height).enumerate() {
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let y = area.y1 + row as i32;
            let visible = fit(&self.items[index], width);
            if index == self.selected {
                out.place(
                    area.x1,
                    y,
                    &format!("{}{visible}{}", sgr(&self.selected_style), sgr("0")),
                );
            } else {
                out.place(area.x1, y, visible);
            }
        }
    }

    fn handles_keys(&self) -> bool {
        true
    }

    #[allow(clippy::cast_possible_wrap)]
    fn on_key(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(Key::Up) => self.move_selection(-1),
            Event::Key(Key::Down) => self.move_selection(1),
            Event::Key(Key::PageUp) => self.move_selection(-(PAGE_STEP as isize)),
            Event::Key(Key::PageDown) => self.move_selection(PAGE_STEP as isize),
            Event::Key(Key::Home) => self.move_selection(isize::MIN),
            Event::Key(Key::End) => self.move_selection(isize::MAX),
            _ => false,
        }
    }

    fn handles_clicks(&self) -> bool {
        true
    }

    fn on_click(&mut self, click: &Click, area: Rect) -> bool {
        if click.button != MouseButton::Left {
            return false;
        }
        #[allow(clippy::cast_sign_loss)]
        let height = area.height().max(0) as usize;
        #[allow(clippy::cast_sign_loss)]
        let row = (click.y - area.y1).max(0) as usize;
        let index = self.view_start(height) + row;
        if index < self.items.len() && index != self.selected {
            self.selected = index;
            return true;
        }
        false
    }
}
