//! Display module: panes, dirty tracking, compositing, and focus.
//!
//! The [`Display`] owns everything with session lifetime: the terminal
//! driver, the input decoder, the panes (insertion order = z-order),
//! the tri-state dirty set, the active-control path, and the optional
//! modal pane. One call to [`Display::handle`] is one tick of the
//! engine.

#[allow(clippy::module_inception)]
mod display;
mod focus;
mod pane;

pub use display::{Dirty, Display};
pub use pane::Pane;
