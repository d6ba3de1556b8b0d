//! # Mullion
//!
//! A pane-based terminal UI engine with incremental repaint.
//!
//! Mullion owns the raw terminal, decodes keyboard and mouse input from
//! the raw byte stream, maintains a set of positioned (possibly
//! overlapping) panes full of controls, and repaints only the parts of
//! the screen that changed.
//!
//! ## Core Concepts
//!
//! - **Relative geometry**: boundaries are signed; negative values
//!   anchor to the parent's far edge, so `-1` means "last row/column"
//! - **Resumable input decoding**: a byte-at-a-time CSI/SS3 state
//!   machine that survives escape sequences split across reads
//! - **Dirty tracking**: clean / fully-dirty / per-pane dirty set, so a
//!   tick that changed nothing writes nothing
//! - **Focus routing**: key events go to the active control only; tab
//!   cycles focus; mouse clicks hit-test panes in z-order, with modal
//!   capture
//!
//! ## Example
//!
//! ```rust,ignore
//! use mullion::{Bounds, Display, Pane};
//! use mullion::widget::Label;
//!
//! // the reader should be non-blocking; a raw fd set up by the host
//! let mut display = Display::stdout(input)?;
//! let mut pane = Pane::new(Bounds::FULL);
//! pane.add_control("greeting", Label::new(Bounds::new(1, 1, -2, 2), "hello"));
//! display.add_pane("main", pane)?;
//! loop {
//!     display.handle()?; // one tick: drain input, route, repaint dirty panes
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod display;
pub mod error;
pub mod input;
pub mod layout;
pub mod terminal;
pub mod widget;

// Re-exports for convenience
pub use display::{Dirty, Display, Pane};
pub use error::{Error, Result};
pub use input::{Click, Cycle, Decoder, Event, Key, Modifiers, MouseButton};
pub use layout::{Bounds, Rect};
pub use terminal::{Driver, OutputBuffer};
pub use widget::Control;
