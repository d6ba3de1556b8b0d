//! Input module: decoding raw terminal bytes into events.
//!
//! The [`Decoder`] is a persistent state machine: it may be fed one
//! byte or a thousand at a time, and a sequence that arrives split
//! across reads decodes the same as one that arrives whole.

mod decoder;
mod event;

pub use decoder::Decoder;
pub use event::{Click, Cycle, Event, Key, Modifiers, MouseButton};
