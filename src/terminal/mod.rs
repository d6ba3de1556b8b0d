//! Terminal module: the raw device and the output assembly buffer.
//!
//! Output is accumulated per frame in an [`OutputBuffer`] and flushed
//! through the [`Driver`] in one syscall; raw mode is held by a scope
//! guard so the previous mode is restored on every exit path.

mod driver;
mod output;

pub use driver::{Driver, RawModeGuard};
pub use output::{sgr, OutputBuffer};
