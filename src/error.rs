//! Error types for layout setup and terminal I/O.
//!
//! Configuration mistakes (unknown names, impossible geometry) surface
//! immediately at the call that made them; transient input conditions
//! never reach this type.

use crate::layout::Rect;

/// Errors surfaced by the engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A pane name was referenced that is not registered.
    #[error("unknown pane {0:?}")]
    UnknownPane(String),

    /// A control name was referenced that its pane does not contain.
    #[error("unknown control {control:?} in pane {pane:?}")]
    UnknownControl {
        /// The pane that was searched.
        pane: String,
        /// The missing control name.
        control: String,
    },

    /// A pane was registered under a name that is already taken.
    #[error("pane {0:?} already registered")]
    DuplicatePane(String),

    /// Bounds resolved to a negative extent.
    #[error("bounds resolve to a negative extent: {0:?}")]
    InvalidBounds(Rect),

    /// Terminal output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
