//! Driver: ownership of the physical terminal.
//!
//! The driver knows nothing about panes or controls. It enters and
//! leaves raw mode, reports the terminal size, and flushes assembled
//! frames to its writer. Mode restoration is tied to a scope guard so
//! it happens on every exit path, panics included.

use super::output::OutputBuffer;
use crossterm::terminal;
use std::io::{self, Stdout, Write};
use tracing::warn;

/// Size reported when the terminal refuses to tell us (cols, rows).
const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// RAII guard for raw mode.
///
/// Raw mode is enabled on acquisition and disabled exactly once when
/// the guard drops, however the scope is left. Restoration failure is
/// logged and swallowed: at teardown there is nobody left to recover.
pub struct RawModeGuard {
    active: bool,
    // Raw mode is a property of the calling thread's terminal session.
    _marker: std::marker::PhantomData<*const ()>,
}

impl RawModeGuard {
    /// Enable raw mode on the controlling terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal rejects the mode change.
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self {
            active: true,
            _marker: std::marker::PhantomData,
        })
    }

    /// Check if raw mode is currently held by this guard.
    pub const fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            if let Err(e) = terminal::disable_raw_mode() {
                warn!(error = %e, "failed to restore terminal mode");
            }
        }
    }
}

/// Owner of the output side of the terminal.
///
/// Generic over the writer so tests and embedders can capture frames in
/// memory via [`Driver::detached`]; [`Driver::stdout`] drives the real
/// terminal in raw mode.
pub struct Driver<W: Write> {
    writer: W,
    raw: Option<RawModeGuard>,
    fixed_size: Option<(u16, u16)>,
}

impl Driver<Stdout> {
    /// Take over the controlling terminal: enter raw mode, hide the
    /// cursor, and clear the screen.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled or the initial
    /// clear cannot be written.
    pub fn stdout() -> io::Result<Self> {
        let raw = RawModeGuard::acquire()?;
        let mut driver = Self {
            writer: io::stdout(),
            raw: Some(raw),
            fixed_size: None,
        };
        let mut out = OutputBuffer::new();
        out.cursor_hide();
        out.clear_screen();
        out.cursor_home();
        driver.flush_frame(&mut out)?;
        Ok(driver)
    }
}

impl<W: Write> Driver<W> {
    /// Create a driver over an arbitrary writer with a fixed size.
    ///
    /// No terminal mode is touched; intended for tests and embedders
    /// that manage the device themselves.
    pub const fn detached(writer: W, width: u16, height: u16) -> Self {
        Self {
            writer,
            raw: None,
            fixed_size: Some((width, height)),
        }
    }

    /// Report the terminal size as (columns, rows).
    ///
    /// A failed query is not an error: the standard 80x24 is assumed.
    pub fn size(&self) -> (u16, u16) {
        self.fixed_size
            .unwrap_or_else(|| terminal::size().unwrap_or(FALLBACK_SIZE))
    }

    /// Change the reported size of a detached driver.
    ///
    /// No-op for a real terminal, whose size only the user controls.
    pub fn set_size(&mut self, width: u16, height: u16) {
        if self.fixed_size.is_some() {
            self.fixed_size = Some((width, height));
        }
    }

    /// Check whether this driver holds the real terminal in raw mode.
    pub const fn is_raw(&self) -> bool {
        self.raw.is_some()
    }

    /// Write an assembled frame in a single syscall and clear the
    /// buffer for reuse.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_frame(&mut self, out: &mut OutputBuffer) -> io::Result<()> {
        out.flush_to(&mut self.writer)?;
        out.clear();
        Ok(())
    }

    /// Borrow the writer (test inspection of captured frames).
    pub const fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W: Write> Drop for Driver<W> {
    fn drop(&mut self) {
        // Leave a usable screen behind; the guard restores the mode
        // itself right after. Best effort on both counts.
        if self.raw.is_some() {
            let mut out = OutputBuffer::new();
            out.clear_screen();
            out.cursor_home();
            out.cursor_show();
            if let Err(e) = self.flush_frame(&mut out) {
                warn!(error = %e, "failed to reset screen at teardown");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_reports_fixed_size() {
        let driver = Driver::detached(Vec::new(), 40, 12);
        assert_eq!(driver.size(), (40, 12));
        assert!(!driver.is_raw());
    }

    #[test]
    fn test_detached_size_is_settable() {
        let mut driver = Driver::detached(Vec::new(), 40, 12);
        driver.set_size(120, 50);
        assert_eq!(driver.size(), (120, 50));
    }

    #[test]
    fn test_flush_frame_writes_and_resets() {
        let mut driver = Driver::detached(Vec::new(), 80, 24);
        let mut out = OutputBuffer::new();
        out.place(0, 0, "hi");
        driver.flush_frame(&mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(driver.writer().as_slice(), b"\x1b[1;1Hhi");
    }
}
