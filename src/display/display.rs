//! Display: top-level orchestrator and compositor.

use super::pane::Pane;
use crate::error::{Error, Result};
use crate::input::{Decoder, Event};
use crate::layout::Rect;
use crate::terminal::{Driver, OutputBuffer};
use std::io::{self, Read, Stdout, Write};
use tracing::{debug, trace};

/// Which parts of the display need repainting before the next flush.
///
/// Escalation is one-directional: a named set can grow or become
/// [`Dirty::All`], but full dirtiness is never reduced back to a subset
/// within a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dirty {
    /// Nothing to repaint; a tick returns without writing.
    Clean,
    /// Repaint everything, clearing the screen first.
    All,
    /// Repaint exactly the named panes.
    Panes(Vec<String>),
}

/// The top-level owner of panes, input decoding, focus, and repaint.
///
/// One `Display` exists per session. It is poll-driven: the host calls
/// [`Display::handle`] in its own loop, and each call performs one
/// bounded tick (drain input, route events, repaint what is dirty).
pub struct Display<R: Read, W: Write> {
    driver: Driver<W>,
    reader: R,
    decoder: Decoder,
    out: OutputBuffer,
    panes: Vec<(String, Pane)>,
    dirty: Dirty,
    /// Active control as a (pane, control) name path. The active pane
    /// is derived from the path, so the two can never disagree.
    pub(super) active: Option<(String, String)>,
    pub(super) modal: Option<String>,
    width: u16,
    height: u16,
}

impl<R: Read> Display<R, Stdout> {
    /// Construct a display that owns the controlling terminal.
    ///
    /// Enters raw mode immediately; the previous mode is restored when
    /// the display is dropped, however that happens. The reader should
    /// be non-blocking -- a read that would block ends the tick's input
    /// work, it must not stall the loop.
    pub fn stdout(reader: R) -> Result<Self> {
        Ok(Self::new(Driver::stdout()?, reader))
    }
}

impl<R: Read, W: Write> Display<R, W> {
    /// Construct a display over an explicit driver and input stream.
    pub fn new(driver: Driver<W>, reader: R) -> Self {
        let (width, height) = driver.size();
        Self {
            driver,
            reader,
            decoder: Decoder::new(),
            out: OutputBuffer::new(),
            panes: Vec::new(),
            dirty: Dirty::All,
            active: None,
            modal: None,
            width,
            height,
        }
    }

    /// Terminal width in columns, as of the last tick.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Terminal height in rows, as of the last tick.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The full-screen rectangle panes resolve against.
    pub const fn screen(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Current dirty state.
    pub const fn dirty(&self) -> &Dirty {
        &self.dirty
    }

    /// Register a pane under a name, on top of the existing z-order.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicatePane`] if the name is taken.
    pub fn add_pane(&mut self, name: impl Into<String>, pane: Pane) -> Result<()> {
        let name = name.into();
        if self.find(&name).is_some() {
            return Err(Error::DuplicatePane(name));
        }
        self.panes.push((name.clone(), pane));
        self.mark_dirty(&name)
    }

    /// Remove a pane and everything it owns.
    ///
    /// Clears the active control and modal if they pointed into it;
    /// the vacated region forces a full repaint.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownPane`] if no pane has this name.
    pub fn remove_pane(&mut self, name: &str) -> Result<Pane> {
        let index = self.find(name).ok_or_else(|| Error::UnknownPane(name.into()))?;
        if self.active.as_ref().is_some_and(|(p, _)| p == name) {
            self.active = None;
        }
        if self.modal.as_deref() == Some(name) {
            self.modal = None;
        }
        let (_, pane) = self.panes.remove(index);
        self.mark_all_dirty();
        Ok(pane)
    }

    /// Borrow a pane by name.
    pub fn pane(&self, name: &str) -> Option<&Pane> {
        self.find(name).map(|i| &self.panes[i].1)
    }

    /// Mutably borrow a pane by name.
    ///
    /// Mutating a pane does not mark it dirty; call
    /// [`Display::mark_dirty`] when the change should show.
    pub fn pane_mut(&mut self, name: &str) -> Option<&mut Pane> {
        self.find(name).map(|i| &mut self.panes[i].1)
    }

    /// Names of all panes in z-order (bottom first).
    pub fn pane_names(&self) -> impl Iterator<Item = &str> {
        self.panes.iter().map(|(n, _)| n.as_str())
    }

    /// Mark a single pane for repaint on the next tick.
    ///
    /// A no-op while the whole display is already dirty.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownPane`] if no pane has this name.
    pub fn mark_dirty(&mut self, name: &str) -> Result<()> {
        if self.find(name).is_none() {
            return Err(Error::UnknownPane(name.into()));
        }
        match &mut self.dirty {
            Dirty::All => {}
            Dirty::Clean => self.dirty = Dirty::Panes(vec![name.into()]),
            Dirty::Panes(set) => {
                if !set.iter().any(|n| n == name) {
                    set.push(name.into());
                }
            }
        }
        Ok(())
    }

    /// Mark the entire display for repaint on the next tick.
    pub fn mark_all_dirty(&mut self) {
        self.dirty = Dirty::All;
    }

    /// Set the active control by path.
    ///
    /// Key events are delivered to this control only; the cursor
    /// follows it. Both the previously and newly active panes are
    /// marked for repaint.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownPane`] / [`Error::UnknownControl`] if the path
    /// does not name an existing control.
    pub fn set_active(&mut self, pane: &str, control: &str) -> Result<()> {
        let owner = self
            .pane(pane)
            .ok_or_else(|| Error::UnknownPane(pane.into()))?;
        if owner.index_of(control).is_none() {
            return Err(Error::UnknownControl {
                pane: pane.into(),
                control: control.into(),
            });
        }
        if let Some((old_pane, _)) = self.active.take() {
            let _ = self.mark_dirty(&old_pane);
        }
        self.active = Some((pane.into(), control.into()));
        self.mark_dirty(pane)
    }

    /// Clear the active control; key events are dropped until a new
    /// one is set and the cursor is hidden.
    pub fn clear_active(&mut self) {
        if let Some((old_pane, _)) = self.active.take() {
            let _ = self.mark_dirty(&old_pane);
        }
    }

    /// The active control's (pane, control) path.
    pub fn active(&self) -> Option<(&str, &str)> {
        self.active
            .as_ref()
            .map(|(p, c)| (p.as_str(), c.as_str()))
    }

    /// Make a pane the modal overlay: it alone receives mouse routing
    /// and is always composited on top.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownPane`] if no pane has this name.
    pub fn set_modal(&mut self, name: &str) -> Result<()> {
        if self.find(name).is_none() {
            return Err(Error::UnknownPane(name.into()));
        }
        self.modal = Some(name.into());
        self.mark_dirty(name)
    }

    /// Drop modal capture. The region under the overlay can only be
    /// reconstructed by repainting everything, so this dirties the
    /// whole display.
    pub fn clear_modal(&mut self) {
        if self.modal.take().is_some() {
            self.mark_all_dirty();
        }
    }

    /// The modal pane's name, if one is set.
    pub fn modal(&self) -> Option<&str> {
        self.modal.as_deref()
    }

    /// Make a pane visible and schedule its repaint.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownPane`] if no pane has this name.
    pub fn show(&mut self, name: &str) -> Result<()> {
        self.pane_mut(name)
            .ok_or_else(|| Error::UnknownPane(name.into()))?
            .set_visible(true);
        self.mark_dirty(name)
    }

    /// Hide a pane. The vacated region forces a full repaint.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownPane`] if no pane has this name.
    pub fn hide(&mut self, name: &str) -> Result<()> {
        self.pane_mut(name)
            .ok_or_else(|| Error::UnknownPane(name.into()))?
            .set_visible(false);
        self.mark_all_dirty();
        Ok(())
    }

    /// Run one tick: drain input, detect resize, repaint what is
    /// dirty, flush once.
    ///
    /// Bounded work, never blocks; "waiting for input" is the host
    /// calling this again later.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidBounds`] when a pane or control resolves to a
    /// negative extent, [`Error::Io`] when the flush fails. Transient
    /// input conditions are absorbed, not returned.
    pub fn handle(&mut self) -> Result<()> {
        self.drain_input();

        let size = self.driver.size();
        if size != (self.width, self.height) {
            debug!(width = size.0, height = size.1, "terminal resized");
            self.width = size.0;
            self.height = size.1;
            self.dirty = Dirty::All;
        }

        if self.dirty == Dirty::Clean {
            return Ok(());
        }
        self.redraw()?;
        self.dirty = Dirty::Clean;
        Ok(())
    }

    /// Read whatever bytes are available and route the decoded events.
    fn drain_input(&mut self) {
        let mut buf = [0_u8; 1024];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => break, // stream closed; nothing for this tick
                Ok(n) => {
                    let events = self.decoder.decode(&buf[..n]);
                    for event in events {
                        self.dispatch(&event);
                    }
                    if n < buf.len() {
                        break; // drained what was available
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    trace!(error = %e, "input read failed, ending drain for this tick");
                    break;
                }
            }
        }
    }

    /// Route one decoded event (also the entry point for tests).
    pub(super) fn dispatch(&mut self, event: &Event) {
        match event {
            Event::Char(_) | Event::Key(_) => self.dispatch_key(event),
            Event::Cycle(direction) => self.cycle_focus(*direction),
            Event::Click(click) => self.route_click(click),
        }
    }

    /// Composite every dirty pane and flush the frame.
    fn redraw(&mut self) -> Result<()> {
        let screen = Rect::from_size(self.width, self.height);
        let full = self.dirty == Dirty::All;
        if full {
            debug!("full repaint");
            self.out.clear_screen();
            self.out.cursor_home();
        }

        // Insertion order is z-order; the dirty set only selects, it
        // never reorders.
        for (name, pane) in &self.panes {
            if !pane.is_visible() || self.modal.as_deref() == Some(name.as_str()) {
                continue;
            }
            let selected = full
                || matches!(&self.dirty, Dirty::Panes(set) if set.iter().any(|n| n == name));
            if selected {
                pane.redraw(screen, &mut self.out)?;
            }
        }

        // The modal overlay is composited last no matter what else was
        // painted beneath it.
        if let Some(modal) = &self.modal {
            if let Some((_, pane)) = self.panes.iter().find(|(n, _)| n == modal) {
                if pane.is_visible() {
                    pane.redraw(screen, &mut self.out)?;
                }
            }
        }

        match self.active_area(screen) {
            Some(area) => {
                self.out.cursor_move(area.x1, area.y1);
                self.out.cursor_show();
            }
            None => self.out.cursor_hide(),
        }

        self.driver.flush_frame(&mut self.out)?;
        Ok(())
    }

    /// Resolved rectangle of the active control, if the path is live.
    fn active_area(&self, screen: Rect) -> Option<Rect> {
        let (pane_name, control_name) = self.active.as_ref()?;
        let pane = self.pane(pane_name)?;
        let control = pane.control(control_name)?;
        Some(control.bounds().resolve(pane.bounds().resolve(screen)))
    }

    pub(super) fn find(&self, name: &str) -> Option<usize> {
        self.panes.iter().position(|(n, _)| n == name)
    }

    pub(super) fn panes(&self) -> &[(String, Pane)] {
        &self.panes
    }

    pub(super) fn pane_at_mut(&mut self, index: usize) -> &mut Pane {
        &mut self.panes[index].1
    }
}
