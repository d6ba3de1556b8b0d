//! Decoder: byte-at-a-time state machine for terminal input.
//!
//! The decoder persists across reads: an escape sequence split over two
//! chunks resumes where it left off. Malformed or unrecognized
//! sequences never fail decoding; the partial buffer is discarded, the
//! machine returns to ground, and the next byte is decoded normally.

use super::event::{Click, Cycle, Event, Key, Modifiers, MouseButton};
use tracing::trace;

/// Longest CSI parameter buffer accepted before the sequence is
/// declared malformed and dropped.
const PARAM_MAX: usize = 10;

/// X10 mouse reports offset every payload byte by 32.
const MOUSE_OFFSET: u8 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Plain bytes.
    Ground,
    /// Seen ESC.
    Escape,
    /// Seen ESC `[`; waiting for a final or a parameter byte.
    Csi,
    /// Accumulating CSI parameters (numeric codes or a mouse triplet).
    CsiParam,
    /// Seen ESC `O`.
    Ss3,
}

/// Resumable decoder over a raw terminal byte stream.
///
/// # Example
///
/// ```
/// use mullion::{Decoder, Event, Key};
///
/// let mut decoder = Decoder::new();
/// assert_eq!(decoder.decode(b"\x1b[A"), vec![Event::Key(Key::Up)]);
/// ```
#[derive(Debug)]
pub struct Decoder {
    state: State,
    param: Vec<u8>,
}

impl Decoder {
    /// Create a decoder in the ground state.
    pub const fn new() -> Self {
        Self {
            state: State::Ground,
            param: Vec::new(),
        }
    }

    /// Check whether the decoder is mid-sequence.
    pub fn is_mid_sequence(&self) -> bool {
        self.state != State::Ground
    }

    /// Decode a chunk of bytes, in order, into events.
    ///
    /// State carries over between calls, so a chunk may end anywhere
    /// inside a sequence.
    pub fn decode(&mut self, bytes: &[u8]) -> Vec<Event> {
        let mut out = Vec::new();
        for &byte in bytes {
            self.feed(byte, &mut out);
        }
        out
    }

    /// Feed a single byte, appending any completed events to `out`.
    pub fn feed(&mut self, byte: u8, out: &mut Vec<Event>) {
        match self.state {
            State::Ground => match byte {
                0x1b => self.state = State::Escape,
                0x09 => out.push(Event::Cycle(Cycle::Forward)),
                0x7f => out.push(Event::Key(Key::Backspace)),
                b => out.push(Event::Char(b)),
            },

            State::Escape => match byte {
                b'[' => self.state = State::Csi,
                b'O' => self.state = State::Ss3,
                b => {
                    trace!(byte = b, "malformed escape introducer, discarding");
                    self.reset();
                }
            },

            State::Csi => match byte {
                b'A' => self.emit(out, Event::Key(Key::Up)),
                b'B' => self.emit(out, Event::Key(Key::Down)),
                b'C' => self.emit(out, Event::Key(Key::Right)),
                b'D' => self.emit(out, Event::Key(Key::Left)),
                b'E' => self.emit(out, Event::Key(Key::Center)),
                b'Z' => self.emit(out, Event::Cycle(Cycle::Backward)),
                b => {
                    self.param.push(b);
                    self.state = State::CsiParam;
                }
            },

            State::CsiParam => {
                if self.param.first() == Some(&b'M') {
                    self.param.push(byte);
                    // M info x y: a complete X10 triplet
                    if self.param.len() == 4 {
                        if let Some(event) =
                            mouse_report(self.param[1], self.param[2], self.param[3])
                        {
                            out.push(event);
                        }
                        self.reset();
                    }
                } else if byte == b'~' {
                    if let Some(key) = numeric_key(&self.param) {
                        out.push(Event::Key(key));
                    }
                    self.reset();
                } else {
                    self.param.push(byte);
                    if self.param.len() > PARAM_MAX {
                        trace!(len = self.param.len(), "unterminated CSI parameters, discarding");
                        self.reset();
                    }
                }
            }

            State::Ss3 => {
                let key = match byte {
                    b'H' => Some(Key::Home),
                    b'F' => Some(Key::End),
                    b'Q' => Some(Key::F(2)),
                    b'R' => Some(Key::F(3)),
                    b'S' => Some(Key::F(4)),
                    b => {
                        trace!(byte = b, "unrecognized SS3 final, discarding");
                        None
                    }
                };
                if let Some(key) = key {
                    out.push(Event::Key(key));
                }
                self.reset();
            }
        }
    }

    fn emit(&mut self, out: &mut Vec<Event>, event: Event) {
        out.push(event);
        self.reset();
    }

    fn reset(&mut self) {
        self.state = State::Ground;
        self.param.clear();
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a `~`-terminated all-digit CSI parameter to its key.
fn numeric_key(param: &[u8]) -> Option<Key> {
    if param.is_empty() || !param.iter().all(u8::is_ascii_digit) {
        trace!(?param, "non-numeric CSI parameters before '~', discarding");
        return None;
    }
    let code: u32 = std::str::from_utf8(param).ok()?.parse().ok()?;
    let key = match code {
        2 => Key::Insert,
        3 => Key::Delete,
        5 => Key::PageUp,
        6 => Key::PageDown,
        15 => Key::F(5),
        17 => Key::F(6),
        18 => Key::F(7),
        19 => Key::F(8),
        20 => Key::F(9),
        24 => Key::F(12),
        other => {
            trace!(code = other, "unrecognized numeric key code, discarding");
            return None;
        }
    };
    Some(key)
}

/// Decode an X10 mouse triplet (info, x, y), each byte offset by 32.
///
/// The info byte carries modifiers in bits 4/8/16 and button identity
/// in the remaining bits; the modifier bits are masked off before the
/// button lookup so `shift+left` stays a left click.
fn mouse_report(info: u8, x: u8, y: u8) -> Option<Event> {
    let cb = info.wrapping_sub(MOUSE_OFFSET);
    let modifiers = Modifiers::from_bits_truncate(cb & Modifiers::all().bits());
    let button = match cb & !Modifiers::all().bits() {
        0 => MouseButton::Left,
        1 => MouseButton::Middle,
        2 => MouseButton::Right,
        3 => MouseButton::Release,
        64 => MouseButton::ScrollUp,
        65 => MouseButton::ScrollDown,
        other => {
            trace!(bits = other, "unrecognized mouse button bits, discarding");
            return None;
        }
    };
    Some(Event::Click(Click {
        button,
        modifiers,
        x: i32::from(x.wrapping_sub(MOUSE_OFFSET)),
        y: i32::from(y.wrapping_sub(MOUSE_OFFSET)),
    }))
}
