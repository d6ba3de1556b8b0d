//! Decoded input events.

use bitflags::bitflags;

/// A named non-printing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Backspace / DEL.
    Backspace,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Center of the keypad (CSI `E`).
    Center,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Insert key.
    Insert,
    /// Delete key.
    Delete,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Function key (F2-F9, F12 are producible by the decoder).
    F(u8),
}

bitflags! {
    /// Modifier keys held during a mouse report.
    ///
    /// Bit values follow the X10 protocol layout of the info byte
    /// (after its 32 offset is removed).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Shift held.
        const SHIFT = 0b0000_0100;
        /// Meta/Alt held.
        const META = 0b0000_1000;
        /// Control held.
        const CONTROL = 0b0001_0000;
    }
}

/// Mouse button or wheel identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Middle mouse button.
    Middle,
    /// Right mouse button.
    Right,
    /// Button release.
    Release,
    /// Scroll wheel up.
    ScrollUp,
    /// Scroll wheel down.
    ScrollDown,
}

/// A decoded mouse report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    /// Button or wheel identity.
    pub button: MouseButton,
    /// Modifiers held during the event.
    pub modifiers: Modifiers,
    /// Absolute column, as reported by the terminal.
    pub x: i32,
    /// Absolute row, as reported by the terminal.
    pub y: i32,
}

/// Direction of a focus-cycle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    /// TAB: next key-capable control.
    Forward,
    /// Shift-TAB (CSI `Z`): previous key-capable control.
    Backward,
}

/// One decoded unit of terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A plain byte, delivered as-is.
    Char(u8),
    /// A named key.
    Key(Key),
    /// A mouse report.
    Click(Click),
    /// A focus-cycle request. Routed by the display itself, never
    /// delivered to a control.
    Cycle(Cycle),
}
