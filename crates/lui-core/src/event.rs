#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the event vocabulary routed through the coordination
//! layer. All events derive `Clone`, `PartialEq`, and `Eq` for use in tests
//! and pattern matching.
//!
//! # Design Notes
//!
//! - `KeyEventKind` defaults to `Press` when the host has no key-state info.
//! - `Modifiers` use bitflags for easy combination.
//! - Pointer coordinates are informational; hit-testing against overlay
//!   regions is performed by the host and passed alongside the event.

use bitflags::bitflags;

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),
    /// A pointer (mouse/touch) event.
    Pointer(PointerEvent),
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and `Press` kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Set the modifier keys.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the event kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Check if Shift is held.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Check if Ctrl is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }
}

/// Key codes understood by the coordination layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Escape key.
    Escape,
    /// Backspace key.
    Backspace,
    /// Tab key.
    Tab,
    /// Shift+Tab (back-tab), for hosts that report it as a distinct key.
    BackTab,
    /// Delete key.
    Delete,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
}

/// The type of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyEventKind {
    /// Key was pressed.
    #[default]
    Press,
    /// Key is being held (auto-repeat).
    Repeat,
    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys held during an event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE = 0;
        /// Shift key.
        const SHIFT = 1 << 0;
        /// Alt/Option key.
        const ALT = 1 << 1;
        /// Control key.
        const CTRL = 1 << 2;
        /// Meta/Command/Windows key.
        const META = 1 << 3;
    }
}

/// A pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// Which button changed state.
    pub button: PointerButton,
    /// Down or up.
    pub kind: PointerEventKind,
    /// Horizontal position in host units.
    pub x: i32,
    /// Vertical position in host units.
    pub y: i32,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, button: PointerButton, x: i32, y: i32) -> Self {
        Self { button, kind, x, y }
    }

    /// A primary-button press at the given position.
    #[must_use]
    pub const fn primary_down(x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Down, PointerButton::Primary, x, y)
    }
}

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button (usually left).
    Primary,
    /// Secondary button (usually right).
    Secondary,
    /// Middle button / wheel press.
    Middle,
}

/// Pointer event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Button pressed.
    Down,
    /// Button released.
    Up,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_defaults_to_press() {
        let event = KeyEvent::new(KeyCode::Escape);
        assert_eq!(event.kind, KeyEventKind::Press);
        assert_eq!(event.modifiers, Modifiers::NONE);
    }

    #[test]
    fn key_event_builders() {
        let event = KeyEvent::new(KeyCode::Tab)
            .with_modifiers(Modifiers::SHIFT)
            .with_kind(KeyEventKind::Release);
        assert!(event.shift());
        assert_eq!(event.kind, KeyEventKind::Release);
    }

    #[test]
    fn is_char_matches_only_same_char() {
        let event = KeyEvent::new(KeyCode::Char('a'));
        assert!(event.is_char('a'));
        assert!(!event.is_char('b'));
        assert!(!KeyEvent::new(KeyCode::Enter).is_char('a'));
    }

    #[test]
    fn modifiers_combine() {
        let mods = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(mods.contains(Modifiers::CTRL));
        assert!(mods.contains(Modifiers::SHIFT));
        assert!(!mods.contains(Modifiers::ALT));
    }

    #[test]
    fn primary_down_helper() {
        let event = PointerEvent::primary_down(4, 7);
        assert_eq!(event.button, PointerButton::Primary);
        assert_eq!(event.kind, PointerEventKind::Down);
        assert_eq!((event.x, event.y), (4, 7));
    }

    #[test]
    fn events_compare_by_value() {
        let a = Event::Key(KeyEvent::new(KeyCode::Escape));
        let b = Event::Key(KeyEvent::new(KeyCode::Escape));
        assert_eq!(a, b);
        assert_ne!(a, Event::Pointer(PointerEvent::primary_down(0, 0)));
    }
}
