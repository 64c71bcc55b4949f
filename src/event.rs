//! Pointer events delivered to rendered rects.
//!
//! These are a trimmed view of crossterm's mouse events: only what a
//! hover/click handler needs to see.

use crossterm::event::{self, Event, MouseEventKind};

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
}

impl From<event::MouseButton> for MouseButton {
    fn from(button: event::MouseButton) -> Self {
        match button {
            event::MouseButton::Left => Self::Left,
            event::MouseButton::Right => Self::Right,
            event::MouseButton::Middle => Self::Middle,
        }
    }
}

/// Key modifiers held during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt/Option key held.
    pub alt: bool,
}

impl KeyModifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };
}

impl From<event::KeyModifiers> for KeyModifiers {
    fn from(mods: event::KeyModifiers) -> Self {
        Self {
            shift: mods.contains(event::KeyModifiers::SHIFT),
            control: mods.contains(event::KeyModifiers::CONTROL),
            alt: mods.contains(event::KeyModifiers::ALT),
        }
    }
}

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Button pressed.
    Down(MouseButton),
    /// Button released.
    Up(MouseButton),
    /// Pointer moved with no button held.
    Moved,
    /// Pointer moved with a button held.
    Drag(MouseButton),
    /// Wheel scrolled (positive = up, negative = down).
    Scroll(i16),
}

/// A pointer event in buffer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerKind,
    /// X coordinate (column).
    pub x: u16,
    /// Y coordinate (row).
    pub y: u16,
    /// Key modifiers held during the event.
    pub modifiers: KeyModifiers,
}

impl PointerEvent {
    /// Create an event with no modifiers held.
    pub const fn new(kind: PointerKind, x: u16, y: u16) -> Self {
        Self {
            kind,
            x,
            y,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Whether the pointer is moving (with or without a button held).
    pub const fn is_motion(&self) -> bool {
        matches!(self.kind, PointerKind::Moved | PointerKind::Drag(_))
    }

    /// Convert a crossterm terminal event, ignoring everything but the mouse.
    pub fn from_terminal(event: &Event) -> Option<Self> {
        match event {
            Event::Mouse(mouse) => Self::from_mouse(*mouse),
            _ => None,
        }
    }

    /// Convert a crossterm mouse event.
    ///
    /// Horizontal scrolling has no counterpart and yields `None`.
    pub fn from_mouse(mouse: event::MouseEvent) -> Option<Self> {
        let kind = match mouse.kind {
            MouseEventKind::Down(button) => PointerKind::Down(button.into()),
            MouseEventKind::Up(button) => PointerKind::Up(button.into()),
            MouseEventKind::Drag(button) => PointerKind::Drag(button.into()),
            MouseEventKind::Moved => PointerKind::Moved,
            MouseEventKind::ScrollUp => PointerKind::Scroll(1),
            MouseEventKind::ScrollDown => PointerKind::Scroll(-1),
            MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => return None,
        };
        Some(Self {
            kind,
            x: mouse.column,
            y: mouse.row,
            modifiers: mouse.modifiers.into(),
        })
    }
}
