//! Input events delivered by the host to picker components.
//!
//! The host translates its native keyboard and wheel events into these
//! types. A handler that consumes an event calls [`EventBase::accept`]; the
//! host should then suppress the native default action.

/// Keyboard modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held.
    pub control: bool,
    /// The Alt key is held.
    pub alt: bool,
    /// The Meta/Super key is held.
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Alt modifier only.
    pub const ALT: Self = Self {
        shift: false,
        control: false,
        alt: true,
        meta: false,
    };

    /// Whether any modifier is held.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }
}

/// Keys the picker reacts to.
///
/// Everything else arrives as [`Key::Character`] or [`Key::Unknown`] and is
/// ignored by the navigation handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[rustfmt::skip]
pub enum Key {
    // Numbers (main keyboard)
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Numpad
    Numpad0, Numpad1, Numpad2, Numpad3, Numpad4,
    Numpad5, Numpad6, Numpad7, Numpad8, Numpad9,

    // Navigation
    ArrowUp, ArrowDown, ArrowLeft, ArrowRight,

    // Editing
    Backspace, Enter, Tab, Space, Escape,

    /// A printable key without a dedicated variant.
    Character(char),
    /// Unknown/unmapped key.
    Unknown(u16),
}

impl Key {
    /// The numeric value of a digit key.
    pub fn digit(&self) -> Option<u8> {
        let digit = match self {
            Key::Digit0 | Key::Numpad0 => 0,
            Key::Digit1 | Key::Numpad1 => 1,
            Key::Digit2 | Key::Numpad2 => 2,
            Key::Digit3 | Key::Numpad3 => 3,
            Key::Digit4 | Key::Numpad4 => 4,
            Key::Digit5 | Key::Numpad5 => 5,
            Key::Digit6 | Key::Numpad6 => 6,
            Key::Digit7 | Key::Numpad7 => 7,
            Key::Digit8 | Key::Numpad8 => 8,
            Key::Digit9 | Key::Numpad9 => 9,
            Key::Character(c) => return c.to_digit(10).and_then(|d| u8::try_from(d).ok()),
            _ => return None,
        };
        Some(digit)
    }
}

/// Common state shared by all events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventBase {
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event; the host should suppress its default action.
    pub fn accept(&mut self) {
        self.accepted = true;
    }
}

/// Key press event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
        }
    }

    /// A key press without modifiers.
    pub fn plain(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE)
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base.is_accepted()
    }
}

/// Mouse wheel event over a scrollable view.
///
/// Carries the scroll geometry of the view at the time of the event so the
/// handler can tell whether the view is already at an edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    /// Base event data.
    pub base: EventBase,
    /// Vertical scroll delta (positive = down/towards the user).
    pub delta_y: f32,
    /// Current scroll offset of the view.
    pub scroll_top: f32,
    /// Total scrollable content height of the view.
    pub scroll_height: f32,
    /// Visible height of the view.
    pub client_height: f32,
    /// Whether the event target lies inside the view.
    pub inside_view: bool,
}

impl WheelEvent {
    /// Create a new wheel event targeted inside the view.
    pub fn new(delta_y: f32, scroll_top: f32, scroll_height: f32, client_height: f32) -> Self {
        Self {
            base: EventBase::new(),
            delta_y,
            scroll_top,
            scroll_height,
            client_height,
            inside_view: true,
        }
    }

    /// Mark whether the event target lies inside the view.
    pub fn with_inside_view(mut self, inside_view: bool) -> Self {
        self.inside_view = inside_view;
        self
    }

    /// Whether the view is scrolled to its top.
    pub fn at_top(&self) -> bool {
        self.scroll_top <= 0.0
    }

    /// Whether the view is scrolled to its bottom.
    pub fn at_bottom(&self) -> bool {
        self.scroll_top >= self.scroll_height - self.client_height
    }
}
