//! Core event types.
//!
//! A [`RawInputEvent`] is an immutable value: a keyboard or pointer input
//! plus the monotonic time (seconds) at which it was delivered. The same
//! type carries classified events; a merged press/release pair is marked
//! with [`Action::Click`].

use std::fmt;

use bitflags::bitflags;

// =============================================================================
// MODIFIERS
// =============================================================================

bitflags! {
    /// Modifier key bitmask delivered with key and button events.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 0x01;
        const CONTROL = 0x02;
        const ALT = 0x04;
        const SUPER = 0x08;
    }
}

// =============================================================================
// ACTION
// =============================================================================

/// What happened to a key or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Release,
    Press,
    /// Auto-repeat while a key is held. Never pairs.
    Repeat,
    /// Synthetic: a press and its matching release merged by the classifier.
    Click,
}

// =============================================================================
// EVENTS
// =============================================================================

/// Which device produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSource {
    Keyboard,
    Pointer,
}

/// Identity used to decide whether two events can pair.
///
/// Moves have no pair key, so a button event never pairs with a move even
/// though both come from the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairKey {
    Key(u32),
    Button(u8),
}

/// Keyboard input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyInput {
    /// Key code (scancode or mapped key identifier)
    pub code: u32,
    pub modifiers: Modifiers,
    pub action: Action,
    /// Seconds on the pipeline clock
    pub timestamp: f64,
}

/// Button or motion part of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerKind {
    Button {
        button: u8,
        modifiers: Modifiers,
        action: Action,
    },
    Move {
        x: f64,
        y: f64,
    },
}

/// Pointer input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub kind: PointerKind,
    /// Seconds on the pipeline clock
    pub timestamp: f64,
}

/// A low-level input as delivered by an input source, or a classified
/// event produced from one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInputEvent {
    Key(KeyInput),
    Pointer(PointerInput),
}

impl RawInputEvent {
    /// Create a key event
    pub fn key(code: u32, modifiers: Modifiers, action: Action, timestamp: f64) -> Self {
        Self::Key(KeyInput {
            code,
            modifiers,
            action,
            timestamp,
        })
    }

    /// Create a pointer button event
    pub fn button(button: u8, modifiers: Modifiers, action: Action, timestamp: f64) -> Self {
        Self::Pointer(PointerInput {
            kind: PointerKind::Button {
                button,
                modifiers,
                action,
            },
            timestamp,
        })
    }

    /// Create a pointer move event
    pub fn move_to(x: f64, y: f64, timestamp: f64) -> Self {
        Self::Pointer(PointerInput {
            kind: PointerKind::Move { x, y },
            timestamp,
        })
    }

    pub fn source(&self) -> EventSource {
        match self {
            Self::Key(_) => EventSource::Keyboard,
            Self::Pointer(_) => EventSource::Pointer,
        }
    }

    pub fn timestamp(&self) -> f64 {
        match self {
            Self::Key(k) => k.timestamp,
            Self::Pointer(p) => p.timestamp,
        }
    }

    /// Key or button action. `None` for pointer moves.
    pub fn action(&self) -> Option<Action> {
        match self {
            Self::Key(k) => Some(k.action),
            Self::Pointer(PointerInput {
                kind: PointerKind::Button { action, .. },
                ..
            }) => Some(*action),
            Self::Pointer(_) => None,
        }
    }

    pub fn modifiers(&self) -> Modifiers {
        match self {
            Self::Key(k) => k.modifiers,
            Self::Pointer(PointerInput {
                kind: PointerKind::Button { modifiers, .. },
                ..
            }) => *modifiers,
            Self::Pointer(_) => Modifiers::empty(),
        }
    }

    pub fn pair_key(&self) -> Option<PairKey> {
        match self {
            Self::Key(k) => Some(PairKey::Key(k.code)),
            Self::Pointer(PointerInput {
                kind: PointerKind::Button { button, .. },
                ..
            }) => Some(PairKey::Button(*button)),
            Self::Pointer(_) => None,
        }
    }

    /// Copy of this event with its action replaced. Moves are returned as is.
    pub fn with_action(mut self, new_action: Action) -> Self {
        match &mut self {
            Self::Key(k) => k.action = new_action,
            Self::Pointer(PointerInput {
                kind: PointerKind::Button { action, .. },
                ..
            }) => *action = new_action,
            Self::Pointer(_) => {}
        }
        self
    }
}

// =============================================================================
// DISPLAY
// =============================================================================

fn action_label(source: EventSource, action: Action) -> &'static str {
    match (source, action) {
        (_, Action::Release) => "Release",
        (_, Action::Press) => "Press",
        (_, Action::Repeat) => "Repeat",
        (EventSource::Keyboard, Action::Click) => "KeyPress",
        (EventSource::Pointer, Action::Click) => "Click",
    }
}

impl fmt::Display for RawInputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(k) => write!(
                f,
                "{:.6} : KEY({:02X},{}) {}",
                k.timestamp,
                k.code,
                k.modifiers.bits(),
                action_label(EventSource::Keyboard, k.action)
            ),
            Self::Pointer(p) => match p.kind {
                PointerKind::Button {
                    button,
                    modifiers,
                    action,
                } => write!(
                    f,
                    "{:.6} : MOUSE Key({:02X},{}) {}",
                    p.timestamp,
                    button,
                    modifiers.bits(),
                    action_label(EventSource::Pointer, action)
                ),
                PointerKind::Move { x, y } => {
                    write!(f, "{:.6} : MOUSE Move {:.6}, {:.6}", p.timestamp, x, y)
                }
            },
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
