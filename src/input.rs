//! Input Module - crossterm → raw input events
//!
//! Bridges crossterm's terminal events with the classifier's event type.
//! Each converted event is stamped with the caller's clock reading so that
//! ingest timestamps and classification time share one time base.
//!
//! # API
//!
//! - `convert_event` - Convert any crossterm Event (None if not an input)
//! - `convert_key_event` - Convert a crossterm KeyEvent
//! - `convert_mouse_event` - Convert a crossterm MouseEvent (None for scroll)
//! - `key_code` - Integer code for a crossterm KeyCode
//! - `poll_event` - Non-blocking check with timeout
//! - `enable_mouse` / `disable_mouse` - Control mouse capture
//!
//! # Example
//!
//! ```ignore
//! use spark_input::input::{poll_event, convert_event};
//! use std::time::Duration;
//!
//! if let Some(event) = poll_event(Duration::from_millis(16))? {
//!     if let Some(raw) = convert_event(event, clock.now()) {
//!         pipeline.ingest(raw);
//!     }
//! }
//! ```

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent,
    KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers,
    MouseButton as CrosstermMouseButton, MouseEvent as CrosstermMouseEvent, MouseEventKind,
    poll, read,
};
use crossterm::execute;
use std::io::stdout;
use std::time::Duration;

use crate::types::{Action, Modifiers, RawInputEvent};

// =============================================================================
// BUTTON IDS
// =============================================================================

pub const BUTTON_LEFT: u8 = 0;
pub const BUTTON_RIGHT: u8 = 1;
pub const BUTTON_MIDDLE: u8 = 2;

/// First code used for named (non-character) keys. Private-use range, so it
/// never collides with a character's scalar value.
pub const NAMED_KEY_BASE: u32 = 0xE000;

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Integer code for a key. Characters map to their Unicode scalar value,
/// named keys to `NAMED_KEY_BASE + n`. Every key gets its own code so a
/// press of one key never pairs with the release of another.
pub fn key_code(code: KeyCode) -> u32 {
    let named = |n: u32| NAMED_KEY_BASE + n;
    match code {
        KeyCode::Char(c) => c as u32,
        KeyCode::Backspace => named(1),
        KeyCode::Enter => named(2),
        KeyCode::Left => named(3),
        KeyCode::Right => named(4),
        KeyCode::Up => named(5),
        KeyCode::Down => named(6),
        KeyCode::Home => named(7),
        KeyCode::End => named(8),
        KeyCode::PageUp => named(9),
        KeyCode::PageDown => named(10),
        KeyCode::Tab => named(11),
        KeyCode::BackTab => named(12),
        KeyCode::Delete => named(13),
        KeyCode::Insert => named(14),
        KeyCode::Esc => named(15),
        KeyCode::CapsLock => named(16),
        KeyCode::ScrollLock => named(17),
        KeyCode::NumLock => named(18),
        KeyCode::PrintScreen => named(19),
        KeyCode::Pause => named(20),
        KeyCode::Menu => named(21),
        KeyCode::KeypadBegin => named(22),
        KeyCode::Null => named(23),
        KeyCode::F(n) => named(0x100 + n as u32),
        KeyCode::Modifier(m) => named(0x200 + m as u32),
        KeyCode::Media(m) => named(0x300 + m as u32),
    }
}

/// Convert a crossterm KeyEvent, stamped at `timestamp` seconds.
pub fn convert_key_event(event: CrosstermKeyEvent, timestamp: f64) -> RawInputEvent {
    let action = match event.kind {
        KeyEventKind::Press => Action::Press,
        KeyEventKind::Repeat => Action::Repeat,
        KeyEventKind::Release => Action::Release,
    };

    RawInputEvent::key(
        key_code(event.code),
        convert_modifiers(event.modifiers),
        action,
        timestamp,
    )
}

// =============================================================================
// MOUSE EVENT CONVERSION
// =============================================================================

/// Convert a crossterm MouseEvent. Scroll events are not inputs the
/// classifier understands and yield `None`. Drags are reported as moves.
pub fn convert_mouse_event(event: CrosstermMouseEvent, timestamp: f64) -> Option<RawInputEvent> {
    let modifiers = convert_modifiers(event.modifiers);
    match event.kind {
        MouseEventKind::Down(btn) => Some(RawInputEvent::button(
            convert_mouse_button(btn),
            modifiers,
            Action::Press,
            timestamp,
        )),
        MouseEventKind::Up(btn) => Some(RawInputEvent::button(
            convert_mouse_button(btn),
            modifiers,
            Action::Release,
            timestamp,
        )),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(RawInputEvent::move_to(
            event.column as f64,
            event.row as f64,
            timestamp,
        )),
        MouseEventKind::ScrollUp
        | MouseEventKind::ScrollDown
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => None,
    }
}

fn convert_mouse_button(btn: CrosstermMouseButton) -> u8 {
    match btn {
        CrosstermMouseButton::Left => BUTTON_LEFT,
        CrosstermMouseButton::Right => BUTTON_RIGHT,
        CrosstermMouseButton::Middle => BUTTON_MIDDLE,
    }
}

// =============================================================================
// MODIFIER CONVERSION
// =============================================================================

fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    let mut out = Modifiers::empty();
    out.set(Modifiers::SHIFT, mods.contains(KeyModifiers::SHIFT));
    out.set(Modifiers::CONTROL, mods.contains(KeyModifiers::CONTROL));
    out.set(Modifiers::ALT, mods.contains(KeyModifiers::ALT));
    out.set(
        Modifiers::SUPER,
        mods.intersects(KeyModifiers::SUPER | KeyModifiers::META),
    );
    out
}

// =============================================================================
// EVENT CONVERSION / POLLING
// =============================================================================

/// Convert any crossterm event. Resize, focus and paste events are not
/// inputs and yield `None`.
pub fn convert_event(event: CrosstermEvent, timestamp: f64) -> Option<RawInputEvent> {
    match event {
        CrosstermEvent::Key(key) => Some(convert_key_event(key, timestamp)),
        CrosstermEvent::Mouse(mouse) => convert_mouse_event(mouse, timestamp),
        _ => None,
    }
}

/// Poll for a terminal event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<CrosstermEvent>> {
    if poll(timeout)? {
        Ok(Some(read()?))
    } else {
        Ok(None)
    }
}

/// Enable mouse capture.
pub fn enable_mouse() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable mouse capture.
pub fn disable_mouse() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// TESTS
// =============================================================================
