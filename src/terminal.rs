//! Terminal setup and teardown for the input demo.
//!
//! Enters raw mode, enables mouse capture and, where the terminal supports
//! it, the keyboard enhancement that reports key releases. Without release
//! reporting every key press arrives alone and is passed through unchanged
//! once the key window elapses.

use std::io::{self, stdout};

use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal;
use log::{debug, warn};

use crate::input::{disable_mouse, enable_mouse};

/// Terminal setup/teardown handle. Restores the terminal on drop.
pub struct TerminalSetup {
    is_raw: bool,
    mouse_enabled: bool,
    key_releases: bool,
}

impl TerminalSetup {
    pub fn new() -> Self {
        Self {
            is_raw: false,
            mouse_enabled: false,
            key_releases: false,
        }
    }

    /// Enable raw mode, mouse capture and key release reporting.
    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.is_raw = true;

        enable_mouse()?;
        self.mouse_enabled = true;

        match terminal::supports_keyboard_enhancement() {
            Ok(true) => {
                execute!(
                    stdout(),
                    PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
                )?;
                self.key_releases = true;
                debug!("keyboard enhancement enabled, key releases reported");
            }
            Ok(false) => warn!("terminal does not report key releases; key presses will not merge"),
            Err(e) => warn!("keyboard enhancement query failed: {}", e),
        }
        Ok(())
    }

    /// Whether key release events will be delivered.
    pub fn reports_key_releases(&self) -> bool {
        self.key_releases
    }

    /// Undo everything `enter` enabled.
    pub fn exit(&mut self) -> io::Result<()> {
        if self.key_releases {
            execute!(stdout(), PopKeyboardEnhancementFlags)?;
            self.key_releases = false;
        }
        if self.mouse_enabled {
            disable_mouse()?;
            self.mouse_enabled = false;
        }
        if self.is_raw {
            terminal::disable_raw_mode()?;
            self.is_raw = false;
        }
        Ok(())
    }
}

impl Default for TerminalSetup {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalSetup {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
