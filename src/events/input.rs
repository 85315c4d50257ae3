//! Key binding parsing and matching.

use crate::error::{Error, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::str::FromStr;

/// A parsed key binding such as `q`, `Ctrl+r`, or `Left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    code: KeyCode,
    ctrl: bool,
    alt: bool,
}

impl KeyBinding {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
        }
    }

    /// Whether a key press triggers this binding.
    ///
    /// Shift is not compared: it is already folded into the character for
    /// bindings like `?`, and letters match in either case.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) != self.ctrl
            || key.modifiers.contains(KeyModifiers::ALT) != self.alt
        {
            return false;
        }

        match (self.code, key.code) {
            (KeyCode::Char(expected), KeyCode::Char(got)) => {
                expected.eq_ignore_ascii_case(&got)
            }
            (expected, got) => expected == got,
        }
    }
}

impl FromStr for KeyBinding {
    type Err = Error;

    fn from_str(binding: &str) -> Result<Self> {
        let mut parsed = Self::new(KeyCode::Null);
        let mut key = None;

        for part in binding.split('+').map(str::trim) {
            match part.to_lowercase().as_str() {
                "ctrl" => parsed.ctrl = true,
                "alt" => parsed.alt = true,
                "shift" => {}
                _ => key = Some(part),
            }
        }

        // A bare "+" splits into two empty parts.
        let key = match key {
            Some("") | None if binding.trim() == "+" => "+",
            Some(key) if !key.is_empty() => key,
            _ => return Err(Error::config(format!("empty key binding '{}'", binding))),
        };

        parsed.code = match key.to_lowercase().as_str() {
            "enter" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "backspace" => KeyCode::Backspace,
            "tab" => KeyCode::Tab,
            "space" => KeyCode::Char(' '),
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            s if s.len() > 1 && s.starts_with('f') => s[1..]
                .parse::<u8>()
                .map(KeyCode::F)
                .map_err(|_| Error::config(format!("unknown key '{}'", key)))?,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return Err(Error::config(format!("unknown key '{}'", key))),
                }
            }
        };
        Ok(parsed)
    }
}
