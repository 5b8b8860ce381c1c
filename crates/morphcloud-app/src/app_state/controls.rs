//! Keyboard control surface.
//!
//! Maps winit logical keys to [`Control`] actions. Only presses are mapped;
//! repeats and releases are ignored.

use winit::keyboard::{Key, NamedKey};

/// An action requested from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Morph to the given shape index (zero-based).
    MorphTo(usize),
    RandomizeColors,
    ToggleAutoCycle,
    Quit,
}

impl Control {
    /// Digits `1`–`9` pick shapes `0`–`8`; `0` maps to nothing.
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Named(NamedKey::Escape) => Some(Control::Quit),
            Key::Named(NamedKey::Space) => Some(Control::ToggleAutoCycle),
            Key::Character(c) => Self::from_character(c.as_str()),
            _ => None,
        }
    }

    fn from_character(c: &str) -> Option<Self> {
        match c {
            "c" | "C" => Some(Control::RandomizeColors),
            " " => Some(Control::ToggleAutoCycle),
            _ => {
                let digit = c.parse::<usize>().ok()?;
                (1..=9).contains(&digit).then(|| Control::MorphTo(digit - 1))
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
