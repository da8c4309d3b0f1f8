//! Key combination parsing and lookup.
//!
//! Combos are written as `Modifier+Modifier+Key`, e.g. `Space`, `Ctrl+O`,
//! `CmdOrCtrl+Shift+S`. `Ctrl`, `Cmd`, `Super` and `CmdOrCtrl` all name the
//! platform command modifier.

use std::collections::HashMap;
use std::fmt;

use crate::config::KeyBinding;
use crate::control::Control;
use crate::error::{Result, ShellError};

const COMMAND_LABEL: &str = if cfg!(target_os = "macos") { "Cmd" } else { "Ctrl" };

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub command: bool,
    pub alt: bool,
    pub shift: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    F(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Stored lowercased.
    Character(char),
    Named(NamedKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub modifiers: Modifiers,
    pub key: Key,
}

impl KeyCombo {
    pub fn plain(key: Key) -> Self {
        Self {
            modifiers: Modifiers::default(),
            key,
        }
    }

    pub fn command(ch: char) -> Self {
        Self {
            modifiers: Modifiers {
                command: true,
                ..Modifiers::default()
            },
            key: Key::Character(ch.to_ascii_lowercase()),
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if self.modifiers.command {
            parts.push(COMMAND_LABEL.into());
        }
        if self.modifiers.alt {
            parts.push("Alt".into());
        }
        if self.modifiers.shift {
            parts.push("Shift".into());
        }
        match self.key {
            Key::Character(c) => parts.push(c.to_ascii_uppercase().to_string()),
            Key::Named(NamedKey::F(n)) => parts.push(format!("F{n}")),
            Key::Named(named) => parts.push(format!("{named:?}")),
        }
        write!(f, "{}", parts.join("+"))
    }
}

pub fn parse_key_combo(s: &str) -> Result<KeyCombo> {
    let invalid = |reason: &str| ShellError::KeyBinding {
        key: s.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = s.split('+').map(str::trim).collect();
    let Some((key_part, modifier_parts)) = parts.split_last() else {
        return Err(invalid("empty key combination"));
    };

    let mut modifiers = Modifiers::default();
    for part in modifier_parts {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" | "cmd" | "command" | "super" | "meta" | "cmdorctrl" => {
                modifiers.command = true
            }
            "alt" | "option" => modifiers.alt = true,
            "shift" => modifiers.shift = true,
            "" => return Err(invalid("empty modifier")),
            _ => return Err(invalid(&format!("unknown modifier '{part}'"))),
        }
    }

    let key = Key::parse(key_part).ok_or_else(|| invalid(&format!("unknown key '{key_part}'")))?;
    Ok(KeyCombo { modifiers, key })
}

impl Key {
    /// Parse a single key name: `A`, `7`, `Space`, `Esc`, `F1`..`F12`.
    pub fn parse(s: &str) -> Option<Key> {
        let mut chars = s.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return ch
                .is_ascii_graphic()
                .then(|| Key::Character(ch.to_ascii_lowercase()));
        }

        let lower = s.to_ascii_lowercase();
        let named = match lower.as_str() {
            "space" => NamedKey::Space,
            "enter" | "return" => NamedKey::Enter,
            "escape" | "esc" => NamedKey::Escape,
            "tab" => NamedKey::Tab,
            "backspace" => NamedKey::Backspace,
            _ => {
                let n: u8 = lower.strip_prefix('f')?.parse().ok()?;
                if !(1..=12).contains(&n) {
                    return None;
                }
                NamedKey::F(n)
            }
        };
        Some(Key::Named(named))
    }
}

/// What a bound key asks the window to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Toggle,
    Trigger(Control),
}

impl KeyIntent {
    pub fn from_name(name: &str) -> Option<Self> {
        if name.trim().eq_ignore_ascii_case("toggle") {
            return Some(Self::Toggle);
        }
        Control::from_name(name).map(Self::Trigger)
    }
}

#[derive(Debug, Default, Clone)]
pub struct Keymap {
    bindings: HashMap<KeyCombo, KeyIntent>,
}

impl Keymap {
    pub fn from_bindings(bindings: &[KeyBinding]) -> Result<Self> {
        let mut map = Self::default();
        for binding in bindings {
            let combo = parse_key_combo(&binding.key)?;
            let intent = KeyIntent::from_name(&binding.action)
                .ok_or_else(|| ShellError::UnknownAction(binding.action.clone()))?;
            if let Some(previous) = map.bindings.insert(combo, intent) {
                tracing::warn!(%combo, ?previous, ?intent, "key binding overridden");
            }
        }
        tracing::debug!(count = map.bindings.len(), "keymap built");
        Ok(map)
    }

    pub fn lookup(&self, combo: &KeyCombo) -> Option<KeyIntent> {
        self.bindings.get(combo).copied()
    }

    /// First combo bound to `intent`, for menu hints.
    pub fn combo_for(&self, intent: KeyIntent) -> Option<KeyCombo> {
        let mut combos: Vec<KeyCombo> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == intent)
            .map(|(combo, _)| *combo)
            .collect();
        combos.sort_by_key(|combo| combo.to_string());
        combos.into_iter().next()
    }
}
