use std::fmt;

use serde::{Deserialize, Serialize};

use crate::protocol::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    Load,
    Save,
    Start,
    Pause,
    Resume,
    Reset,
    Exit,
}

impl Control {
    pub const ALL: [Control; 7] = [
        Self::Load,
        Self::Save,
        Self::Start,
        Self::Pause,
        Self::Resume,
        Self::Reset,
        Self::Exit,
    ];

    /// Controls whose enablement follows the game phase.
    pub const GATED: [Control; 6] = [
        Self::Load,
        Self::Save,
        Self::Start,
        Self::Pause,
        Self::Resume,
        Self::Reset,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::Load => 0,
            Self::Save => 1,
            Self::Start => 2,
            Self::Pause => 3,
            Self::Resume => 4,
            Self::Reset => 5,
            Self::Exit => 6,
        }
    }

    /// Command forwarded to the game component. Exit is handled by the shell.
    pub fn command(self) -> Option<Command> {
        match self {
            Self::Load => Some(Command::LoadGame),
            Self::Save => Some(Command::SaveGame),
            Self::Start => Some(Command::StartGame),
            Self::Pause => Some(Command::PauseGame),
            Self::Resume => Some(Command::ResumeGame),
            Self::Reset => Some(Command::ResetGame),
            Self::Exit => None,
        }
    }

    pub fn is_gated(self) -> bool {
        self != Self::Exit
    }

    /// Label with `&` marking the keyboard accelerator.
    pub fn label(self) -> &'static str {
        match self {
            Self::Load => "&Load...",
            Self::Save => "&Save...",
            Self::Start => "Start",
            Self::Pause => "Pause",
            Self::Resume => "Resume",
            Self::Reset => "&Reset",
            Self::Exit => "&Exit",
        }
    }

    /// Alt accelerator taken from the `&` marker in the label.
    pub fn mnemonic(self) -> Option<char> {
        crate::chrome::mnemonic(self.label())
    }

    /// Control whose label carries `key` as its accelerator.
    pub fn from_mnemonic(key: char) -> Option<Self> {
        let key = key.to_ascii_lowercase();
        Self::ALL.into_iter().find(|c| c.mnemonic() == Some(key))
    }

    pub fn status_tip(self) -> &'static str {
        match self {
            Self::Load => "Open a saved game",
            Self::Save => "Save the current game state to disk",
            Self::Start => "Begin the game",
            Self::Pause => "Pause the game",
            Self::Resume => "Continue the game",
            Self::Reset => "Reset the game and restore to default state",
            Self::Exit => "Exit the application",
        }
    }

    /// Default shortcut, in the keymap's combo syntax.
    pub fn default_shortcut(self) -> Option<&'static str> {
        match self {
            Self::Load => Some("CmdOrCtrl+O"),
            Self::Save => Some("CmdOrCtrl+S"),
            Self::Exit => Some("CmdOrCtrl+Q"),
            _ => None,
        }
    }

    /// Parse a config action name (`load`, `save`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "load" | "open" => Some(Self::Load),
            "save" => Some(Self::Save),
            "start" => Some(Self::Start),
            "pause" => Some(Self::Pause),
            "resume" => Some(Self::Resume),
            "reset" => Some(Self::Reset),
            "exit" | "quit" => Some(Self::Exit),
            _ => None,
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(crate::chrome::strip_mnemonic(self.label()).trim_end_matches("..."))
    }
}

/// Bit set over [`Control`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ControlSet(u8);

impl ControlSet {
    pub const EMPTY: ControlSet = ControlSet(0);

    pub fn contains(self, control: Control) -> bool {
        self.0 & Self::bit(control) != 0
    }

    pub fn insert(&mut self, control: Control) {
        self.0 |= Self::bit(control);
    }

    pub fn remove(&mut self, control: Control) {
        self.0 &= !Self::bit(control);
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Control> {
        Control::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    fn bit(control: Control) -> u8 {
        1 << control.index()
    }
}

impl FromIterator<Control> for ControlSet {
    fn from_iter<I: IntoIterator<Item = Control>>(iter: I) -> Self {
        let mut set = ControlSet::EMPTY;
        for control in iter {
            set.insert(control);
        }
        set
    }
}

impl<const N: usize> From<[Control; N]> for ControlSet {
    fn from(controls: [Control; N]) -> Self {
        controls.into_iter().collect()
    }
}
