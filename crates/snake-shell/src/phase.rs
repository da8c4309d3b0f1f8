use serde::{Deserialize, Serialize};

use crate::control::{Control, ControlSet};
use crate::protocol::Notification;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Idle: nothing played yet, or the game was reset.
    #[default]
    Reset,
    Running,
    Paused,
    Stopped,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Self::Reset, Self::Running, Self::Paused, Self::Stopped];

    /// Gated controls enabled in this phase. Exit is never gated.
    pub fn enabled_controls(self) -> ControlSet {
        match self {
            Self::Reset => ControlSet::from([Control::Load, Control::Start]),
            Self::Running => ControlSet::from([Control::Pause]),
            Self::Paused => ControlSet::from([Control::Save, Control::Resume, Control::Reset]),
            Self::Stopped => ControlSet::from([Control::Reset]),
        }
    }

    pub fn from_notification(notification: &Notification) -> Option<Self> {
        match notification {
            Notification::GameResumed => Some(Self::Running),
            Notification::GamePaused => Some(Self::Paused),
            Notification::GameReset => Some(Self::Reset),
            Notification::GameEnded => Some(Self::Stopped),
            Notification::TimerUpdated(_) => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Reset => "Ready",
            Self::Running => "Running",
            Self::Paused => "Paused",
            Self::Stopped => "Game Over",
        }
    }
}
