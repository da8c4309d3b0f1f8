use serde::{Deserialize, Serialize};

/// Requests sent from the window to the game component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    LoadGame,
    SaveGame,
    StartGame,
    PauseGame,
    ResumeGame,
    ResetGame,
    /// Space bar. The game component decides what toggling means.
    ToggleState,
}

/// Events emitted by the game component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    GameResumed,
    GamePaused,
    GameReset,
    GameEnded,
    /// Elapsed play time in whole seconds.
    TimerUpdated(i64),
}
