//! Minimal game component: lifecycle and play clock, no board.

use std::time::Duration;

use crate::bridge::GameLink;
use crate::phase::Phase;
use crate::protocol::{Command, Notification};

/// Game component that drives the phase machine and the play clock.
/// A real simulation hooks in through [`ClockArea::end`].
pub struct ClockArea {
    link: GameLink,
    phase: Phase,
    elapsed: Duration,
    saved: Option<Duration>,
    time_limit: Option<Duration>,
}

impl ClockArea {
    pub fn new(link: GameLink) -> Self {
        Self {
            link,
            phase: Phase::Reset,
            elapsed: Duration::ZERO,
            saved: None,
            time_limit: None,
        }
    }

    /// End each round after `limit` of play time.
    pub fn with_time_limit(mut self, limit: Option<Duration>) -> Self {
        self.time_limit = limit.filter(|limit| !limit.is_zero());
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Handle all queued commands. Returns how many were read.
    pub fn process(&mut self) -> usize {
        let mut handled = 0;
        while let Some(command) = self.link.next_command() {
            self.handle(command);
            handled += 1;
        }
        handled
    }

    pub fn handle(&mut self, command: Command) {
        match (command, self.phase) {
            (Command::StartGame, Phase::Reset) => self.enter(Phase::Running),
            (Command::PauseGame, Phase::Running) => self.enter(Phase::Paused),
            (Command::ResumeGame, Phase::Paused) => self.enter(Phase::Running),
            (Command::ResetGame, Phase::Paused | Phase::Stopped) => self.reset(),
            (Command::SaveGame, Phase::Paused) => {
                self.saved = Some(self.elapsed);
                tracing::info!(elapsed = self.elapsed.as_secs(), "game saved");
            }
            (Command::LoadGame, Phase::Reset) => self.load(),
            (Command::ToggleState, phase) => self.handle(match phase {
                Phase::Reset => Command::StartGame,
                Phase::Running => Command::PauseGame,
                Phase::Paused => Command::ResumeGame,
                Phase::Stopped => Command::ResetGame,
            }),
            (command, phase) => {
                tracing::debug!(?command, ?phase, "command not valid in this phase");
            }
        }
    }

    /// Game over. Only meaningful while a game is in progress.
    pub fn end(&mut self) {
        if matches!(self.phase, Phase::Running | Phase::Paused) {
            self.enter(Phase::Stopped);
        }
    }

    /// Advance the play clock. Emits the new whole-second count when it
    /// changes and ends the game once the time limit is reached.
    pub fn advance(&mut self, dt: Duration) {
        if self.phase != Phase::Running {
            return;
        }
        let before = self.elapsed.as_secs();
        self.elapsed += dt;
        if let Some(limit) = self.time_limit {
            self.elapsed = self.elapsed.min(limit);
        }
        let after = self.elapsed.as_secs();
        if after > before {
            self.link.emit(Notification::TimerUpdated(after as i64));
        }
        if self.time_limit.is_some_and(|limit| self.elapsed >= limit) {
            tracing::info!(elapsed = after, "time limit reached");
            self.end();
        }
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        let notification = match phase {
            Phase::Reset => Notification::GameReset,
            Phase::Running => Notification::GameResumed,
            Phase::Paused => Notification::GamePaused,
            Phase::Stopped => Notification::GameEnded,
        };
        self.link.emit(notification);
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.enter(Phase::Reset);
        self.link.emit(Notification::TimerUpdated(0));
    }

    fn load(&mut self) {
        let Some(saved) = self.saved else {
            tracing::info!("no saved game to load");
            return;
        };
        self.elapsed = saved;
        self.enter(Phase::Paused);
        self.link.emit(Notification::TimerUpdated(saved.as_secs() as i64));
    }
}
