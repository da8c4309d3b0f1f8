//! Command/notification channel between the window and the game component.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::error::{Result, ShellError};
use crate::protocol::{Command, Notification};

/// Create a connected pair of endpoints.
pub fn channel() -> (ShellLink, GameLink) {
    let (command_tx, command_rx) = mpsc::channel();
    let (notify_tx, notify_rx) = mpsc::channel();
    (
        ShellLink {
            commands: command_tx,
            notifications: notify_rx,
        },
        GameLink {
            commands: command_rx,
            notifications: notify_tx,
        },
    )
}

/// Window side: sends commands, receives notifications.
pub struct ShellLink {
    commands: Sender<Command>,
    notifications: Receiver<Notification>,
}

impl ShellLink {
    pub fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| ShellError::Disconnected)
    }

    /// All notifications queued so far, oldest first. Never blocks.
    pub fn drain(&self) -> Vec<Notification> {
        self.notifications.try_iter().collect()
    }
}

/// Game side: receives commands, emits notifications.
pub struct GameLink {
    commands: Receiver<Command>,
    notifications: Sender<Notification>,
}

impl GameLink {
    pub fn next_command(&self) -> Option<Command> {
        self.commands.try_recv().ok()
    }

    pub fn emit(&self, notification: Notification) {
        if self.notifications.send(notification).is_err() {
            tracing::debug!(?notification, "window closed, dropping notification");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_and_notifications_keep_order() {
        let (shell, game) = channel();
        shell.send(Command::StartGame).unwrap();
        shell.send(Command::PauseGame).unwrap();
        assert_eq!(game.next_command(), Some(Command::StartGame));
        assert_eq!(game.next_command(), Some(Command::PauseGame));
        assert_eq!(game.next_command(), None);

        game.emit(Notification::GameResumed);
        game.emit(Notification::TimerUpdated(1));
        assert_eq!(
            shell.drain(),
            vec![Notification::GameResumed, Notification::TimerUpdated(1)]
        );
        assert!(shell.drain().is_empty());
    }

    #[test]
    fn send_fails_once_game_side_is_dropped() {
        let (shell, game) = channel();
        drop(game);
        assert!(matches!(
            shell.send(Command::ToggleState),
            Err(ShellError::Disconnected)
        ));
    }
}
