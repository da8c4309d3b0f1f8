use std::time::Duration;

use snake_shell::{
    channel, ClockArea, Command, Control, Notification, Phase, ShellConfig, ShellLink, Surface,
    WindowShell,
};

fn area() -> (ClockArea, ShellLink) {
    let (shell_link, game_link) = channel();
    (ClockArea::new(game_link), shell_link)
}

#[test]
fn start_pause_resume_cycle() {
    let (mut area, shell) = area();

    area.handle(Command::StartGame);
    area.handle(Command::PauseGame);
    area.handle(Command::ResumeGame);

    assert_eq!(area.phase(), Phase::Running);
    assert_eq!(
        shell.drain(),
        vec![
            Notification::GameResumed,
            Notification::GamePaused,
            Notification::GameResumed,
        ]
    );
}

#[test]
fn toggle_walks_the_lifecycle() {
    let (mut area, shell) = area();

    area.handle(Command::ToggleState);
    assert_eq!(area.phase(), Phase::Running);
    area.handle(Command::ToggleState);
    assert_eq!(area.phase(), Phase::Paused);
    area.handle(Command::ToggleState);
    assert_eq!(area.phase(), Phase::Running);

    area.end();
    assert_eq!(area.phase(), Phase::Stopped);
    area.handle(Command::ToggleState);
    assert_eq!(area.phase(), Phase::Reset);

    let notes = shell.drain();
    assert_eq!(notes[3], Notification::GameEnded);
    assert_eq!(notes[4], Notification::GameReset);
}

#[test]
fn invalid_commands_are_ignored() {
    let (mut area, shell) = area();
    area.handle(Command::PauseGame);
    area.handle(Command::ResumeGame);
    area.handle(Command::ResetGame);
    area.handle(Command::SaveGame);
    area.end();
    assert_eq!(area.phase(), Phase::Reset);
    assert!(shell.drain().is_empty());
}

#[test]
fn clock_ticks_only_while_running() {
    let (mut area, shell) = area();

    area.advance(Duration::from_secs(5));
    assert_eq!(area.elapsed(), Duration::ZERO);

    area.handle(Command::StartGame);
    area.advance(Duration::from_millis(600));
    area.advance(Duration::from_millis(600));
    area.advance(Duration::from_millis(1900));
    area.handle(Command::PauseGame);
    area.advance(Duration::from_secs(10));

    assert_eq!(area.elapsed(), Duration::from_millis(3100));
    assert_eq!(
        shell.drain(),
        vec![
            Notification::GameResumed,
            Notification::TimerUpdated(1),
            Notification::TimerUpdated(3),
            Notification::GamePaused,
        ]
    );
}

#[test]
fn long_frame_reports_only_the_latest_second() {
    let (mut area, shell) = area();
    area.handle(Command::StartGame);
    shell.drain();

    area.advance(Duration::from_secs(10_000));
    assert_eq!(shell.drain(), vec![Notification::TimerUpdated(10_000)]);
}

#[test]
fn time_limit_ends_the_round() {
    let (shell, game_link) = channel();
    let mut area = ClockArea::new(game_link).with_time_limit(Some(Duration::from_secs(5)));

    area.handle(Command::StartGame);
    area.advance(Duration::from_secs(3));
    assert_eq!(area.phase(), Phase::Running);
    area.advance(Duration::from_secs(10));

    assert_eq!(area.phase(), Phase::Stopped);
    assert_eq!(area.elapsed(), Duration::from_secs(5));
    assert_eq!(
        shell.drain(),
        vec![
            Notification::GameResumed,
            Notification::TimerUpdated(3),
            Notification::TimerUpdated(5),
            Notification::GameEnded,
        ]
    );
}

#[test]
fn zero_time_limit_never_ends() {
    let (shell, game_link) = channel();
    let mut area = ClockArea::new(game_link).with_time_limit(Some(Duration::ZERO));

    area.handle(Command::StartGame);
    area.advance(Duration::from_secs(60));
    assert_eq!(area.phase(), Phase::Running);
    assert!(!shell.drain().contains(&Notification::GameEnded));
}

#[test]
fn reset_zeroes_the_clock() {
    let (mut area, shell) = area();
    area.handle(Command::StartGame);
    area.advance(Duration::from_secs(2));
    area.handle(Command::PauseGame);
    shell.drain();

    area.handle(Command::ResetGame);
    assert_eq!(area.elapsed(), Duration::ZERO);
    assert_eq!(
        shell.drain(),
        vec![Notification::GameReset, Notification::TimerUpdated(0)]
    );
}

#[test]
fn save_then_load_restores_paused_game() {
    let (mut area, shell) = area();

    area.handle(Command::LoadGame);
    assert!(shell.drain().is_empty(), "nothing saved yet");

    area.handle(Command::StartGame);
    area.advance(Duration::from_secs(4));
    area.handle(Command::PauseGame);
    area.handle(Command::SaveGame);
    area.handle(Command::ResetGame);
    shell.drain();

    area.handle(Command::LoadGame);
    assert_eq!(area.phase(), Phase::Paused);
    assert_eq!(area.elapsed(), Duration::from_secs(4));
    assert_eq!(
        shell.drain(),
        vec![Notification::GamePaused, Notification::TimerUpdated(4)]
    );
}

#[test]
fn shell_and_area_end_to_end() {
    let (shell_link, game_link) = channel();
    let mut shell = WindowShell::new(&ShellConfig::default(), shell_link).unwrap();
    let mut area = ClockArea::new(game_link);

    shell.trigger(Control::Start, Surface::Button).unwrap();
    assert_eq!(area.process(), 1);
    area.advance(Duration::from_secs(12));
    shell.pump();
    assert_eq!(shell.phase(), Phase::Running);
    assert_eq!(shell.clock().text(), "   12");

    shell.toggle().unwrap();
    area.process();
    shell.pump();
    assert_eq!(shell.phase(), Phase::Paused);
    assert!(shell.is_enabled(Control::Save, Surface::Menu));

    area.end();
    shell.pump();
    assert_eq!(shell.phase(), Phase::Stopped);
    assert!(shell.is_enabled(Control::Reset, Surface::Button));

    shell.trigger(Control::Reset, Surface::Toolbar).unwrap();
    area.process();
    shell.pump();
    assert_eq!(shell.phase(), Phase::Reset);
    assert_eq!(shell.clock().value(), 0);
}
