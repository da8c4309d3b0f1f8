use proptest::prelude::*;
use snake_shell::{
    channel, Command, Control, Notification, Phase, ShellConfig, Surface, WindowShell,
};

fn notification() -> impl Strategy<Value = Notification> {
    prop_oneof![
        Just(Notification::GameResumed),
        Just(Notification::GamePaused),
        Just(Notification::GameReset),
        Just(Notification::GameEnded),
        (0i64..100_000).prop_map(Notification::TimerUpdated),
    ]
}

proptest! {
    #[test]
    fn surfaces_never_diverge(notes in prop::collection::vec(notification(), 0..40)) {
        let (link, game) = channel();
        let mut shell = WindowShell::new(&ShellConfig::default(), link).unwrap();

        let mut last_phase = Phase::Reset;
        for note in &notes {
            game.emit(*note);
            shell.pump();
            if let Some(phase) = Phase::from_notification(note) {
                last_phase = phase;
            }

            prop_assert_eq!(shell.phase(), last_phase);
            for control in Control::GATED {
                let expected = last_phase.enabled_controls().contains(control);
                prop_assert_eq!(shell.is_enabled(control, Surface::Menu), expected);
                prop_assert_eq!(shell.is_enabled(control, Surface::Toolbar), expected);
                prop_assert_eq!(shell.is_enabled(control, Surface::Button), expected);
            }
            prop_assert!(shell.is_enabled(Control::Exit, Surface::Button));
        }
    }

    #[test]
    fn toggle_always_reaches_the_game(notes in prop::collection::vec(notification(), 0..20)) {
        let (link, game) = channel();
        let mut shell = WindowShell::new(&ShellConfig::default(), link).unwrap();
        for note in notes {
            game.emit(note);
        }
        shell.pump();

        shell.toggle().unwrap();
        prop_assert_eq!(game.next_command(), Some(Command::ToggleState));
        prop_assert_eq!(game.next_command(), None);
    }
}
