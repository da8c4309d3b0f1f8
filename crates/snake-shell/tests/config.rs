use std::io::Write;
use std::time::Duration;

use snake_shell::config::default_keybindings;
use snake_shell::{SegmentStyle, ShellConfig, ShellError};

#[test]
fn defaults_match_the_classic_window() {
    let config = ShellConfig::default();
    assert_eq!(config.window_title, "My Snake Game");
    assert_eq!(config.clock_digits, 5);
    assert_eq!(config.segment_style, SegmentStyle::Filled);
    assert_eq!(config.keybindings, default_keybindings());
    assert_eq!(config.time_limit(), Some(Duration::from_secs(180)));
}

#[test]
fn default_bindings_cover_toggle_and_shortcuts() {
    let bindings = default_keybindings();
    let actions: Vec<(&str, &str)> = bindings
        .iter()
        .map(|b| (b.key.as_str(), b.action.as_str()))
        .collect();
    assert_eq!(
        actions,
        vec![
            ("Space", "toggle"),
            ("CmdOrCtrl+O", "load"),
            ("CmdOrCtrl+S", "save"),
            ("CmdOrCtrl+Q", "exit"),
        ]
    );
}

#[test]
fn zero_time_limit_disables_it() {
    let config = ShellConfig {
        time_limit_secs: Some(0),
        ..ShellConfig::default()
    };
    assert_eq!(config.time_limit(), None);
}

#[test]
fn partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
window_title = "Snake"
segment_style = "flat"

[[keybindings]]
key = "Enter"
action = "toggle"
"#
    )
    .unwrap();

    let config = ShellConfig::load(file.path()).unwrap();
    assert_eq!(config.window_title, "Snake");
    assert_eq!(config.segment_style, SegmentStyle::Flat);
    assert_eq!(config.clock_digits, 5);
    assert_eq!(config.keybindings.len(), 1);
    assert_eq!(config.keybindings[0].action, "toggle");
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ShellConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ShellError::ConfigRead { .. }));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "clock_digits = \"five\"").unwrap();
    let err = ShellConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ShellError::ConfigParse { .. }));
}
