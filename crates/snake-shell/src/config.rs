use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::control::Control;
use crate::display::{SegmentStyle, DEFAULT_DIGITS};
use crate::error::{Result, ShellError};

pub const CONFIG_ENV: &str = "SNAKE_SHELL_CONFIG";
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 180;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: String,
    pub action: String,
}

impl KeyBinding {
    pub fn new(key: &str, action: &str) -> Self {
        Self {
            key: key.to_string(),
            action: action.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub clock_digits: usize,
    pub segment_style: SegmentStyle,
    pub keybindings: Vec<KeyBinding>,
    /// Play time after which a round ends. `None` or 0 disables it.
    pub time_limit_secs: Option<u64>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            window_title: "My Snake Game".to_string(),
            window_size: [900.0, 640.0],
            clock_digits: DEFAULT_DIGITS,
            segment_style: SegmentStyle::Filled,
            keybindings: default_keybindings(),
            time_limit_secs: Some(DEFAULT_TIME_LIMIT_SECS),
        }
    }
}

pub fn default_keybindings() -> Vec<KeyBinding> {
    let mut bindings = vec![KeyBinding::new("Space", "toggle")];
    for control in Control::ALL {
        if let Some(key) = control.default_shortcut() {
            let action = format!("{control:?}").to_ascii_lowercase();
            bindings.push(KeyBinding::new(key, &action));
        }
    }
    bindings
}

impl ShellConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ShellError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| ShellError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded shell config");
        Ok(config)
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Config named by `SNAKE_SHELL_CONFIG`, or defaults when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(&PathBuf::from(path)),
            None => Ok(Self::default()),
        }
    }
}
