pub mod area;
pub mod bridge;
pub mod chrome;
pub mod config;
pub mod control;
pub mod display;
pub mod error;
pub mod keymap;
pub mod phase;
pub mod protocol;
pub mod shell;

pub use area::ClockArea;
pub use bridge::{channel, GameLink, ShellLink};
pub use config::{KeyBinding, ShellConfig};
pub use control::{Control, ControlSet};
pub use display::{ClockDisplay, SegmentStyle};
pub use error::{Result, ShellError};
pub use keymap::{Key, KeyCombo, KeyIntent, Keymap, Modifiers, NamedKey};
pub use phase::Phase;
pub use protocol::{Command, Notification};
pub use shell::{Dispatch, Surface, WindowShell};
