use crate::bridge::ShellLink;
use crate::config::ShellConfig;
use crate::control::{Control, ControlSet};
use crate::display::ClockDisplay;
use crate::error::Result;
use crate::keymap::{Key, KeyCombo, KeyIntent, Keymap, Modifiers};
use crate::phase::Phase;
use crate::protocol::{Command, Notification};

/// Where a control was activated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Menu,
    Toolbar,
    Button,
    Shortcut,
}

/// Outcome of a user intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Sent(Command),
    /// Control is disabled in the current phase.
    Ignored,
    Closed,
    /// No binding for the key.
    Unhandled,
}

/// Window chrome state: mirrors the game phase into control enablement and
/// forwards user intents to the game component.
pub struct WindowShell {
    link: ShellLink,
    title: String,
    phase: Phase,
    // Shared by menu, toolbar and button panel.
    enabled: ControlSet,
    clock: ClockDisplay,
    keymap: Keymap,
    open: bool,
}

impl WindowShell {
    pub fn new(config: &ShellConfig, link: ShellLink) -> Result<Self> {
        let keymap = Keymap::from_bindings(&config.keybindings)?;
        let phase = Phase::default();
        Ok(Self {
            link,
            title: config.window_title.clone(),
            phase,
            enabled: phase.enabled_controls(),
            clock: ClockDisplay::new(config.clock_digits, config.segment_style),
            keymap,
            open: true,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn clock(&self) -> &ClockDisplay {
        &self.clock
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Every surface reads the same set, so menu, toolbar and buttons agree.
    pub fn is_enabled(&self, control: Control, _surface: Surface) -> bool {
        !control.is_gated() || self.enabled.contains(control)
    }

    pub fn enabled_controls(&self) -> ControlSet {
        self.enabled
    }

    pub fn status_tip(&self, control: Control) -> &'static str {
        control.status_tip()
    }

    pub fn trigger(&mut self, control: Control, surface: Surface) -> Result<Dispatch> {
        if control == Control::Exit {
            self.exit();
            return Ok(Dispatch::Closed);
        }
        if !self.is_enabled(control, surface) {
            tracing::debug!(%control, ?surface, phase = ?self.phase, "ignoring disabled control");
            return Ok(Dispatch::Ignored);
        }
        let Some(command) = control.command() else {
            return Ok(Dispatch::Ignored);
        };
        tracing::debug!(%control, ?surface, ?command, "dispatching");
        self.link.send(command)?;
        Ok(Dispatch::Sent(command))
    }

    /// Forwarded in every phase; the game component interprets it.
    pub fn toggle(&mut self) -> Result<Dispatch> {
        self.link.send(Command::ToggleState)?;
        Ok(Dispatch::Sent(Command::ToggleState))
    }

    /// Configured bindings win; otherwise Alt+<letter> fires the control
    /// whose label marks that letter as its accelerator.
    pub fn key_press(&mut self, combo: &KeyCombo) -> Result<Dispatch> {
        match self.keymap.lookup(combo) {
            Some(KeyIntent::Toggle) => self.toggle(),
            Some(KeyIntent::Trigger(control)) => self.trigger(control, Surface::Shortcut),
            None => match accelerator(combo) {
                Some(control) => self.trigger(control, Surface::Shortcut),
                None => Ok(Dispatch::Unhandled),
            },
        }
    }

    pub fn exit(&mut self) {
        if self.open {
            tracing::info!(phase = ?self.phase, "closing window");
        }
        self.open = false;
    }

    pub fn apply(&mut self, notification: &Notification) {
        if let Notification::TimerUpdated(elapsed) = notification {
            self.clock.display(*elapsed);
            return;
        }
        if let Some(phase) = Phase::from_notification(notification) {
            tracing::debug!(from = ?self.phase, to = ?phase, "phase changed");
            self.phase = phase;
            self.enabled = phase.enabled_controls();
        }
    }

    /// Apply every queued notification in arrival order.
    pub fn pump(&mut self) -> usize {
        let pending = self.link.drain();
        for notification in &pending {
            self.apply(notification);
        }
        pending.len()
    }
}

fn accelerator(combo: &KeyCombo) -> Option<Control> {
    let alt_only = Modifiers {
        alt: true,
        ..Modifiers::default()
    };
    match combo.key {
        Key::Character(ch) if combo.modifiers == alt_only => Control::from_mnemonic(ch),
        _ => None,
    }
}
