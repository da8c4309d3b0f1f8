pub mod button_panel;
pub mod clock;
pub mod game_area;
pub mod menu_bar;
pub mod toolbar;

use snake_shell::{chrome, Control, Dispatch, Surface, WindowShell};

/// Per-frame feedback from the control surfaces.
#[derive(Debug, Default)]
pub struct FrameEvents {
    pub hovered_tip: Option<&'static str>,
    pub dispatched: Vec<Dispatch>,
}

/// Draw one control as a button bound to the shell. Shared by every surface
/// so all of them read enablement the same way.
pub fn control_button(
    ui: &mut egui::Ui,
    shell: &mut WindowShell,
    control: Control,
    surface: Surface,
    shortcut: Option<String>,
    events: &mut FrameEvents,
) -> egui::Response {
    let enabled = shell.is_enabled(control, surface);
    let mut button = egui::Button::new(chrome::strip_mnemonic(control.label()));
    if let Some(hint) = shortcut {
        button = button.shortcut_text(hint);
    }
    let response = ui.add_enabled(enabled, button);
    if response.hovered() {
        events.hovered_tip = Some(shell.status_tip(control));
    }
    let response = response.on_hover_text(control.status_tip());
    if response.clicked() {
        match shell.trigger(control, surface) {
            Ok(dispatch) => events.dispatched.push(dispatch),
            Err(err) => tracing::error!(%control, "dispatch failed: {err}"),
        }
    }
    response
}
