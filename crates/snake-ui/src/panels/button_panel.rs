use snake_shell::{chrome, Surface, WindowShell};

use super::{control_button, FrameEvents};

const BUTTON_HEIGHT: f32 = 36.0;

pub fn draw_button_panel(ui: &mut egui::Ui, shell: &mut WindowShell, events: &mut FrameEvents) {
    ui.vertical_centered_justified(|ui| {
        ui.spacing_mut().interact_size.y = BUTTON_HEIGHT;
        for control in chrome::button_panel() {
            control_button(ui, shell, control, Surface::Button, None, events);
            ui.add_space(4.0);
        }
    });
}
