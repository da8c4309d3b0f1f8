use snake_shell::chrome::{self, Entry};
use snake_shell::{Surface, WindowShell};

use super::{control_button, FrameEvents};

pub fn draw_toolbar(ui: &mut egui::Ui, shell: &mut WindowShell, events: &mut FrameEvents) {
    ui.horizontal(|ui| {
        for entry in chrome::toolbar() {
            match entry {
                Entry::Separator => {
                    ui.separator();
                }
                Entry::Action(control) => {
                    control_button(ui, shell, control, Surface::Toolbar, None, events);
                }
            }
        }
    });
}
