use snake_shell::chrome::{self, Entry};
use snake_shell::{KeyIntent, Surface, WindowShell};

use super::{control_button, FrameEvents};

pub fn draw_menu_bar(ui: &mut egui::Ui, shell: &mut WindowShell, events: &mut FrameEvents) {
    egui::menu::bar(ui, |ui| {
        for menu in chrome::menu_bar() {
            ui.menu_button(chrome::strip_mnemonic(menu.title), |ui| {
                for entry in &menu.entries {
                    match *entry {
                        Entry::Separator => {
                            ui.separator();
                        }
                        Entry::Action(control) => {
                            let hint = shell
                                .keymap()
                                .combo_for(KeyIntent::Trigger(control))
                                .map(|combo| combo.to_string());
                            if control_button(ui, shell, control, Surface::Menu, hint, events)
                                .clicked()
                            {
                                ui.close_menu();
                            }
                        }
                    }
                }
            });
        }
    });
}
