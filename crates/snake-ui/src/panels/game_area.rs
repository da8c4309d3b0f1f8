use egui::{Color32, RichText};
use snake_shell::Phase;

const BOARD_BG: Color32 = Color32::from_rgb(26, 30, 34);

/// Placeholder for the board; shows the lifecycle state and the next move.
pub fn draw_game_area(ui: &mut egui::Ui, phase: Phase) {
    egui::Frame::default()
        .fill(BOARD_BG)
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_min_size(ui.available_size());
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.4);
                ui.label(RichText::new(phase.name()).heading().color(Color32::from_gray(220)));
                let hint = match phase {
                    Phase::Reset => "Press Space or Start to play",
                    Phase::Running => "Press Space to pause",
                    Phase::Paused => "Press Space to resume",
                    Phase::Stopped => "Press Space or Reset to play again",
                };
                ui.label(RichText::new(hint).color(Color32::from_gray(170)));
            });
        });
}
