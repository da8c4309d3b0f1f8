use eframe::egui;
use snake_shell::{Key, KeyCombo, Modifiers};

/// Translate this frame's key presses into shell key combos.
pub fn poll(ctx: &egui::Context) -> Vec<KeyCombo> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    modifiers,
                    ..
                } => translate(*key, *modifiers),
                _ => None,
            })
            .collect()
    })
}

pub fn translate(key: egui::Key, modifiers: egui::Modifiers) -> Option<KeyCombo> {
    let key = Key::parse(key.name())?;
    Some(KeyCombo {
        modifiers: Modifiers {
            command: modifiers.command,
            alt: modifiers.alt,
            shift: modifiers.shift,
        },
        key,
    })
}
