mod input;
mod panels;

use std::time::{Duration, Instant};

use anyhow::Result;
use eframe::egui::{self, Color32, RichText};
use tracing_subscriber::EnvFilter;

use crate::panels::button_panel::draw_button_panel;
use crate::panels::clock::draw_clock;
use crate::panels::game_area::draw_game_area;
use crate::panels::menu_bar::draw_menu_bar;
use crate::panels::toolbar::draw_toolbar;
use crate::panels::FrameEvents;
use snake_shell::{ClockArea, ShellConfig, WindowShell};

const SIDE_PANEL_WIDTH: f32 = 160.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ShellConfig::from_env()?;
    let (shell_link, game_link) = snake_shell::channel();
    let shell = WindowShell::new(&config, shell_link)?;
    let area = ClockArea::new(game_link).with_time_limit(config.time_limit());
    let title = shell.title().to_string();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    tracing::info!(%title, "starting window");
    eframe::run_native(
        &title,
        options,
        Box::new(move |_| Ok(Box::new(SnakeWindowApp::new(shell, area)))),
    )
    .map_err(|err| anyhow::anyhow!("eframe run failed: {err}"))
}

struct SnakeWindowApp {
    shell: WindowShell,
    area: ClockArea,
    last_tick: Instant,
    status_tip: Option<&'static str>,
}

impl SnakeWindowApp {
    fn new(shell: WindowShell, area: ClockArea) -> Self {
        Self {
            shell,
            area,
            last_tick: Instant::now(),
            status_tip: None,
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        for combo in input::poll(ctx) {
            if let Err(err) = self.shell.key_press(&combo) {
                tracing::error!(%combo, "key dispatch failed: {err}");
            }
        }
        if ctx.input(|i| i.viewport().close_requested()) {
            self.shell.exit();
        }
    }

    /// Let the game component consume commands and advance, then mirror its
    /// notifications into the controls.
    fn tick_game(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_tick;
        self.last_tick = now;

        self.area.process();
        self.area.advance(dt);
        self.shell.pump();
    }
}

impl eframe::App for SnakeWindowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        self.tick_game();

        let mut events = FrameEvents::default();

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            draw_menu_bar(ui, &mut self.shell, &mut events);
        });

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            draw_toolbar(ui, &mut self.shell, &mut events);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let text = self.status_tip.unwrap_or(self.shell.phase().name());
                ui.label(RichText::new(text).color(Color32::from_gray(170)));
            });
        });

        egui::SidePanel::right("controls")
            .resizable(false)
            .exact_width(SIDE_PANEL_WIDTH)
            .show(ctx, |ui| {
                draw_clock(ui, self.shell.clock());
                ui.add_space(12.0);
                draw_button_panel(ui, &mut self.shell, &mut events);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            draw_game_area(ui, self.shell.phase());
        });

        self.status_tip = events.hovered_tip;
        if !events.dispatched.is_empty() {
            tracing::debug!(dispatched = ?events.dispatched, "frame dispatches");
        }

        // Commands issued this frame are seen by the game on the next tick.
        if !self.shell.is_open() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        ctx.request_repaint_after(Duration::from_millis(16));
    }
}
