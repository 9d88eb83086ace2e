//! Window layer - thin egui binding around the core
//!
//! Owns the session handle and all UI state. Each frame drains the
//! application event channel, feeds PTY output through the stream parser,
//! and drives the title state machine into the viewport title.

mod header;

use crate::core::config::SessionConfig;
use crate::core::events::{AppEvent, EventSender};
use crate::core::title::{TitleSync, APP_NAME};
use crate::pty::{PtySession, SessionLauncher};
use crate::terminal::{StreamEvent, StreamParser};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Default colors when no palette is configured, per theme.
fn theme_colors(dark_theme: bool) -> (egui::Color32, egui::Color32) {
    if dark_theme {
        (
            egui::Color32::from_rgb(220, 220, 220),
            egui::Color32::from_rgb(30, 30, 30),
        )
    } else {
        (
            egui::Color32::from_rgb(30, 30, 30),
            egui::Color32::from_rgb(250, 250, 250),
        )
    }
}

/// Resolve the (foreground, background) rendering colors for a config.
fn palette_colors(config: &SessionConfig) -> (egui::Color32, egui::Color32) {
    match config.palette {
        Some(palette) => (
            palette.foreground.to_color32(),
            palette.background.to_color32(),
        ),
        None => theme_colors(config.dark_theme),
    }
}

/// Apply the configured color scheme to the UI. Called once at startup.
fn apply_theme(ctx: &egui::Context, dark_theme: bool) {
    if dark_theme {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }
}

/// Main window: header bar with quick actions, terminal output below.
pub struct TerminalWindow {
    config: SessionConfig,
    session: Arc<PtySession>,
    events: mpsc::UnboundedReceiver<AppEvent>,
    parser: StreamParser,
    title: TitleSync,
    /// Set when the child could not be started; the window stays up as an
    /// inert session showing the error.
    spawn_error: Option<String>,
    /// Last (rows, cols) grid reported to the PTY.
    last_grid: (u16, u16),
}

impl TerminalWindow {
    pub fn new(
        config: SessionConfig,
        session: Arc<PtySession>,
        events: mpsc::UnboundedReceiver<AppEvent>,
    ) -> Self {
        Self {
            config,
            session,
            events,
            parser: StreamParser::new(),
            title: TitleSync::new(),
            spawn_error: None,
            last_grid: (0, 0),
        }
    }

    fn set_window_title(&self, ctx: &egui::Context) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(
            self.title.current().to_string(),
        ));
    }

    fn drain_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                AppEvent::SessionStarted => {
                    info!("Session started");
                }
                AppEvent::SpawnFailed(error) => {
                    self.spawn_error = Some(error);
                }
                AppEvent::PtyOutput(data) => {
                    for stream_event in self.parser.feed(&data) {
                        match stream_event {
                            StreamEvent::TitleChanged(new_title) => {
                                self.title.on_title_changed(&new_title);
                                self.set_window_title(ctx);
                            }
                            StreamEvent::Bell => debug!("Bell"),
                        }
                    }
                }
                AppEvent::ChildExited(code) => {
                    info!("Child exited with code {:?}", code);
                    self.title.on_child_exited(code);
                    self.set_window_title(ctx);
                }
            }
        }
    }

    /// Keep the PTY grid in sync with the available panel size.
    fn sync_grid_size(&mut self, ui: &egui::Ui) {
        let font_id = egui::FontId::monospace(self.config.font_size);
        let (char_width, row_height) =
            ui.fonts(|fonts| (fonts.glyph_width(&font_id, 'M'), fonts.row_height(&font_id)));

        let avail = ui.available_size();
        let cols = (avail.x / char_width.max(1.0)).floor().max(20.0) as u16;
        let rows = (avail.y / row_height.max(1.0)).floor().max(5.0) as u16;

        if (rows, cols) != self.last_grid {
            self.session.resize(rows, cols);
            self.last_grid = (rows, cols);
        }
    }
}

impl eframe::App for TerminalWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events(ctx);

        let (fg, bg) = palette_colors(&self.config);
        let font_size = self.config.font_size;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            header::show(
                ui,
                self.title.current(),
                &self.config.actions,
                self.session.as_ref(),
            );
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(bg))
            .show(ctx, |ui| {
                if let Some(error) = self.spawn_error.clone() {
                    ui.colored_label(
                        ui.visuals().warn_fg_color,
                        format!("Failed to start session: {}", error),
                    );
                    return;
                }

                self.sync_grid_size(ui);

                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in self.parser.display_lines() {
                            ui.label(
                                egui::RichText::new(line)
                                    .monospace()
                                    .size(font_size)
                                    .color(fg),
                            );
                        }
                    });
            });
    }
}

/// Create the window, launch the session, and run the event loop until the
/// window is closed.
pub fn run(config: SessionConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 450.0])
            .with_title(APP_NAME),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            apply_theme(&cc.egui_ctx, config.dark_theme);

            let (tx, rx) = mpsc::unbounded_channel();
            let events = EventSender::new(tx, cc.egui_ctx.clone());
            let session = Arc::new(SessionLauncher::spawn(&config, events));

            Ok(Box::new(TerminalWindow::new(config, session, rx)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Event loop error: {e}"))
}
