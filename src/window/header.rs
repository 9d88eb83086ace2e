//! Header bar: quick-action buttons and the session title
//!
//! One button per configured action, in configuration order. Clicking a
//! button injects the action's command into the session; the dispatch has
//! no state of its own.

use crate::core::actions::ActionSpec;
use crate::terminal::TerminalSession;

/// Fire an action: inject its command into the session.
pub fn trigger_action(spec: &ActionSpec, session: &dyn TerminalSession) {
    session.inject(&spec.command);
}

/// Map well-known symbolic icon names onto a display glyph.
///
/// Icon names follow the freedesktop naming convention; anything unknown
/// falls back to a generic gear.
fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "system-run-symbolic" => "▶",
        "media-playback-start-symbolic" => "▶",
        "utilities-terminal-symbolic" => "🖳",
        "view-refresh-symbolic" => "⟳",
        "process-stop-symbolic" => "■",
        "edit-clear-symbolic" => "✕",
        "document-save-symbolic" => "💾",
        _ => "⚙",
    }
}

/// Render the header bar: action buttons on the left, title centered in the
/// remaining space.
pub fn show(
    ui: &mut egui::Ui,
    title: &str,
    actions: &[ActionSpec],
    session: &dyn TerminalSession,
) {
    ui.horizontal(|ui| {
        for action in actions {
            let clicked = ui
                .button(icon_glyph(&action.icon))
                .on_hover_text(&action.tooltip)
                .clicked();
            if clicked {
                trigger_action(action, session);
            }
        }

        ui.with_layout(
            egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
            |ui| {
                ui.label(egui::RichText::new(title).strong());
            },
        );
    });
}
