use eframe::egui::{RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the file summary bar, with the preamble lines when expanded.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong(state.source_name())
            .on_hover_text(state.capture.source.display().to_string());

        ui.separator();
        ui.label(format!("{} samples", state.capture.traces.len()));

        ui.separator();
        if ui
            .selectable_label(state.show_preamble, "Preamble")
            .clicked()
        {
            state.toggle_preamble();
        }
    });

    if state.show_preamble {
        ui.separator();
        if state.capture.preamble.is_empty() {
            ui.label("(empty)");
        }
        for line in &state.capture.preamble {
            ui.label(RichText::new(line).monospace());
        }
        ui.add_space(2.0);
    }
}
