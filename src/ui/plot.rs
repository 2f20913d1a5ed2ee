use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::data::model::{Sample, Traces};
use crate::state::AppState;

pub const X_AXIS_LABEL: &str = "Seconds";
pub const Y_AXIS_LABEL: &str = "Volts";

// ---------------------------------------------------------------------------
// Capture plot (central panel)
// ---------------------------------------------------------------------------

/// Render `v1` and `v2` against time on shared axes.
pub fn capture_plot(ui: &mut Ui, state: &AppState) {
    let traces = &state.capture.traces;
    if traces.is_empty() {
        ui.label("No samples in capture");
    }

    let series = series_data(traces, state.colors.v1, state.colors.v2);

    Plot::new("capture_plot")
        .legend(Legend::default())
        .x_axis_label(X_AXIS_LABEL)
        .y_axis_label(Y_AXIS_LABEL)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (name, points, color) in series {
                let points = PlotPoints::new(points);
                plot_ui.line(Line::new(points).name(name).color(color).width(1.5));
            }
        });
}

/// Legend name, `[time, value]` points and colour for each series, `v1` first.
/// Both series are returned even when the capture has no samples.
fn series_data(
    traces: &Traces,
    v1_color: Color32,
    v2_color: Color32,
) -> [(&'static str, Vec<[f64; 2]>, Color32); 2] {
    let points = |pick: fn(&Sample) -> f64| -> Vec<[f64; 2]> {
        traces.iter().map(|s| [s.time, pick(&s)]).collect()
    };

    [
        ("v1", points(|s| s.v1), v1_color),
        ("v2", points(|s| s.v2), v2_color),
    ]
}
