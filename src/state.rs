use crate::color::SeriesColors;
use crate::data::model::Capture;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The capture being viewed. Loaded before the window opens.
    pub capture: Capture,

    /// Colours for the two plotted series.
    pub colors: SeriesColors,

    /// Whether the preamble lines are expanded in the top bar.
    pub show_preamble: bool,
}

impl AppState {
    pub fn new(capture: Capture) -> Self {
        Self {
            capture,
            colors: SeriesColors::default(),
            show_preamble: false,
        }
    }

    /// File name shown in the title and top bar.
    pub fn source_name(&self) -> String {
        self.capture
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.capture.source.display().to_string())
    }

    pub fn toggle_preamble(&mut self) {
        self.show_preamble = !self.show_preamble;
    }
}
