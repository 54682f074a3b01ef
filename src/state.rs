use std::path::PathBuf;

use eframe::egui::Color32;

use crate::color::series_palette;
use crate::config::{FigureStyle, PlotterConfig};
use crate::data::model::Figure;
use crate::plotter::{load_figure, NO_FILES_NOTICE};

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct ViewerState {
    /// Directory and pattern the current figure was loaded from.
    pub config: PlotterConfig,

    /// Figure on display (None after a reload that found nothing).
    pub figure: Option<Figure>,

    /// One colour per series.
    pub colors: Vec<Color32>,

    /// Per-series visibility, parallel to `figure.series`.
    pub visible: Vec<bool>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl ViewerState {
    pub fn new(config: PlotterConfig, figure: Figure) -> Self {
        let mut state = Self {
            config,
            figure: None,
            colors: Vec::new(),
            visible: Vec::new(),
            status_message: None,
        };
        state.set_figure(figure);
        state
    }

    /// Ingest a freshly loaded figure and show every series.
    pub fn set_figure(&mut self, figure: Figure) {
        let n = figure.series.len();
        self.colors = series_palette(n);
        self.visible = vec![true; n];
        self.figure = Some(figure);
        self.status_message = None;
    }

    /// Re-read every file from the current directory.
    pub fn reload(&mut self) {
        let style = self
            .figure
            .as_ref()
            .map(|f| f.style.clone())
            .unwrap_or_default();

        match load_figure(&self.config, &style) {
            Ok(Some(figure)) => self.set_figure(figure),
            Ok(None) => {
                log::info!("{NO_FILES_NOTICE} ({})", self.config.directory.display());
                self.figure = None;
                self.colors.clear();
                self.visible.clear();
                self.status_message = Some(NO_FILES_NOTICE.to_string());
            }
            Err(e) => {
                log::error!("Failed to load trajectories: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Switch to another directory, keeping the file pattern.
    pub fn open_directory(&mut self, directory: PathBuf) {
        self.config.directory = directory;
        self.reload();
    }

    /// Toggle a single series on or off.
    pub fn toggle(&mut self, index: usize) {
        if let Some(v) = self.visible.get_mut(index) {
            *v = !*v;
        }
    }

    /// Show every series.
    pub fn select_all(&mut self) {
        self.visible.iter_mut().for_each(|v| *v = true);
    }

    /// Hide every series.
    pub fn select_none(&mut self) {
        self.visible.iter_mut().for_each(|v| *v = false);
    }

    /// Number of series currently shown.
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }
}
