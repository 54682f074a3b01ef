use eframe::egui;

use crate::config::PlotterConfig;
use crate::data::model::Figure;
use crate::plotter::Renderer;
use crate::state::ViewerState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TrajectoryApp {
    pub state: ViewerState,
}

impl TrajectoryApp {
    pub fn new(config: PlotterConfig, figure: Figure) -> Self {
        Self {
            state: ViewerState::new(config, figure),
        }
    }
}

impl eframe::App for TrajectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: series list ----
        egui::SidePanel::left("series_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::trajectory_plot(ui, &self.state);
        });
    }
}

// ---------------------------------------------------------------------------
// Window renderer
// ---------------------------------------------------------------------------

/// Shows the figure in a native window; returns once the window is closed.
pub struct EguiRenderer {
    config: PlotterConfig,
}

impl EguiRenderer {
    pub fn new(config: PlotterConfig) -> Self {
        Self { config }
    }
}

impl Renderer for EguiRenderer {
    fn render(&mut self, figure: &Figure) -> anyhow::Result<()> {
        let [width, height] = figure.style.size;
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([width, height])
                .with_min_inner_size([400.0, 300.0]),
            ..Default::default()
        };

        let title = figure.style.title.clone();
        let config = self.config.clone();
        let figure = figure.clone();
        eframe::run_native(
            &title,
            options,
            Box::new(|_cc| Ok(Box::new(TrajectoryApp::new(config, figure)))),
        )
        .map_err(|e| anyhow::anyhow!("display failed: {e}"))
    }
}
