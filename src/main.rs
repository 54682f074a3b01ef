mod app;
mod color;
mod config;
mod data;
mod plotter;
mod state;
mod ui;

use app::EguiRenderer;
use config::{FigureStyle, PlotterConfig};
use plotter::PlotOutcome;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = PlotterConfig::default();
    let mut renderer = EguiRenderer::new(config.clone());
    let outcome = plotter::plot_trajectories(
        &config,
        &FigureStyle::default(),
        &mut renderer,
        &mut std::io::stdout(),
    )?;
    if let PlotOutcome::Plotted { series } = outcome {
        log::info!("Figure closed ({series} series)");
    }
    Ok(())
}
