use eframe::egui::Ui;
use egui_plot::{CoordinatesFormatter, Corner, GridMark, Legend, Line, Plot, PlotPoint, PlotPoints};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Y axis inversion
// ---------------------------------------------------------------------------

// egui_plot has no inverted axes, so an inverted figure is drawn with -y and
// every label shown to the user flips the sign back.

/// Sign applied to data Y values before plotting.
pub fn y_sign(invert_y: bool) -> f64 {
    if invert_y {
        -1.0
    } else {
        1.0
    }
}

/// Tick label for a grid mark at plot coordinate `value`.
fn tick_label(value: f64, step_size: f64) -> String {
    let decimals = (-step_size.log10()).ceil().max(0.0) as usize;
    // +0.0 turns -0.0 into 0.0
    format!("{:.*}", decimals, value + 0.0)
}

/// Legend listing series in the order they were added, not by name.
fn series_legend() -> Legend {
    Legend::default().follow_insertion_order(true)
}

// ---------------------------------------------------------------------------
// Trajectory plot (central panel)
// ---------------------------------------------------------------------------

/// Render the title and the trajectory plot in the central panel.
pub fn trajectory_plot(ui: &mut Ui, state: &ViewerState) {
    let figure = match &state.figure {
        Some(fig) => fig,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("No trajectories loaded  (File → Open folder…)");
            });
            return;
        }
    };

    let style = &figure.style;
    let sign = y_sign(style.invert_y);

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&style.title);
    });

    let mut plot = Plot::new("trajectory_plot")
        .x_axis_label(&style.x_label)
        .y_axis_label(&style.y_label)
        .show_grid(style.show_grid)
        .y_axis_formatter(move |mark: GridMark, _range| tick_label(sign * mark.value, mark.step_size))
        .label_formatter(move |name: &str, value: &PlotPoint| {
            let y = sign * value.y + 0.0;
            if name.is_empty() {
                format!("x = {:.3}\ny = {:.3}", value.x, y)
            } else {
                format!("{name}\nx = {:.3}\ny = {:.3}", value.x, y)
            }
        })
        .coordinates_formatter(
            Corner::LeftBottom,
            CoordinatesFormatter::new(move |p: &PlotPoint, _bounds| {
                format!("x: {:.3}  y: {:.3}", p.x, sign * p.y + 0.0)
            }),
        )
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);

    if style.show_legend {
        plot = plot.legend(series_legend());
    }

    plot.show(ui, |plot_ui| {
        for (idx, trajectory) in figure.series.iter().enumerate() {
            if !state.visible.get(idx).copied().unwrap_or(true) {
                continue;
            }

            let points: PlotPoints = trajectory
                .points()
                .map(|(x, y)| [x, sign * y])
                .collect();

            let line = Line::new(points)
                .name(&trajectory.label)
                .color(state.colors[idx])
                .width(1.5);

            plot_ui.line(line);
        }
    });
}
