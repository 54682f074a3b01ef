use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Left side panel – series visibility
// ---------------------------------------------------------------------------

/// Render the left panel listing every trajectory.
pub fn side_panel(ui: &mut Ui, state: &mut ViewerState) {
    ui.heading("Trajectories");
    ui.separator();

    let Some(figure) = &state.figure else {
        ui.label("No trajectories loaded.");
        return;
    };

    // Collect in legend order so we can mutate state inside the loop.
    let rows: Vec<(String, usize)> = figure
        .legend_labels()
        .into_iter()
        .zip(&figure.series)
        .map(|(label, t)| (label.to_string(), t.len()))
        .collect();

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
        ui.label(format!("{}/{}", state.visible_count(), rows.len()));
    });
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (idx, (label, n_points)) in rows.iter().enumerate() {
                let text = RichText::new(format!("{label}  ({n_points})")).color(state.colors[idx]);
                let mut checked = state.visible[idx];
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle(idx);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(state.config.directory.display().to_string());

        if let Some(fig) = &state.figure {
            ui.separator();
            ui.label(format!(
                "{} trajectories, {} points",
                fig.series.len(),
                fig.point_count()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut ViewerState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open trajectory folder")
        .set_directory(&state.config.directory)
        .pick_folder();

    if let Some(path) = folder {
        log::info!("Opening {}", path.display());
        state.open_directory(path);
    }
}
