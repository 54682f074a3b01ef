use std::io::Write;

use crate::config::{FigureStyle, PlotterConfig};
use crate::data::discover::discover_files;
use crate::data::loader::load_trajectory;
use crate::data::model::Figure;
use crate::data::LoadError;

/// Notice printed when the directory holds no trajectory files.
pub const NO_FILES_NOTICE: &str = "No trajectory files found.";

// ---------------------------------------------------------------------------
// Renderer seam
// ---------------------------------------------------------------------------

/// Something that can present a finished figure.
pub trait Renderer {
    fn render(&mut self, figure: &Figure) -> anyhow::Result<()>;
}

/// What a plotting run ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotOutcome {
    /// Nothing matched; the renderer was not called.
    NoFiles,
    /// The figure was rendered with this many series.
    Plotted { series: usize },
}

// ---------------------------------------------------------------------------
// Discover → load → render
// ---------------------------------------------------------------------------

/// Build the figure for every matching file in `config.directory`.
///
/// Returns `Ok(None)` when nothing matches. Any unreadable file or malformed
/// number fails the whole load.
pub fn load_figure(config: &PlotterConfig, style: &FigureStyle) -> Result<Option<Figure>, LoadError> {
    let files = discover_files(&config.directory, &config.pattern)?;
    if files.is_empty() {
        return Ok(None);
    }

    let mut figure = Figure::new(style.clone());
    for path in &files {
        let trajectory = load_trajectory(path)?;
        if trajectory.is_empty() {
            log::warn!("{} holds no coordinate pairs", path.display());
        }
        figure.plot(trajectory);
    }

    log::info!(
        "Loaded {} trajectories ({} points)",
        figure.series.len(),
        figure.point_count()
    );
    Ok(Some(figure))
}

/// Plot every trajectory file found through `config` on one figure.
///
/// The empty-input notice goes to `out`.
pub fn plot_trajectories(
    config: &PlotterConfig,
    style: &FigureStyle,
    renderer: &mut dyn Renderer,
    out: &mut dyn Write,
) -> anyhow::Result<PlotOutcome> {
    let Some(figure) = load_figure(config, style)? else {
        writeln!(out, "{NO_FILES_NOTICE}")?;
        return Ok(PlotOutcome::NoFiles);
    };

    renderer.render(&figure)?;
    Ok(PlotOutcome::Plotted {
        series: figure.series.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingRenderer {
        figures: Vec<Figure>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, figure: &Figure) -> anyhow::Result<()> {
            self.figures.push(figure.clone());
            Ok(())
        }
    }

    struct Run {
        outcome: anyhow::Result<PlotOutcome>,
        renderer: RecordingRenderer,
        stdout: String,
    }

    fn run(dir: &TempDir) -> Run {
        let mut renderer = RecordingRenderer::default();
        let mut stdout = Vec::new();
        let config = PlotterConfig::new(dir.path());
        let outcome =
            plot_trajectories(&config, &FigureStyle::default(), &mut renderer, &mut stdout);
        Run {
            outcome,
            renderer,
            stdout: String::from_utf8(stdout).unwrap(),
        }
    }

    #[test]
    fn no_files_skips_rendering() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("colisiones.txt"), "0.1 PARED 3\n").unwrap();

        let run = run(&dir);
        assert_eq!(run.outcome.unwrap(), PlotOutcome::NoFiles);
        assert_eq!(run.stdout, "No trajectory files found.\n");
        assert!(run.renderer.figures.is_empty());
    }

    #[test]
    fn two_files_end_to_end() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("trayectoria_B.txt"), "0 1\n1 0\n").unwrap();
        fs::write(dir.path().join("trayectoria_A.txt"), "0 0\n1 1\n2 4\n").unwrap();

        let run = run(&dir);
        assert_eq!(run.outcome.unwrap(), PlotOutcome::Plotted { series: 2 });
        assert!(run.stdout.is_empty());
        assert_eq!(run.renderer.figures.len(), 1);

        let fig = &run.renderer.figures[0];
        assert_eq!(fig.legend_labels(), vec!["trayectoria_A", "trayectoria_B"]);
        assert_eq!(
            fig.series[0].points().collect::<Vec<_>>(),
            vec![(0.0, 0.0), (1.0, 1.0), (2.0, 4.0)]
        );
        assert_eq!(
            fig.series[1].points().collect::<Vec<_>>(),
            vec![(0.0, 1.0), (1.0, 0.0)]
        );
        assert!(fig.style.invert_y);
        assert!(fig.style.show_legend);
        assert!(fig.style.show_grid);
        assert_eq!(fig.style.title, "Trajectories of the particles");
    }

    #[test]
    fn one_series_per_file_even_when_empty() {
        let dir = TempDir::new().unwrap();
        for i in 0..4 {
            fs::write(dir.path().join(format!("trayectoria_{i}.txt")), "").unwrap();
        }

        let run = run(&dir);
        assert_eq!(run.outcome.unwrap(), PlotOutcome::Plotted { series: 4 });
        assert_eq!(
            run.renderer.figures[0].legend_labels(),
            vec!["trayectoria_0", "trayectoria_1", "trayectoria_2", "trayectoria_3"]
        );
    }

    #[test]
    fn malformed_number_aborts_before_rendering() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("trayectoria_A.txt"), "0 0\n1 1\n").unwrap();
        fs::write(dir.path().join("trayectoria_B.txt"), "abc def\n").unwrap();

        let run = run(&dir);
        let err = run.outcome.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::ParseFloat { .. })
        ));
        assert!(run.renderer.figures.is_empty());
    }

    #[test]
    fn legend_follows_file_name_order_not_label_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("trayectoria_1.txt"), "0 0\n").unwrap();
        fs::write(dir.path().join("trayectoria_1-2.txt"), "1 1\n").unwrap();

        let run = run(&dir);
        run.outcome.unwrap();
        // '-' sorts before '.', so the longer name comes first
        assert_eq!(
            run.renderer.figures[0].legend_labels(),
            vec!["trayectoria_1-2", "trayectoria_1"]
        );
    }

    #[test]
    fn matching_directory_is_fatal() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("trayectoria_A.txt"), "0 0\n").unwrap();
        fs::create_dir(dir.path().join("trayectoria_B.txt")).unwrap();

        let run = run(&dir);
        let err = run.outcome.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::Io { .. })
        ));
        assert!(run.renderer.figures.is_empty());
    }

    #[test]
    fn renderer_failure_propagates() {
        struct NoDisplay;
        impl Renderer for NoDisplay {
            fn render(&mut self, _: &Figure) -> anyhow::Result<()> {
                anyhow::bail!("no display backend")
            }
        }

        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("trayectoria_A.txt"), "0 0\n").unwrap();
        let config = PlotterConfig::new(dir.path());
        let err = plot_trajectories(
            &config,
            &FigureStyle::default(),
            &mut NoDisplay,
            &mut std::io::sink(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "no display backend");
    }
}
