use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Discovery configuration
// ---------------------------------------------------------------------------

/// Default glob pattern for files written by the particle simulator.
pub const DEFAULT_PATTERN: &str = "trayectoria_*.txt";

/// Where to look for trajectory files and which names to accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotterConfig {
    /// Directory scanned for trajectory files.
    pub directory: PathBuf,
    /// Glob pattern matched against file names inside `directory`.
    pub pattern: String,
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

impl PlotterConfig {
    /// Scan `directory` with the default pattern.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Figure style
// ---------------------------------------------------------------------------

/// Fixed presentation of the trajectory figure.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureStyle {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub show_legend: bool,
    pub show_grid: bool,
    /// Increasing Y renders downward.
    pub invert_y: bool,
    /// Window size in logical points.
    pub size: [f32; 2],
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            title: "Trajectories of the particles".to_string(),
            x_label: "X Position".to_string(),
            y_label: "Y Position".to_string(),
            show_legend: true,
            show_grid: true,
            invert_y: true,
            size: [800.0, 600.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_scans_current_directory() {
        let config = PlotterConfig::default();
        assert_eq!(config.directory, PathBuf::from("."));
        assert_eq!(config.pattern, "trayectoria_*.txt");
    }

    #[test]
    fn new_keeps_default_pattern() {
        let config = PlotterConfig::new("/tmp/run");
        assert_eq!(config.directory, PathBuf::from("/tmp/run"));
        assert_eq!(config.pattern, DEFAULT_PATTERN);
    }

    #[test]
    fn default_style_inverts_y() {
        let style = FigureStyle::default();
        assert_eq!(style.title, "Trajectories of the particles");
        assert_eq!(style.x_label, "X Position");
        assert_eq!(style.y_label, "Y Position");
        assert!(style.show_legend && style.show_grid && style.invert_y);
    }
}
