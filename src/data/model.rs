use crate::config::FigureStyle;

// ---------------------------------------------------------------------------
// Trajectory – one input file
// ---------------------------------------------------------------------------

/// The path of one particle, in file line order.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Series label: the file name without its extension.
    pub label: String,
    /// X coordinates.
    pub x: Vec<f64>,
    /// Y coordinates – same length as `x`.
    pub y: Vec<f64>,
}

impl Trajectory {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    /// Append one coordinate pair.
    pub fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the trajectory has no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

// ---------------------------------------------------------------------------
// Figure – everything a renderer needs
// ---------------------------------------------------------------------------

/// Labelled series plus axis configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub style: FigureStyle,
    /// Series in processing (and legend) order.
    pub series: Vec<Trajectory>,
}

impl Figure {
    pub fn new(style: FigureStyle) -> Self {
        Self {
            style,
            series: Vec::new(),
        }
    }

    /// Add one line-series.
    pub fn plot(&mut self, trajectory: Trajectory) {
        self.series.push(trajectory);
    }

    /// Legend entries in series order.
    pub fn legend_labels(&self) -> Vec<&str> {
        self.series.iter().map(|t| t.label.as_str()).collect()
    }

    /// Total point count across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(Trajectory::len).sum()
    }
}
