/// Data layer: core types, discovery, and loading.
///
/// Architecture:
/// ```text
///  trayectoria_*.txt
///        │
///        ▼
///   ┌──────────┐
///   │ discover  │  glob the directory → sorted paths
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse lines → Trajectory
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Figure   │  Vec<Trajectory> + FigureStyle
///   └──────────┘
/// ```

pub mod discover;
pub mod loader;
pub mod model;

use std::path::PathBuf;

use thiserror::Error;

/// Failures while discovering or reading trajectory files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid file pattern '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("reading {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: '{token}' is not a number", path.display())]
    ParseFloat {
        path: PathBuf,
        line: usize,
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}
