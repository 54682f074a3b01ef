use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseFloatError;
use std::path::Path;

use super::model::Trajectory;
use super::LoadError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load one trajectory file.
///
/// Every line holding exactly two whitespace-separated tokens contributes an
/// `(x, y)` pair; lines with any other token count are skipped. A token that
/// is not a number aborts the whole file with [`LoadError::ParseFloat`].
pub fn load_trajectory(path: &Path) -> Result<Trajectory, LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let reader = BufReader::new(file);
    let mut trajectory = Trajectory::new(series_label(path));
    let mut skipped = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(io_err)?;
        match parse_line(&line) {
            Ok(Some((x, y))) => trajectory.push(x, y),
            Ok(None) => skipped += 1,
            Err((token, source)) => {
                return Err(LoadError::ParseFloat {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    token,
                    source,
                })
            }
        }
    }

    log::debug!(
        "{}: {} point(s), {} line(s) skipped",
        path.display(),
        trajectory.len(),
        skipped
    );
    Ok(trajectory)
}

/// Series label for a file: its name with every `.txt` removed, or with its
/// last extension removed when it has no `.txt` in it.
pub fn series_label(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    if name.contains(TXT) {
        return name.replace(TXT, "");
    }
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

const TXT: &str = ".txt";

// ---------------------------------------------------------------------------
// Line parser
// ---------------------------------------------------------------------------

/// Parse one line into a coordinate pair.
///
/// `Ok(None)` for lines that do not have exactly two tokens; `Err` carries the
/// offending token when a number fails to parse.
fn parse_line(line: &str) -> Result<Option<(f64, f64)>, (String, ParseFloatError)> {
    let mut tokens = line.split_whitespace();
    let (Some(x), Some(y), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Ok(None);
    };
    let parse = |tok: &str| parse_number(tok).map_err(|e| (tok.to_string(), e));
    Ok(Some((parse(x)?, parse(y)?)))
}

/// Parse a float, allowing single `_` separators between digits (`1_000.5`).
fn parse_number(token: &str) -> Result<f64, ParseFloatError> {
    if !token.contains('_') {
        return token.parse();
    }

    let bytes = token.as_bytes();
    let separated_digits = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if separated_digits {
        token.replace('_', "").parse()
    } else {
        // fails on the stray '_'
        token.parse()
    }
}
