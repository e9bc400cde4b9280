//! Reference ("optimal") tour files.
//!
//! Indices in the file are 1-based. A file is either a bare list (one index
//! per line) or a TSPLIB tour whose indices follow `TOUR_SECTION` and end
//! at `-1` or `EOF`. The returned tour is 0-based and must be a permutation
//! of all `n` cities.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::ReferenceTourError;
use crate::tsp::tour::Tour;

const SECTION_HEADER: &str = "TOUR_SECTION";

/// Conventional location of the reference tour for a point file:
/// `<dir>/ans/<stem>.opt.tour`.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use u_tempering::io::default_reference_path;
///
/// assert_eq!(
///     default_reference_path(Path::new("data/krod100.tsp")),
///     Path::new("data/ans/krod100.opt.tour"),
/// );
/// ```
pub fn default_reference_path(points_path: &Path) -> PathBuf {
    let stem = points_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dir = points_path.parent().unwrap_or_else(|| Path::new(""));
    dir.join("ans").join(format!("{stem}.opt.tour"))
}

/// Loads a reference tour over `n` cities from `path`.
pub fn load_reference_tour(path: impl AsRef<Path>, n: usize) -> Result<Tour, ReferenceTourError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ReferenceTourError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reference_tour(BufReader::new(file), n)
}

/// Parses a reference tour over `n` cities.
pub fn parse_reference_tour<R: BufRead>(reader: R, n: usize) -> Result<Tour, ReferenceTourError> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    let first = lines
        .iter()
        .position(|l| l.trim().starts_with(SECTION_HEADER))
        .map_or(0, |pos| pos + 1);

    let mut seen = vec![false; n];
    let mut tour = Vec::with_capacity(n);
    for (idx, line) in lines.iter().enumerate().skip(first) {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == "EOF" || trimmed == "-1" {
            break;
        }

        let index: i64 = trimmed
            .parse()
            .map_err(|_| ReferenceTourError::MalformedIndex {
                line: line_no,
                value: trimmed.to_string(),
            })?;
        if index < 1 || index > n as i64 {
            return Err(ReferenceTourError::IndexOutOfRange {
                line: line_no,
                index,
                cities: n,
            });
        }

        let city = (index - 1) as usize;
        if seen[city] {
            return Err(ReferenceTourError::Duplicate {
                line: line_no,
                index: city + 1,
            });
        }
        seen[city] = true;
        tour.push(city);
    }

    if tour.len() != n {
        return Err(ReferenceTourError::LengthMismatch {
            expected: n,
            found: tour.len(),
        });
    }
    Ok(tour)
}
