//! City coordinate files.
//!
//! Two layouts are accepted:
//!
//! - **Plain**: one city per line, `x y` separated by tabs or spaces.
//! - **TSPLIB**: header lines, then `NODE_COORD_SECTION` followed by
//!   `id x y` lines, terminated by `EOF` or the end of input.
//!
//! Blank lines are skipped. Coordinates that do not parse as finite numbers
//! are rejected.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::InputError;
use crate::tsp::Point;

const SECTION_HEADER: &str = "NODE_COORD_SECTION";

/// Loads city coordinates from `path`.
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point>, InputError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_points(BufReader::new(file))
}

/// Parses city coordinates from a reader.
///
/// # Examples
///
/// ```
/// use u_tempering::io::parse_points;
///
/// let points = parse_points("0\t0\n3\t0\n3\t4\n".as_bytes()).unwrap();
/// assert_eq!(points.len(), 3);
/// assert_eq!(points[2].y, 4.0);
/// ```
pub fn parse_points<R: BufRead>(reader: R) -> Result<Vec<Point>, InputError> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;

    let section = lines
        .iter()
        .position(|l| l.trim().starts_with(SECTION_HEADER));
    let (first, skip_id) = match section {
        Some(pos) => (pos + 1, true),
        None => (0, false),
    };

    let mut points = Vec::new();
    for (idx, line) in lines.iter().enumerate().skip(first) {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if skip_id && trimmed == "EOF" {
            break;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let expected = if skip_id { 3 } else { 2 };
        if fields.len() != expected {
            return Err(InputError::MalformedLine {
                line: line_no,
                expected,
                found: fields.len(),
            });
        }
        let coords = &fields[expected - 2..];
        let x = parse_coordinate(coords[0], line_no)?;
        let y = parse_coordinate(coords[1], line_no)?;
        points.push(Point::new(x, y));
    }

    if points.len() < 3 {
        return Err(InputError::TooFewCities {
            found: points.len(),
        });
    }
    Ok(points)
}

fn parse_coordinate(value: &str, line: usize) -> Result<f64, InputError> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::MalformedCoordinate {
            line,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_tab_separated() {
        let input = "1\t2\n3.5\t-4\n\n5e1\t0\n";
        let points = parse_points(input.as_bytes()).unwrap();
        assert_eq!(
            points,
            vec![Point::new(1.0, 2.0), Point::new(3.5, -4.0), Point::new(50.0, 0.0)]
        );
    }

    #[test]
    fn test_tsplib_section() {
        let input = "NAME : tiny\nTYPE : TSP\nDIMENSION : 3\nEDGE_WEIGHT_TYPE : EUC_2D\n\
                     NODE_COORD_SECTION\n1 0 0\n2 10 0\n3 10 10\nEOF\n";
        let points = parse_points(input.as_bytes()).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[1], Point::new(10.0, 0.0));
    }

    #[test]
    fn test_malformed_coordinate_is_an_error() {
        let err = parse_points("0\t0\n1\tabc\n2\t2\n".as_bytes()).unwrap_err();
        match err {
            InputError::MalformedCoordinate { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_coordinate_is_an_error() {
        let err = parse_points("0 0\n1 NaN\n2 2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::MalformedCoordinate { line: 2, .. }));
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse_points("0 0\n1\n2 2\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            InputError::MalformedLine {
                line: 2,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_too_few_cities() {
        let err = parse_points("0 0\n1 1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, InputError::TooFewCities { found: 2 }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_points("/nonexistent/dir/cities.tsp").unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("square.tsp");
        std::fs::write(&path, "0\t0\n1\t0\n1\t1\n0\t1\n").unwrap();
        let points = load_points(&path).unwrap();
        assert_eq!(points.len(), 4);
    }
}
