use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use itertools::Itertools;
use tracing::debug;

use super::Point;
use crate::error::LoadError;

/// Reads whitespace separated integers two at a time as `(x, y)` pairs.
///
/// Line breaks carry no meaning; a pair may straddle lines. Reading stops
/// at the first token that is not an integer, including one that is not
/// valid UTF-8, and an unpaired trailing integer is dropped. Only a failed
/// read is an error.
pub fn load<R: BufRead>(mut source: R) -> io::Result<Vec<Point>> {
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes)?;

    let mut values: Vec<i64> = Vec::new();
    for token in bytes.split(is_separator).filter(|t| !t.is_empty()) {
        match parse_integer(token) {
            Some(v) => values.push(v),
            None => {
                debug!(token = %String::from_utf8_lossy(token), "stopping at non-integer token");
                break;
            }
        }
    }

    if values.len() % 2 == 1 {
        debug!("dropping unpaired trailing value");
    }

    Ok(values
        .into_iter()
        .tuples()
        .map(|(x, y)| Point::new(x as f64, y as f64))
        .collect())
}

// ASCII whitespace plus vertical tab.
fn is_separator(b: &u8) -> bool {
    b.is_ascii_whitespace() || *b == 0x0b
}

fn parse_integer(token: &[u8]) -> Option<i64> {
    std::str::from_utf8(token).ok().and_then(|s| s.parse().ok())
}

#[tracing::instrument]
pub fn load_path(path: &Path) -> Result<Vec<Point>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source: source,
    })?;

    let points = load(BufReader::new(file)).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source: source,
    })?;

    debug!(count = points.len(), "loaded points");
    Ok(points)
}
