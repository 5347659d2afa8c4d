//! Reading place lists from plain text.
//!
//! One place per line, with fields separated by `|`:
//!
//! ```txt
//! # id | name         | lat lon       | category names    | category ids
//! 0    | Kaffebaren   | 55.68 12.57   | Coffee & Tea      | coffee
//! 1    | Lille Bakery | 55.69 12.60   | Bakeries, Brunch  | bakeries, breakfast_brunch
//! 2    | Nørreport    | 55.683 12.571
//! ```
//!
//! Blank lines and `#`-comments are ignored. A `#` starts a comment when it
//! is the first non-blank character of a line, or when it stands on its own,
//! surrounded by whitespace (or followed by the end of the line). Hence names
//! like `Pier #39` survive. The two category fields may be left out. The order of the
//! lines is the order of the places.

use crate::authoring::*;
use std::path::Path;

/// Parse a place list. All places share the `provider` given.
pub fn parse(text: &str, provider: &ProviderHandle) -> Result<Vec<Place>, Error> {
    let mut places = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let lineno = index + 1;

        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        if fields.len() < 3 {
            return Err(Error::Syntax(
                lineno,
                format!("expected at least 3 fields, found {}", fields.len()),
            ));
        }
        if fields.len() > 5 {
            return Err(Error::Syntax(
                lineno,
                format!("expected at most 5 fields, found {}", fields.len()),
            ));
        }

        let id = fields[0];
        if id.is_empty() {
            return Err(Error::Syntax(lineno, "empty id".to_string()));
        }

        let coordinate = coordinate(fields[2]).ok_or_else(|| {
            Error::Syntax(lineno, format!("bad coordinate '{}'", fields[2]))
        })?;

        let names = list(fields.get(3).copied().unwrap_or_default());
        let ids = list(fields.get(4).copied().unwrap_or_default());
        if names.len() != ids.len() {
            debug!("line {lineno}: {} category names, {} ids", names.len(), ids.len());
        }

        places.push(Place::new(
            id,
            fields[1],
            coordinate,
            Categories::new(names, ids),
            provider,
        ));
    }

    trace!("text: read {} places", places.len());
    Ok(places)
}

/// Read and parse the place list in the file at `path`
pub fn read(path: &Path, provider: &ProviderHandle) -> Result<Vec<Place>, Error> {
    let text = std::fs::read_to_string(path)?;
    parse(&text, provider)
}

// Remove comments - both inline and separate lines
fn strip_comment(line: &str) -> &str {
    let line = line.trim_start();
    if line.starts_with('#') {
        return "";
    }

    let mut chars = line.char_indices().peekable();
    let mut previous = ' ';
    while let Some((i, c)) = chars.next() {
        let alone = chars.peek().map_or(true, |(_, next)| next.is_whitespace());
        if c == '#' && previous.is_whitespace() && alone {
            return &line[..i];
        }
        previous = c;
    }
    line
}

// "55.68 12.57" -> Coordinate::geo(55.68, 12.57)
fn coordinate(field: &str) -> Option<Coordinate> {
    let parts: Vec<&str> = field.split_whitespace().collect();
    let [lat, lon] = parts[..] else {
        return None;
    };
    Some(Coordinate::geo(lat.parse().ok()?, lon.parse().ok()?))
}

// "a, b ,c" -> ["a", "b", "c"]
fn list(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

// ----- T E S T S ------------------------------------------------------------------
