use crate::error::LoadError;
use crate::info_log;
use std::fs;
use std::path::{Path, PathBuf};

const DIGRAPHS: [(char, &str); 3] = [('Ä', "AE"), ('Ö', "OE"), ('Ü', "UE")];

/// Uppercases a line, then spells out the three umlauts as digraphs.
#[must_use]
pub fn normalize_line(line: &str) -> String {
    let upper: String = line.chars().map(upper_char).collect();
    DIGRAPHS
        .iter()
        .fold(upper, |word, (umlaut, digraph)| word.replace(*umlaut, digraph))
}

/// One code point in, one code point out: `ß` stays `ß` instead of becoming `SS`.
fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Splits on `\n` only. Blank lines, a trailing newline and `\r` are all kept.
#[must_use]
pub fn load_from_str(data: &str) -> Vec<String> {
    data.split('\n').map(normalize_line).collect()
}

/// Reads a whole file and normalizes every line. Invalid UTF-8 is replaced, not rejected.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file can't be read; nothing is loaded in that case.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let words = load_from_str(&String::from_utf8_lossy(&bytes));
    info_log!("load_file() - {} entries from {}", words.len(), path.display());
    Ok(words)
}

/// Expands a leading `~` to the home directory.
#[must_use]
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => Some(""),
        Some(rest) => rest.strip_prefix('/'),
        None => None,
    };
    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
