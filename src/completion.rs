//! Tab-completion suggestions for the line editor.

use crate::loader::expand_home;
use std::fs;

/// Command names with their one-line descriptions, in display order.
pub const COMMANDS: [(&str, &str); 11] = [
    ("load", "Loads a wordlist from file"),
    ("length", "Filters words by length"),
    ("mask", "Masks words"),
    ("!mask", "Masks words which are not it"),
    ("letters", "Only keeps words containing all letters"),
    ("!letters", "Removes words containing any letters"),
    ("print", "Prints the resulting list"),
    ("count", "Shows count of resulting list"),
    ("help", "Shows this help"),
    ("exit", "Exit app"),
    ("clean", "Clean list"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Replacement for the word before the cursor.
    pub text: String,
    pub description: String,
}

/// The text after the last space, i.e. what a completion would replace.
#[must_use]
pub fn word_before_cursor(text: &str) -> &str {
    text.rsplit(' ').next().unwrap_or(text)
}

/// Suggestions for `text`, which is everything left of the cursor.
#[must_use]
pub fn complete(text: &str) -> Vec<Suggestion> {
    let word = word_before_cursor(text);
    if text.starts_with("load ") {
        return complete_path(word);
    }
    COMMANDS
        .iter()
        .filter(|(name, _)| has_prefix_ignore_case(name, word))
        .map(|(name, description)| Suggestion {
            text: (*name).to_string(),
            description: (*description).to_string(),
        })
        .collect()
}

fn has_prefix_ignore_case(candidate: &str, prefix: &str) -> bool {
    candidate.to_lowercase().starts_with(&prefix.to_lowercase())
}

/// Lists the directory part of `word` and keeps entries starting with the file part.
fn complete_path(word: &str) -> Vec<Suggestion> {
    let (dir, file_prefix) = match word.rsplit_once('/') {
        Some(("", file)) => ("/", file),
        Some((dir, file)) => (dir, file),
        None => ("", word),
    };
    let listed = if dir.is_empty() { "." } else { dir };

    let Ok(entries) = fs::read_dir(expand_home(listed)) else {
        return Vec::new();
    };

    let mut suggestions: Vec<Suggestion> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !has_prefix_ignore_case(&name, file_prefix) {
                return None;
            }
            let description = match entry.metadata() {
                Ok(meta) if meta.is_dir() => "Directory".to_string(),
                Ok(meta) => format!("File ({} kB)", meta.len() / 1000),
                Err(_) => "File".to_string(),
            };
            let text = match dir {
                "" => name,
                "/" => format!("/{name}"),
                _ => format!("{dir}/{name}"),
            };
            Some(Suggestion { text, description })
        })
        .collect();
    suggestions.sort_by(|a, b| a.text.cmp(&b.text));
    suggestions
}

/// Longest prefix shared by every suggestion's text.
#[must_use]
pub fn common_prefix(suggestions: &[Suggestion]) -> Option<String> {
    let (first, rest) = suggestions.split_first()?;
    let mut prefix: &str = &first.text;
    for suggestion in rest {
        let shared = prefix
            .char_indices()
            .zip(suggestion.text.chars())
            .find(|((_, a), b)| a != b)
            .map_or_else(
                || prefix.len().min(suggestion.text.len()),
                |((i, _), _)| i,
            );
        prefix = &prefix[..shared];
    }
    Some(prefix.to_string())
}
