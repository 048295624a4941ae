/// Splits a command line on unquoted, unescaped spaces.
///
/// A backslash makes the next character literal. Double quotes toggle a quoted
/// section and are dropped. Empty tokens between consecutive spaces are kept,
/// a trailing empty token is not.
#[must_use]
pub fn tokenize(line: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escape_next = false;

    for c in line.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
            continue;
        }
        match c {
            '\\' => escape_next = true,
            '"' => in_quotes = !in_quotes,
            ' ' if !in_quotes => parts.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        parts.push(current);
    }
    parts
}
