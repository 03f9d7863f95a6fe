//! Bulk task extraction from pasted activity messages.

/// Extracts task descriptions from a pasted activity message.
///
/// Only lines that, once trimmed, start with a single digit `1`-`9`
/// followed by `-` are recognized. The marker is removed and the remaining
/// text trimmed. Other lines are dropped. An empty result means no task was
/// recognized.
///
/// # Examples
///
/// ```
/// use shift_tracker::task::domain::parse_bulk;
///
/// let tasks = parse_bulk("Turno noche\n1- wash\n  2-dry  \nnote");
/// assert_eq!(tasks, vec!["wash".to_owned(), "dry".to_owned()]);
/// ```
#[must_use]
pub fn parse_bulk(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter_map(strip_marker)
        .map(str::to_owned)
        .collect()
}

fn strip_marker(line: &str) -> Option<&str> {
    let mut characters = line.chars();
    let digit = characters.next()?;
    if !matches!(digit, '1'..='9') {
        return None;
    }
    characters.as_str().strip_prefix('-').map(str::trim)
}
