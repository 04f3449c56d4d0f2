use crate::generation::MAX_SUGGESTIONS;

/// Extracts suggestions from a provider's free-text answer.
///
/// Keeps lines that start with a number followed by `.` or `)`, strips that
/// prefix, drops lines left empty and returns at most [`MAX_SUGGESTIONS`]
/// in order. A short list is returned as-is.
pub fn parse_numbered_list(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(strip_number_prefix)
        .filter(|s| !s.is_empty())
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}

fn strip_number_prefix(line: &str) -> Option<&str> {
    let line = line.trim();
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return None;
    }
    rest
        .strip_prefix(|c: char| c == '.' || c == ')')
        .map(str::trim)
}
