/// Split raw textarea contents into the ordered choice list.
///
/// Lines are trimmed and blanks dropped; duplicates are kept and order is
/// preserved, since a choice is identified by its slice position.
pub fn parse_choices(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
