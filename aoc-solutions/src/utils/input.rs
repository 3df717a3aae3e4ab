//! Puzzle input helpers

/// Lines of `input`, ignoring trailing newlines.
///
/// Unlike [`str::lines`], an empty input still yields one empty line and
/// `\r` is kept, so row counts match the raw text.
pub fn lines(input: &str) -> impl Iterator<Item = &str> {
    input.trim_end_matches('\n').split('\n')
}

/// Trim every line and rejoin with `\n`.
///
/// Lets tests embed indented literal inputs.
pub fn sanitize(input: &str) -> String {
    lines(input).map(str::trim).collect::<Vec<_>>().join("\n")
}
