/// Line boundaries: `\n`, `\r` (so also `\r\n`), vertical tab, form feed,
/// the file/group/record separators, NEL and the Unicode line/paragraph
/// separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split raw pasted text into trimmed, non-empty lines.
///
/// A line's index in the returned vector is its position for the scanner.
pub fn normalize_lines(raw: &str) -> Vec<&str> {
    raw.split(is_line_break)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}
