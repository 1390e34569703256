//! Text sanitization for user-supplied news fields.
//!
//! News content ends up inside prompts. Control characters are stripped and
//! line endings normalized so the content cannot forge the boundary between
//! instructions and data.

/// Sanitize multi-line text: CRLF and lone CR become LF, tabs become spaces,
/// every other control character is removed, and the result is trimmed.
///
/// # Examples
///
/// ```
/// use newsroom_core::sanitize_multiline;
///
/// assert_eq!(sanitize_multiline("a\r\nb\rc\u{0007}\td"), "a\nb\nc d");
/// ```
pub fn sanitize_multiline(input: &str) -> String {
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");
    let cleaned: String = normalized
        .chars()
        .filter_map(|c| match c {
            '\n' => Some('\n'),
            '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect();
    cleaned.trim().to_string()
}

/// Sanitize single-line text: like [`sanitize_multiline`] but line breaks
/// collapse to single spaces.
///
/// # Examples
///
/// ```
/// use newsroom_core::sanitize_line;
///
/// assert_eq!(sanitize_line("  Fichaje\r\n  cerrado\u{0000} "), "Fichaje cerrado");
/// ```
pub fn sanitize_line(input: &str) -> String {
    sanitize_multiline(input)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
