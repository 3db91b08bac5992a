//! Escaping of the characters LaTeX reserves in the places we emit text.

/// Escapes `_`, `[` and `]` for use inside a LaTeX document.
///
/// Brackets become `\lbrack ` / `\rbrack ` with a trailing space so the
/// control word is terminated. The result is not safe to escape again:
/// apply this exactly once per string.
///
/// ```
/// assert_eq!(texsheet::latexify("a_b[c]"), "a\\_b\\lbrack c\\rbrack ");
/// ```
pub fn latexify(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '_' => out.push_str(r"\_"),
            '[' => out.push_str(r"\lbrack "),
            ']' => out.push_str(r"\rbrack "),
            other => out.push(other),
        }
    }
    out
}
