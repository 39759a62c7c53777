const SHOWN_CHARS: usize = 33;

/// Escapes and pads `s` into a fixed width `|...|` column for trace output.
/// Truncation counts chars, so multi-byte input is never split.
pub(crate) fn formatter_str(s: &str) -> String {
    let shown: String = s.chars().take(SHOWN_CHARS).collect();
    let shown = shown.escape_default().to_string();
    let shown = shown.replace("\\\"", "\"").replace("\\\'", "\'");
    let shown: String = shown.chars().take(SHOWN_CHARS).collect();
    format!("{:<35}", format!("|{shown}|"))
}
