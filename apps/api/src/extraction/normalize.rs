const BYTE_ORDER_MARK: char = '\u{feff}';

/// Unifies line endings and drops control characters other than `\n` and `\t`,
/// plus any byte-order mark. Everything else passes through untouched.
pub fn normalize_text(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .chars()
        .filter(|c| *c != BYTE_ORDER_MARK)
        .filter(|c| *c == '\n' || *c == '\t' || !c.is_control())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_endings_unified() {
        assert_eq!(normalize_text("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn test_control_chars_dropped() {
        assert_eq!(normalize_text("Jo\u{0}hn\u{7}\tSmith"), "John\tSmith");
    }

    #[test]
    fn test_byte_order_mark_dropped() {
        assert_eq!(
            normalize_text("\u{feff}John Smith\r\njohn@example.com"),
            "John Smith\njohn@example.com"
        );
        assert!(normalize_text("\u{feff}  \n").trim().is_empty());
    }

    #[test]
    fn test_plain_text_unchanged() {
        let text = "John Smith\njohn@example.com — Café";
        assert_eq!(normalize_text(text), text);
    }
}
