use super::span::Span;

/// Extracts text for a span, truncating to `max` bytes with "..." suffix if needed.
///
/// Used for human-readable log output; truncation backs off to a char boundary.
pub fn preview(text: &str, sp: Span, max: usize) -> String {
    let Some(slice) = sp.slice(text) else {
        return String::new();
    };
    if slice.len() <= max {
        return slice.to_string();
    }
    let mut cut = max;
    while !slice.is_char_boundary(cut) {
        cut -= 1;
    }
    let mut s = slice[..cut].to_string();
    s.push_str("...");
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_text_unchanged() {
        let sp = Span { start: 0, end: 5 };
        assert_eq!(preview("hello", sp, 10), "hello");
    }

    #[test]
    fn preview_exact_length_unchanged() {
        let sp = Span { start: 0, end: 5 };
        assert_eq!(preview("hello", sp, 5), "hello");
    }

    #[test]
    fn preview_truncates_long_text() {
        let sp = Span { start: 0, end: 11 };
        assert_eq!(preview("hello world", sp, 5), "hello...");
    }

    #[test]
    fn preview_backs_off_to_char_boundary() {
        let sp = Span { start: 0, end: 5 };
        assert_eq!(preview("a€bc", sp, 2), "a...");
    }

    #[test]
    fn preview_of_invalid_span_is_empty() {
        let sp = Span { start: 3, end: 40 };
        assert_eq!(preview("short", sp, 10), "");
    }
}
