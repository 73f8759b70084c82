// Text measuring helpers
use unicode_width::UnicodeWidthStr;

/// Terminal columns taken by `text`.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// The first `count` characters of `text`.
pub fn take_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

/// `fill` repeated until it spans `width` columns, never wider.
pub fn repeat_to_width(fill: char, width: usize) -> String {
    let fill_width = unicode_width::UnicodeWidthChar::width(fill).unwrap_or(1).max(1);
    std::iter::repeat(fill).take(width / fill_width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_wide_chars() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn test_take_chars() {
        assert_eq!(take_chars("hello", 2), "he");
        assert_eq!(take_chars("hé", 5), "hé");
        assert_eq!(take_chars("héllo", 2), "hé");
    }

    #[test]
    fn test_repeat_to_width() {
        assert_eq!(repeat_to_width('=', 4), "====");
        assert_eq!(repeat_to_width('日', 5), "日日");
        assert_eq!(repeat_to_width('-', 0), "");
    }
}
