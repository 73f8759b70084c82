/// Characters that make up a "word" for the boundary check: `[A-Za-z0-9_]`.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Takes at most `width` characters from the front of `text` without splitting a word.
///
/// When the cut lands between two word characters, the partial word is dropped
/// from the slice; whitespace before it stays. A word that fills the whole
/// candidate therefore yields an empty slice.
pub fn cut_slice(text: &str, width: usize) -> &str {
    let end = text
        .char_indices()
        .nth(width)
        .map_or(text.len(), |(index, _)| index);
    let candidate = &text[..end];

    let splits_word = matches!(
        (candidate.chars().next_back(), text[end..].chars().next()),
        (Some(last), Some(next)) if is_word_char(last) && is_word_char(next)
    );

    if splits_word {
        candidate.trim_end_matches(is_word_char)
    } else {
        candidate
    }
}
