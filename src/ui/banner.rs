use super::text::{display_width, repeat_to_width};

/// Upper bound on the padding run, as in the shell version.
pub const MAX_PADDING: usize = 500;

pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;

/// Terminal width from an explicit override, then the terminal itself, then 80.
pub fn terminal_width(override_width: Option<u16>) -> u16 {
    override_width
        .or_else(|| crossterm::terminal::size().ok().map(|(cols, _)| cols))
        .filter(|&cols| cols > 0)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

/// A rule of `fill` across `width` columns, with `text` centered in it when given.
pub fn banner(fill: &str, text: Option<&str>, width: usize) -> String {
    let fill = fill.chars().next().unwrap_or('=');
    let padding = repeat_to_width(fill, MAX_PADDING);

    match text {
        None => {
            let rule = take_columns(&padding, width);
            let indent = width.saturating_sub(display_width(&rule));
            format!("{}{}", " ".repeat(indent), rule)
        }
        Some(text) => {
            let text_width = display_width(text);
            let left = width.saturating_sub(2 + text_width) / 2;
            let right = width.saturating_sub(1 + text_width) / 2;
            format!(
                "{} {} {}",
                take_columns(&padding, left),
                text,
                take_columns(&padding, right)
            )
        }
    }
}

fn take_columns(padding: &str, columns: usize) -> String {
    let mut used = 0;
    padding
        .chars()
        .take_while(|c| {
            used += unicode_width::UnicodeWidthChar::width(*c).unwrap_or(1).max(1);
            used <= columns
        })
        .collect()
}
