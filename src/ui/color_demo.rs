use super::palette::{Palette, TermColor};

/// Every foreground/background pairing of the basic colors, one row per foreground.
pub fn color_matrix(palette: &Palette) -> Vec<String> {
    TermColor::ALL
        .iter()
        .map(|&fg| {
            let mut row = String::new();
            for &bg in &TermColor::ALL {
                row.push_str(&palette.background(bg));
                row.push_str(&palette.foreground(fg));
                row.push_str(&format!(" F:{} B:{} ", fg.index(), bg.index()));
            }
            row.push_str(palette.reset());
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_matrix_lists_every_pair() {
        let rows = color_matrix(&Palette::plain());
        assert_eq!(rows.len(), 8);
        assert!(rows[0].starts_with(" F:0 B:0  F:0 B:1 "));
        assert!(rows[7].ends_with(" F:7 B:7 "));
    }

    #[test]
    fn test_colored_cell_sets_background_then_foreground() {
        let rows = color_matrix(&Palette::new(true));
        assert!(rows[1].starts_with("\x1b[40m\x1b[31m F:1 B:0 "));
        assert!(rows[1].ends_with("\x1b[0m"));
    }
}
