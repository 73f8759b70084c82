use crate::wrap::{ColumnWrapper, WrapError, WrapMode};

// Catalog section structure
pub struct HelpSection {
    pub title: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

// Catalog definitions
pub const SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "Text:",
        items: &[
            (
                "wrap",
                "Printf with word wrapping for every column; each text argument fills one column",
            ),
            (
                "remove-comments",
                "Strip everything after a comment character and drop blank lines",
            ),
            (
                "print-block",
                "Print the lines between a start pattern and an end pattern",
            ),
            ("transpose", "Swap rows and columns of space separated text"),
            ("highlight", "Color every match of a pattern in the input"),
        ],
    },
    HelpSection {
        title: "Terminal:",
        items: &[
            ("banner", "Print a centered banner across the terminal"),
            ("colors", "Show every foreground and background color combination"),
            ("say", "Print a colored note, warning or comment"),
            ("pause", "Wait for Enter before going on"),
        ],
    },
    HelpSection {
        title: "Checks and commands:",
        items: &[
            ("check-files", "Fail when any of the given files is missing"),
            ("check-folders", "Fail when any of the given folders is missing"),
            ("run-with-time", "Run a command and print how long it took"),
            ("git-log", "Show the git log in a compact colored layout"),
        ],
    },
];

const ITEM_FORMAT: &str = "  %-16s %-50s\\n";

/// The catalog as lines, descriptions wrapped to their column.
pub fn catalog_lines() -> Result<Vec<String>, WrapError> {
    let mut lines = Vec::new();
    for section in SECTIONS {
        lines.push(format!("{}\n", section.title));
        for (name, description) in section.items {
            let wrapper = ColumnWrapper::new(ITEM_FORMAT, [*name, *description], WrapMode::Guarded)?;
            for line in wrapper {
                lines.push(line?);
            }
        }
        lines.push("\n".to_string());
    }
    Ok(lines)
}
