use insta::assert_snapshot;
use shkit::ui::{banner, help};

mod common;
use common::*;

// Catalog lines end in column padding; compare them without it.
fn trimmed(lines: &[String]) -> String {
    lines
        .concat()
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

#[test]
fn test_two_column_table() {
    let lines = wrap_lines(
        "| %-14s | %-20s |\\n",
        &[
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
            "The quick brown fox jumps over the lazy dog while nobody watches.",
        ],
    );

    assert_snapshot!(lines.concat(), @r"
| Lorem ipsum    | The quick brown fox  |
| dolor sit amet | jumps over the lazy  |
| , consectetur  | dog while nobody     |
| adipiscing     | watches.             |
| elit.          |                      |
");
}

#[test]
fn test_right_aligned_column() {
    let lines = wrap_lines("|%10s|\\n", &["right aligned text wraps like the rest"]);

    assert_snapshot!(lines.concat(), @r"
|    right |
|  aligned |
|text wraps|
| like the |
|      rest|
");
}

#[test]
fn test_catalog() {
    let lines = help::catalog_lines().unwrap();

    assert_snapshot!(trimmed(&lines), @r"
Text:
  wrap             Printf with word wrapping for every column; each
                   text argument fills one column
  remove-comments  Strip everything after a comment character and
                   drop blank lines
  print-block      Print the lines between a start pattern and an end
                   pattern
  transpose        Swap rows and columns of space separated text
  highlight        Color every match of a pattern in the input

Terminal:
  banner           Print a centered banner across the terminal
  colors           Show every foreground and background color
                   combination
  say              Print a colored note, warning or comment
  pause            Wait for Enter before going on

Checks and commands:
  check-files      Fail when any of the given files is missing
  check-folders    Fail when any of the given folders is missing
  run-with-time    Run a command and print how long it took
  git-log          Show the git log in a compact colored layout
");
}

#[test]
fn test_banners() {
    let rendered = [
        banner::banner("*", Some("Hi"), 16),
        banner::banner("-", Some("Section"), 21),
        banner::banner("=", None, 12),
        banner::banner("#", Some("wider than the terminal"), 10),
    ]
    .iter()
    .map(|line| line.trim_end())
    .collect::<Vec<_>>()
    .join("\n");

    assert_snapshot!(rendered, @r"
****** Hi ******
------ Section ------
============
 wider than the terminal
");
}

#[test]
fn test_list_through_binary() {
    let output = run_shkit(&["list"], None);
    assert!(output.status.success());

    assert_eq!(stdout_of(&output), help::catalog_lines().unwrap().concat());
}
