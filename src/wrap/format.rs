//! printf-style templates: column widths for wrapping and line rendering.

use crate::ui::text;

const FLAG_CHARS: &str = "-+ #0";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Conversion(Conversion),
}

/// One `%<flags><width>[.<precision>]<letter>` specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Conversion {
    left_align: bool,
    width: Option<usize>,
    precision: Option<usize>,
    /// Width used for wrapping, read the loose way `%[^1-9]*([0-9]+)` would read it.
    column_width: Option<usize>,
}

impl Conversion {
    fn write(&self, out: &mut String, arg: &str) {
        let shown = match self.precision {
            Some(max) => text::take_chars(arg, max),
            None => arg,
        };
        let padding = self
            .width
            .unwrap_or(0)
            .saturating_sub(text::display_width(shown));
        if self.left_align {
            out.push_str(shown);
            out.push_str(&" ".repeat(padding));
        } else {
            out.push_str(&" ".repeat(padding));
            out.push_str(shown);
        }
    }
}

/// A parsed print template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    segments: Vec<Segment>,
    widths: Vec<usize>,
}

impl FormatSpec {
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some(escaped) => literal.push_str(&expand_escape(escaped)),
                    None => literal.push('\\'),
                },
                '%' if chars.peek() == Some(&'%') => {
                    chars.next();
                    literal.push('%');
                }
                '%' => {
                    let mut raw = String::from('%');
                    while let Some(&next) = chars.peek() {
                        if FLAG_CHARS.contains(next) || next.is_ascii_digit() || next == '.' {
                            raw.push(next);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    match chars.peek() {
                        Some(letter) if letter.is_ascii_alphabetic() => {
                            chars.next();
                            if !literal.is_empty() {
                                segments.push(Segment::Literal(std::mem::take(&mut literal)));
                            }
                            segments.push(Segment::Conversion(parse_conversion(&raw)));
                        }
                        // Not a conversion; printed as typed.
                        _ => literal.push_str(&raw),
                    }
                }
                other => literal.push(other),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        let widths = segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Conversion(conversion) => conversion.column_width,
                Segment::Literal(_) => None,
            })
            .collect();

        Self { segments, widths }
    }

    /// Widths of the width-bearing conversions, in template order.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Number of conversions, with or without a width.
    pub fn conversion_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Conversion(_)))
            .count()
    }

    /// Renders one pass of the template. Missing arguments print as empty strings and
    /// surplus arguments reuse the template, as printf does.
    pub fn render(&self, args: &[&str]) -> String {
        let conversions = self.conversion_count();
        let mut out = String::new();
        let mut next_arg = 0;

        loop {
            for segment in &self.segments {
                match segment {
                    Segment::Literal(text) => out.push_str(text),
                    Segment::Conversion(conversion) => {
                        conversion.write(&mut out, args.get(next_arg).copied().unwrap_or(""));
                        next_arg += 1;
                    }
                }
            }
            if conversions == 0 || next_arg >= args.len() {
                break;
            }
        }
        out
    }
}

fn expand_escape(escaped: char) -> String {
    match escaped {
        'n' => "\n".to_string(),
        't' => "\t".to_string(),
        'r' => "\r".to_string(),
        'a' => "\x07".to_string(),
        '\\' => "\\".to_string(),
        '"' => "\"".to_string(),
        '\'' => "'".to_string(),
        '%' => "%".to_string(),
        other => format!("\\{}", other),
    }
}

fn parse_conversion(raw: &str) -> Conversion {
    let body = &raw[1..];
    let flags_end = body
        .find(|c: char| !FLAG_CHARS.contains(c))
        .unwrap_or(body.len());
    let (flags, rest) = body.split_at(flags_end);
    let (width, precision) = match rest.split_once('.') {
        Some((width, precision)) => (width, Some(precision)),
        None => (rest, None),
    };

    Conversion {
        left_align: flags.contains('-'),
        width: width.parse().ok(),
        precision: precision.map(|digits| digits.parse().unwrap_or(0)),
        column_width: loose_width(body),
    }
}

/// First run of digits starting at a non-zero digit; a specifier made only of
/// zeros and flags reads as width 0.
fn loose_width(body: &str) -> Option<usize> {
    if let Some(start) = body.find(|c: char| ('1'..='9').contains(&c)) {
        let digits: String = body[start..]
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        return digits.parse().ok();
    }
    body.contains('0').then_some(0)
}
