//! Case-insensitive search over rendered output

use std::io::{self, Write};
use std::ops::Range;

use termcolor::{Color, ColorSpec, WriteColor};

/// Byte ranges of every non-overlapping, case-insensitive match of `term`.
///
/// Ranges always fall on character boundaries of `text`.
pub fn find_matches(text: &str, term: &str) -> Vec<Range<usize>> {
    let needle: Vec<char> = term.chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    let mut start = 0;
    while start < text.len() {
        let rest = &text[start..];
        match match_len(rest, &needle) {
            Some(len) => {
                matches.push(start..start + len);
                start += len;
            }
            None => start += rest.chars().next().map_or(1, char::len_utf8),
        }
    }
    matches
}

/// Length in bytes of the match of `needle` at the start of `haystack`.
fn match_len(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut chars = haystack.char_indices();
    for &expected in needle {
        let (_, c) = chars.next()?;
        if !chars_eq_ignore_case(c, expected) {
            return None;
        }
    }
    Some(chars.next().map_or(haystack.len(), |(i, _)| i))
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Write `text`, painting matches of `term` with a yellow background.
pub fn write_highlighted<W: WriteColor>(out: &mut W, text: &str, term: &str) -> io::Result<()> {
    let mut spec = ColorSpec::new();
    spec.set_bg(Some(Color::Yellow)).set_fg(Some(Color::Black));

    let mut cursor = 0;
    for range in find_matches(text, term) {
        write!(out, "{}", &text[cursor..range.start])?;
        out.set_color(&spec)?;
        write!(out, "{}", &text[range.clone()])?;
        out.reset()?;
        cursor = range.end;
    }
    write!(out, "{}", &text[cursor..])
}
