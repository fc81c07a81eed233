//! Connector glyphs used to draw tree structure

use std::fmt;

use clap::ValueEnum;

/// The three strings that define how a tree is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    /// Connector for an entry that has later siblings.
    pub branch: String,
    /// Connector for the last entry in a directory.
    pub last: String,
    /// Continuation drawn beneath a non-last entry.
    pub indent: String,
}

impl SymbolSet {
    pub fn new(branch: impl Into<String>, last: impl Into<String>, indent: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
            last: last.into(),
            indent: indent.into(),
        }
    }

    /// Padding placed beneath the last entry of a directory.
    ///
    /// Always four spaces, whatever the set, so descendants of a last entry
    /// line up with the built-in styles.
    pub fn blank(&self) -> &'static str {
        "    "
    }

    /// Connector for an entry depending on whether it closes its directory.
    pub fn connector(&self, is_last: bool) -> &str {
        if is_last { &self.last } else { &self.branch }
    }

    /// Prefix contribution for the children of an entry.
    pub fn child_prefix(&self, current_prefix: &str, is_last: bool) -> String {
        if is_last {
            format!("{}{}", current_prefix, self.blank())
        } else {
            format!("{}{}", current_prefix, self.indent)
        }
    }

    /// Width in characters of one indentation level.
    pub fn indent_width(&self) -> usize {
        self.indent.chars().count()
    }

    /// Every character that may appear in a prefix drawn with this set.
    pub fn glyph_chars(&self) -> Vec<char> {
        let mut chars: Vec<char> = self
            .branch
            .chars()
            .chain(self.last.chars())
            .chain(self.indent.chars())
            .chain(self.blank().chars())
            .collect();
        chars.sort_unstable();
        chars.dedup();
        chars
    }
}

impl Default for SymbolSet {
    fn default() -> Self {
        SymbolStyle::Classic.symbols()
    }
}

/// Named symbol styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SymbolStyle {
    /// Box-drawing characters
    #[default]
    Classic,
    /// Pipes, dashes and backslashes
    Simple,
    /// Plus signs and dashes
    Ascii,
}

impl SymbolStyle {
    pub const ALL: [SymbolStyle; 3] = [SymbolStyle::Classic, SymbolStyle::Simple, SymbolStyle::Ascii];

    pub fn symbols(self) -> SymbolSet {
        match self {
            SymbolStyle::Classic => SymbolSet::new("├── ", "└── ", "│   "),
            SymbolStyle::Simple => SymbolSet::new("|-- ", "\\-- ", "|   "),
            SymbolStyle::Ascii => SymbolSet::new("+-- ", "+-- ", "    "),
        }
    }

    /// Display name, as stored in settings files.
    pub fn name(self) -> &'static str {
        match self {
            SymbolStyle::Classic => "Classic",
            SymbolStyle::Simple => "Simple",
            SymbolStyle::Ascii => "ASCII",
        }
    }

    /// Look up a style by display name, falling back to Classic.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_else(|| {
                log::warn!("unknown symbol style '{}', using Classic", name);
                SymbolStyle::Classic
            })
    }
}

impl fmt::Display for SymbolStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_styles_are_four_wide() {
        for style in SymbolStyle::ALL {
            let set = style.symbols();
            assert_eq!(set.indent_width(), 4, "{} indent", style);
            assert_eq!(set.branch.chars().count(), 4, "{} branch", style);
            assert_eq!(set.last.chars().count(), 4, "{} last", style);
        }
    }

    #[test]
    fn test_child_prefix_uses_blank_after_last() {
        let set = SymbolStyle::Classic.symbols();
        assert_eq!(set.child_prefix("", false), "│   ");
        assert_eq!(set.child_prefix("│   ", true), "│       ");
    }

    #[test]
    fn test_from_name_falls_back_to_classic() {
        assert_eq!(SymbolStyle::from_name("Simple"), SymbolStyle::Simple);
        assert_eq!(SymbolStyle::from_name("ascii"), SymbolStyle::Ascii);
        assert_eq!(SymbolStyle::from_name("Fancy"), SymbolStyle::Classic);
    }

    #[test]
    fn test_glyph_chars_simple() {
        let chars = SymbolStyle::Simple.symbols().glyph_chars();
        for c in [' ', '|', '-', '\\'] {
            assert!(chars.contains(&c), "missing {:?}", c);
        }
        assert_eq!(chars.len(), 4);
    }
}
