//! Built-in sanitizer transforms and the registry that catalogs them.
//!
//! A sanitizer is a named, pure `&str -> String` transform with an integer
//! priority. Pipelines always run sanitizers in ascending priority order, no
//! matter in which order a configuration lists them.
//!
//! | name                             | priority |
//! |----------------------------------|----------|
//! | `trimSpaces`                     | 0        |
//! | `removeNewLines`                 | 10       |
//! | `removeUnicodeControlCharacters` | 20       |

pub mod registry;

use lazy_static::lazy_static;
use regex::Regex;

pub const TRIM_SPACES: &str = "trimSpaces";
pub const REMOVE_NEW_LINES: &str = "removeNewLines";
pub const REMOVE_UNICODE_CONTROL_CHARACTERS: &str = "removeUnicodeControlCharacters";

/// A transform applied by a sanitizer.
pub type SanitizerAction = fn(&str) -> String;

/// A single catalog entry.
#[derive(Debug, Clone)]
pub struct SanitizerSpec {
    /// Unique name used by field configurations (e.g. "trimSpaces").
    pub name: String,
    /// Lower priorities run first.
    pub priority: i32,
    pub action: SanitizerAction,
}

impl SanitizerSpec {
    pub fn new(name: impl Into<String>, priority: i32, action: SanitizerAction) -> Self {
        Self {
            name: name.into(),
            priority,
            action,
        }
    }

    pub fn apply(&self, value: &str) -> String {
        (self.action)(value)
    }
}

lazy_static! {
    /// Every carriage return, plus a line feed at the very end of the input.
    static ref CARRIAGE_RETURN_OR_TRAILING_LINE_FEED: Regex = Regex::new(r"\r|\n$").unwrap();
    /// A line feed together with the spaces around it.
    static ref SPACED_LINE_FEED: Regex = Regex::new(r" *\n *").unwrap();
}

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Strips leading and trailing whitespace, line breaks included. A byte order
/// mark at either end is stripped too.
pub fn trim_spaces(value: &str) -> String {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
        .to_string()
}

/// Folds a multi-line value onto one line.
///
/// Carriage returns are dropped and a single trailing line feed is removed.
/// Every remaining line feed, along with any spaces hugging it, becomes one
/// space.
pub fn remove_new_lines(value: &str) -> String {
    let without_cr = CARRIAGE_RETURN_OR_TRAILING_LINE_FEED.replace_all(value, "");
    SPACED_LINE_FEED.replace_all(&without_cr, " ").into_owned()
}

/// Deletes C0 and C1 control characters except line feed (U+000A) and
/// horizontal tab (U+0009).
pub fn remove_unicode_control_characters(value: &str) -> String {
    value.chars().filter(|c| !is_stripped_control(*c)).collect()
}

fn is_stripped_control(c: char) -> bool {
    // `char::is_control` covers exactly U+0000..=U+001F and U+007F..=U+009F.
    c.is_control() && c != '\n' && c != '\t'
}

/// The three sanitizers every registry built with `Registry::builtin` carries.
pub fn builtin_sanitizers() -> Vec<SanitizerSpec> {
    vec![
        SanitizerSpec::new(TRIM_SPACES, 0, trim_spaces),
        SanitizerSpec::new(REMOVE_NEW_LINES, 10, remove_new_lines),
        SanitizerSpec::new(REMOVE_UNICODE_CONTROL_CHARACTERS, 20, remove_unicode_control_characters),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_spaces() {
        assert_eq!(trim_spaces(" book 1 "), "book 1");
        assert_eq!(trim_spaces("\n\tbook\n1\n"), "book\n1");
        assert_eq!(trim_spaces("   "), "");
    }

    #[test]
    fn test_trim_spaces_strips_byte_order_mark() {
        assert_eq!(trim_spaces("\u{FEFF} book 1 "), "book 1");
        assert_eq!(trim_spaces("book\u{FEFF}"), "book");
        assert_eq!(trim_spaces("a\u{FEFF}b"), "a\u{FEFF}b");
    }

    #[test]
    fn test_remove_new_lines() {
        assert_eq!(remove_new_lines("book\n1"), "book 1");
        assert_eq!(remove_new_lines("book\n\r1"), "book 1");
        assert_eq!(remove_new_lines("book\n1\n"), "book 1");
        assert_eq!(remove_new_lines("book\n 1"), "book 1");
        assert_eq!(remove_new_lines("book  \n  1"), "book 1");
        assert_eq!(remove_new_lines("a\r\nb\r\nc"), "a b c");
    }

    #[test]
    fn test_remove_new_lines_only_one_trailing_line_feed() {
        assert_eq!(remove_new_lines("book\n\n"), "book ");
    }

    #[test]
    fn test_remove_unicode_control_characters() {
        assert_eq!(remove_unicode_control_characters("book1\u{0000}"), "book1");
        assert_eq!(remove_unicode_control_characters("book1 😀"), "book1 😀");
        assert_eq!(remove_unicode_control_characters("a\u{0008}b\u{001B}c\u{007F}d\u{009F}e"), "abcde");
    }

    #[test]
    fn test_remove_unicode_control_characters_keeps_line_feed_and_tab() {
        assert_eq!(remove_unicode_control_characters("a\nb\tc"), "a\nb\tc");
        assert_eq!(remove_unicode_control_characters("a\u{000B}b\u{000C}c\rd"), "abcd");
        // U+00A0 is just past the C1 range.
        assert_eq!(remove_unicode_control_characters("a\u{00A0}b"), "a\u{00A0}b");
    }

    #[test]
    fn test_builtin_priorities_are_distinct() {
        let specs = builtin_sanitizers();
        let mut priorities: Vec<i32> = specs.iter().map(|s| s.priority).collect();
        priorities.dedup();
        assert_eq!(priorities, vec![0, 10, 20]);
    }
}
