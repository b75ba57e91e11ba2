//! Route pattern compiler.
//!
//! Converts a URL pattern string like `/books/:slug-:id` into a compiled
//! regular expression plus the ordered list of placeholder names. This is
//! the only place placeholder syntax is interpreted; the matcher and the
//! reverse URL builder both work from the compiled form.
//!
//! ## Pattern syntax
//!
//! - `:name` — a placeholder; `name` is one or more word characters
//!   (letters, digits, underscore). Placeholders may occupy part of a
//!   path segment, so `/books/:slug-:id` is valid.
//! - Everything else is matched literally.
//!
//! Each placeholder compiles to a non-greedy `(.+?)` capture group and the
//! final expression is anchored at both ends, so a path must match in its
//! entirety. Non-greedy capture is what makes adjacent placeholders inside
//! one segment split correctly: `/books/:slug-:id` against
//! `/books/old-1234` captures `slug = "old"`, `id = "1234"` because each
//! group takes the minimal text that lets the whole path match.

use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder token: `:` followed by one or more word characters.
pub(crate) static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":(\w+)").expect("placeholder regex is valid"));

/// A compiled route pattern
///
/// Holds the anchored matcher regex (one capture group per placeholder,
/// in left-to-right order) and the placeholder names in that same order.
/// Immutable once created.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    param_names: Vec<String>,
}

impl CompiledPattern {
    /// The anchored matcher expression.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Placeholder names in declaration order, one per capture group.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Whether the pattern declares any placeholders.
    pub fn has_params(&self) -> bool {
        !self.param_names.is_empty()
    }
}

/// Compile a pattern string into a matcher and its parameter list
///
/// This cannot fail: text that does not form a `:name` placeholder is
/// escaped and matched literally, so a malformed pattern simply produces
/// a matcher that never matches (or matches something unintended), never
/// an error. Two placeholders with no literal separator between them
/// (`:a:b`) are not rejected either; non-greedy capture gives the first
/// group the minimal split, which may surprise — keep a literal separator
/// between adjacent placeholders.
///
/// # Example
///
/// ```
/// let compiled = waypost::pattern::compile("/books/:slug-:id");
/// assert_eq!(compiled.param_names(), &["slug", "id"]);
/// assert!(compiled.regex().is_match("/books/old-1234"));
/// assert!(!compiled.regex().is_match("/books/plain"));
/// ```
pub fn compile(pattern: &str) -> CompiledPattern {
    let mut source = String::with_capacity(pattern.len() + 8);
    source.push('^');
    let mut param_names = Vec::new();
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(pattern) {
        let token = caps.get(0).expect("capture 0 always present");
        source.push_str(&regex::escape(&pattern[last..token.start()]));
        source.push_str("(.+?)");
        param_names.push(caps[1].to_string());
        last = token.end();
    }

    source.push_str(&regex::escape(&pattern[last..]));
    source.push('$');

    // Literals are escaped and groups are fixed syntax, so the source is
    // always a valid expression.
    let regex = Regex::new(&source).expect("failed to compile pattern regex");

    CompiledPattern { regex, param_names }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_pattern_matches_whole_path_only() {
        let compiled = compile("/books");
        assert!(!compiled.has_params());
        assert!(compiled.regex().is_match("/books"));
        assert!(!compiled.regex().is_match("/books/12"));
        assert!(!compiled.regex().is_match("a/books"));
    }

    #[test]
    fn test_root_pattern() {
        let compiled = compile("/");
        assert!(compiled.regex().is_match("/"));
        assert!(!compiled.regex().is_match("/x"));
    }

    #[test]
    fn test_single_placeholder() {
        let compiled = compile("/books/:id");
        assert_eq!(compiled.param_names(), &["id"]);

        let caps = compiled.regex().captures("/books/12").unwrap();
        assert_eq!(&caps[1], "12");
        assert!(!compiled.regex().is_match("/books/"));
    }

    #[test]
    fn test_adjacent_placeholders_split_on_literal_separator() {
        let compiled = compile("/books/:slug-:id");
        assert_eq!(compiled.param_names(), &["slug", "id"]);

        let caps = compiled.regex().captures("/books/old-1234").unwrap();
        assert_eq!(&caps[1], "old");
        assert_eq!(&caps[2], "1234");
    }

    #[test]
    fn test_placeholder_names_in_declaration_order() {
        let compiled = compile("/a/:x/b/:y/c/:z");
        assert_eq!(compiled.param_names(), &["x", "y", "z"]);
    }

    #[test]
    fn test_literal_regex_characters_are_escaped() {
        let compiled = compile("/api/v1.0");
        assert!(compiled.regex().is_match("/api/v1.0"));
        assert!(!compiled.regex().is_match("/api/v1X0"));
    }

    #[test]
    fn test_lone_colon_is_literal_text() {
        // ':' not followed by a word character is not a placeholder.
        let compiled = compile("/time/:/now");
        assert!(!compiled.has_params());
        assert!(compiled.regex().is_match("/time/:/now"));
    }

    #[test]
    fn test_compile_never_fails_on_pathological_input() {
        // Broken-looking input still compiles; it just matches literally.
        let compiled = compile("((:");
        assert!(!compiled.has_params());
        assert!(compiled.regex().is_match("((:"));
    }
}
