//! Case-insensitive keyword matching

use crate::rename::tables::KeywordRule;

/// Check whether `text` contains any of `keywords`, ignoring case
///
/// Keywords are plain substrings; characters such as `.` have no special
/// meaning.
pub fn is_included(text: &str, keywords: &[&str]) -> bool {
    let haystack = text.to_lowercase();
    keywords
        .iter()
        .any(|keyword| haystack.contains(&keyword.to_lowercase()))
}

/// Return the label of the first rule matching `text`
pub fn first_match(text: &str, rules: &[KeywordRule]) -> Option<&'static str> {
    rules
        .iter()
        .find(|rule| is_included(text, rule.keywords))
        .map(|rule| rule.label)
}
