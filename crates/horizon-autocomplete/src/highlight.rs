//! Substring highlighting for candidate labels.
//!
//! [`highlight`] splits a label around the first case-insensitive occurrence
//! of the trimmed query; [`highlight_nodes`] turns the result into render
//! nodes. Both are public so custom row renderers can reuse them.

use crate::dom::Node;

/// One piece of a highlighted label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text outside the match.
    Plain(&'a str),
    /// The matched text.
    Emphasized(&'a str),
}

impl<'a> Segment<'a> {
    /// The text of this segment.
    pub fn as_str(&self) -> &'a str {
        match self {
            Self::Plain(s) | Self::Emphasized(s) => s,
        }
    }

    /// Returns `true` for the matched segment.
    pub fn is_emphasized(&self) -> bool {
        matches!(self, Self::Emphasized(_))
    }
}

/// Split `label` around the first case-insensitive match of `query`.
///
/// - With a match, the result is exactly three segments: the text before the
///   match (possibly empty), the match, and the text after it (possibly
///   empty). The match keeps the label's original casing.
/// - Without a match, or with a blank query, the whole label is one plain
///   segment.
/// - A missing or empty label produces no segments.
///
/// ```
/// use horizon_autocomplete::highlight::{Segment, highlight};
///
/// assert_eq!(
///     highlight(Some("London"), "lon"),
///     vec![Segment::Plain(""), Segment::Emphasized("Lon"), Segment::Plain("don")]
/// );
/// assert_eq!(highlight(Some("London"), "xyz"), vec![Segment::Plain("London")]);
/// assert!(highlight(None, "lon").is_empty());
/// ```
pub fn highlight<'a>(label: Option<&'a str>, query: &str) -> Vec<Segment<'a>> {
    let Some(label) = label.filter(|l| !l.is_empty()) else {
        return Vec::new();
    };

    match find_case_insensitive(label, query.trim()) {
        Some((start, end)) => vec![
            Segment::Plain(&label[..start]),
            Segment::Emphasized(&label[start..end]),
            Segment::Plain(&label[end..]),
        ],
        None => vec![Segment::Plain(label)],
    }
}

/// Byte range in `haystack` of the first case-insensitive occurrence of
/// `needle`, compared char by char so the range always falls on char
/// boundaries of the original text.
fn find_case_insensitive(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }

    for (start, _) in haystack.char_indices() {
        let mut rest = haystack[start..].char_indices();
        let mut end = start;
        let mut matched = true;
        for wanted in needle.chars() {
            match rest.next() {
                Some((offset, have)) if chars_eq_ignore_case(have, wanted) => {
                    end = start + offset + have.len_utf8();
                }
                _ => {
                    matched = false;
                    break;
                }
            }
        }
        if matched {
            return Some((start, end));
        }
    }
    None
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Build render nodes for a highlighted label.
///
/// Plain segments become text nodes; the match becomes a `strong` element
/// with the `{class_prefix}match` class.
pub fn highlight_nodes(label: Option<&str>, query: &str, class_prefix: &str) -> Vec<Node> {
    highlight(label, query)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(text) => Node::text(text),
            Segment::Emphasized(text) => Node::element("strong")
                .class(format!("{class_prefix}match"))
                .child(Node::text(text)),
        })
        .collect()
}
