//! Paragraph segmentation for answers without role markers

use super::markup::strip_markup;
use super::segment::Segment;
use regex::Regex;
use std::sync::OnceLock;

/// Two consecutive line breaks, e.g. `<br><br>`, `<BR/> <br />`.
static PARAGRAPH_BREAK: OnceLock<Regex> = OnceLock::new();

fn paragraph_break() -> &'static Regex {
    PARAGRAPH_BREAK.get_or_init(|| {
        Regex::new(r"(?i)<br\s*/?>\s*<br\s*/?>").expect("paragraph break pattern is valid")
    })
}

/// Split a raw answer into paragraphs on double line breaks.
///
/// Each piece is stripped of markup; pieces left empty are dropped. Text
/// without any double break comes back as a single paragraph.
pub fn split_paragraphs(text: &str) -> Vec<Segment> {
    paragraph_break()
        .split(text)
        .map(strip_markup)
        .filter(|paragraph| !paragraph.is_empty())
        .map(Segment::paragraph)
        .collect()
}

/// Turn author-segmented fragments into paragraphs.
///
/// Fragments are already clean: they are trimmed but never re-split or
/// re-classified, even if one of them happens to contain marker-like text.
pub fn paragraphs_from_fragments(fragments: &[String]) -> Vec<Segment> {
    fragments
        .iter()
        .map(|fragment| fragment.trim())
        .filter(|fragment| !fragment.is_empty())
        .map(Segment::paragraph)
        .collect()
}
