//! Splits a free-form project description into bullet items.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::richtext::{segment, Segment};

// Sentence end (punctuation stays with the left piece), newline, <br>, <li>.
static BULLET_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.?!])\s+|\n|<br\s*/?>|<li>").unwrap());

/// Splits `description` into trimmed, non-empty bullet strings (markup kept).
pub fn split_bullets(description: &str) -> Vec<String> {
    let normalized = description.replace("</li>", "</li>\n").replace('•', "\n");

    let mut pieces = Vec::new();
    let mut start = 0;
    for caps in BULLET_BREAK.captures_iter(&normalized) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let end = caps.get(1).map_or(whole.start(), |punct| punct.end());
        pieces.push(&normalized[start..end]);
        start = whole.end();
    }
    pieces.push(&normalized[start..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits `description` into bullets and segments each one, dropping bullets
/// that carry no visible text once tags are removed.
pub fn bullet_segments(description: &str) -> Vec<Vec<Segment>> {
    split_bullets(description)
        .iter()
        .map(|bullet| segment(bullet))
        .filter(|segments| !segments.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::richtext::plain_text;

    fn texts(description: &str) -> Vec<String> {
        bullet_segments(description)
            .iter()
            .map(|segments| plain_text(segments))
            .collect()
    }

    #[test]
    fn test_splits_on_sentence_ends() {
        assert_eq!(
            split_bullets("Built the API. Cut latency by 40%! Why? Scale."),
            vec!["Built the API.", "Cut latency by 40%!", "Why?", "Scale."]
        );
    }

    #[test]
    fn test_decimal_points_do_not_split() {
        assert_eq!(
            split_bullets("Improved throughput 2.5x in Q3"),
            vec!["Improved throughput 2.5x in Q3"]
        );
    }

    #[test]
    fn test_splits_on_newlines_and_bullet_glyphs() {
        assert_eq!(
            split_bullets("Designed schema\n\n• Wrote ETL•Tuned Spark"),
            vec!["Designed schema", "Wrote ETL", "Tuned Spark"]
        );
    }

    #[test]
    fn test_splits_html_lists_and_breaks() {
        assert_eq!(
            texts("<ul><li>Ingest</li><li>Transform</li></ul>"),
            vec!["Ingest", "Transform"]
        );
        assert_eq!(
            texts("One<br>Two<br/>Three<br />Four"),
            vec!["One", "Two", "Three", "Four"]
        );
    }

    #[test]
    fn test_tag_only_pieces_are_dropped() {
        // "<ul>" before the first <li> and "</ul>" after the last one carry no text.
        let bullets = bullet_segments("<ul><li>Only item</li></ul>");
        assert_eq!(bullets.len(), 1);
    }

    #[test]
    fn test_bold_survives_splitting() {
        let bullets = bullet_segments("Migrated to <strong>Kubernetes</strong>. Saved costs.");
        assert_eq!(
            bullets,
            vec![
                vec![
                    Segment::plain("Migrated to "),
                    Segment::bold("Kubernetes"),
                    Segment::plain("."),
                ],
                vec![Segment::plain("Saved costs.")],
            ]
        );
    }

    #[test]
    fn test_empty_description() {
        assert!(split_bullets("").is_empty());
        assert!(bullet_segments("   \n  ").is_empty());
    }
}
