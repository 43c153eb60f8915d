//! OCR preprocessing for parsed resume text.
//!
//! Multi-page PDF parses carry page markers, stray page numbers and image
//! placeholders that shift content between sections once the text is
//! standardized into a resume record. These are stripped before anything else
//! looks at the text.

use once_cell::sync::Lazy;
use regex::Regex;

static PAGE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)---\s*Page\s+\d+.*?---\s*").unwrap());
static PAGE_NUMBER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mi)^\s*Page\s+\d+\s*$").unwrap());
static BLANK_LINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n\s*\n+").unwrap());
static LEADING_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s+").unwrap());
static IMAGE_ARTIFACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*\[?\s*Image\s+File:\s*[^\]]*\]\s*").unwrap());

/// Removes page markers and OCR artifacts from parsed resume content.
pub fn preprocess_content(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }

    let text = PAGE_MARKER.replace_all(content, "");
    let text = PAGE_NUMBER_LINE.replace_all(&text, "");
    let text = BLANK_LINE_RUN.replace_all(&text, "\n\n");
    let text = LEADING_WHITESPACE.replace_all(&text, "");
    let text = IMAGE_ARTIFACT.replace_all(&text, "");

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_is_returned_as_is() {
        assert_eq!(preprocess_content(""), "");
    }

    #[test]
    fn test_removes_page_markers() {
        let input = "Experience\n--- Page 2 Content ---\nBuilt pipelines";
        assert_eq!(preprocess_content(input), "Experience\nBuilt pipelines");
    }

    #[test]
    fn test_removes_page_marker_with_filename() {
        let input = "Skills --- page 3 of resume.pdf --- Rust";
        assert_eq!(preprocess_content(input), "Skills Rust");
    }

    #[test]
    fn test_removes_standalone_page_number_lines() {
        let input = "Summary\nPage 4\nDetails";
        let out = preprocess_content(input);
        assert!(!out.contains("Page 4"), "got {out:?}");
        assert!(out.starts_with("Summary"));
        assert!(out.ends_with("Details"));
    }

    #[test]
    fn test_keeps_page_inside_sentence() {
        let input = "Designed the landing Page 2 redesign";
        assert_eq!(preprocess_content(input), input);
    }

    #[test]
    fn test_blank_line_runs_collapse_away() {
        // The collapsed blank line is itself leading whitespace of an empty line.
        let input = "Education\n\n\n\nB.Tech";
        assert_eq!(preprocess_content(input), "Education\nB.Tech");
    }

    #[test]
    fn test_strips_line_indentation() {
        let input = "Projects\n    Data lake\n\tETL";
        assert_eq!(preprocess_content(input), "Projects\nData lake\nETL");
    }

    #[test]
    fn test_removes_image_file_artifacts() {
        let input = "Jane Doe [Image File: photo.png] Engineer";
        assert_eq!(preprocess_content(input), "Jane DoeEngineer");
    }

    #[test]
    fn test_removes_image_artifact_without_left_bracket() {
        let input = "Header Image File: logo.jpg]\nBody";
        assert_eq!(preprocess_content(input), "HeaderBody");
    }
}
