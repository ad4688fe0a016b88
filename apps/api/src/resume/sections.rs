//! Section segmentation — isolates the work-experience portion of a résumé.
//!
//! Policy: better to over-scan than return nothing. If no start header is
//! found the whole text is returned unchanged, so downstream passes always
//! see a non-empty span for non-empty input.

use once_cell::sync::Lazy;
use regex::Regex;

/// Headers that open a work-experience section.
static SECTION_START_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:EXPERIENCE|WORK|EMPLOYMENT|HISTORY)\b").unwrap());

/// Headers that end it.
static SECTION_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:EDUCATION|SKILLS|PROJECTS|ACHIEVEMENTS)\b").unwrap());

/// Returns the span from the first start header up to (not including) the
/// first subsequent end header, or to the end of text if none follows.
pub fn experience_section(text: &str) -> &str {
    let Some(start) = SECTION_START_RE.find(text) else {
        return text;
    };
    let rest = &text[start.end()..];
    match SECTION_END_RE.find(rest) {
        Some(end) => &text[start.start()..start.end() + end.start()],
        None => &text[start.start()..],
    }
}
