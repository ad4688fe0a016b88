//! Organization extraction — recognizer hits gated by a work-relevance
//! context window.
//!
//! An organization name alone proves nothing (résumés mention vendors,
//! schools, and products); a hit is only admitted when a few words on either
//! side contain a work cue like "position" or "company".

use crate::resume::entities::{EntityHit, EntityRecognizer};
use crate::resume::locations::normalize;
use crate::vocab::WORK_CUES;

/// How many words on each side of a hit are inspected for a work cue.
const CONTEXT_WINDOW_WORDS: usize = 4;

/// Returns lower-cased, deduplicated organization names in discovery order.
pub fn extract_organizations(span: &str, recognizer: &dyn EntityRecognizer) -> Vec<String> {
    let mut orgs = Vec::new();
    for hit in recognizer.organizations(span) {
        if !has_work_context(span, &hit) {
            continue;
        }
        let norm = normalize(&hit.text);
        if !norm.is_empty() && !orgs.contains(&norm) {
            orgs.push(norm);
        }
    }
    orgs
}

/// True if the words surrounding the hit contain at least one work cue.
/// Cues are matched as substrings so inflections count ("worked" → "work").
fn has_work_context(span: &str, hit: &EntityHit) -> bool {
    let before = span[..hit.offset]
        .split_whitespace()
        .rev()
        .take(CONTEXT_WINDOW_WORDS);
    let after = span[hit.offset + hit.text.len()..]
        .split_whitespace()
        .take(CONTEXT_WINDOW_WORDS);

    before.chain(after).any(|word| {
        let word = word.to_lowercase();
        WORK_CUES.iter().any(|cue| word.contains(cue))
    })
}
