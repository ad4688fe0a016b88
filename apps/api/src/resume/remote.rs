//! Remote-work detection.
//!
//! A single OR over fixed surface patterns: one hit anywhere in the span
//! sets the flag. There is deliberately no negation handling — "not eligible
//! for remote work" still counts as remote experience. Matching surface
//! patterns only is a documented limitation of this heuristic, not a bug to
//! fix with negation-scope rules.

use once_cell::sync::Lazy;
use regex::Regex;

static REMOTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:remote|work from home|telecommute|virtual|distributed team|work(?:ed|ing)? remotely|remote (?:position|role|work))\b",
    )
    .unwrap()
});

/// True if any remote-work pattern occurs anywhere in the span.
pub fn has_remote_experience(span: &str) -> bool {
    REMOTE_RE.is_match(span)
}
