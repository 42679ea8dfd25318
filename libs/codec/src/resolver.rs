//! Acquirer-reference resolution policy.
//!
//! Tag 62 carries two sub-tags (03 and 05) that both plausibly mean
//! "acquirer info" across QR variants in the wild. The decoder keeps both
//! raw; this pure function is the single, testable place where one wins.

/// Pick the acquirer reference from the two raw candidates.
///
/// Precedence, evaluated in order:
/// 1. candidate B when non-empty and containing a non-digit character;
/// 2. else candidate A when non-empty and containing a non-digit character;
/// 3. else candidate B when non-empty;
/// 4. else candidate A (possibly empty).
///
/// A value with letters is more likely a genuine merchant-supplied
/// reference than an acquirer routing number, which is typically pure
/// digits; on a tie the later sub-tag (05) is the more specific one.
pub fn resolve_acquirer_reference<'a>(candidate_a: &'a str, candidate_b: &'a str) -> &'a str {
    if has_non_digit(candidate_b) {
        candidate_b
    } else if has_non_digit(candidate_a) {
        candidate_a
    } else if !candidate_b.is_empty() {
        candidate_b
    } else {
        candidate_a
    }
}

fn has_non_digit(s: &str) -> bool {
    !s.is_empty() && s.chars().any(|c| !c.is_ascii_digit())
}
