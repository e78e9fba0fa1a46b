//! Lenient extraction of a schedule from generated text.
//!
//! Generation backends routinely wrap their JSON in prose or markdown
//! fencing, so extraction is two-staged: decode the trimmed text directly,
//! then fall back to the first-`{`-to-last-`}` substring. Either candidate
//! is accepted only if it passes [`SchedulePlan::is_usable`]; a structurally
//! invalid plan is never accepted, no matter how close it looks.

use crate::models::SchedulePlan;

/// Extracts a usable schedule from raw generated text, or `None` when
/// neither extraction stage yields one. Accepted plans come back normalized
/// (day numbers and `total_days` consistent with the schedule length).
pub fn extract_schedule(raw: &str) -> Option<SchedulePlan> {
    if let Some(plan) = decode_candidate(raw.trim()) {
        return Some(plan);
    }

    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }
    decode_candidate(&raw[start..=end])
}

fn decode_candidate(text: &str) -> Option<SchedulePlan> {
    let mut plan: SchedulePlan = serde_json::from_str(text).ok()?;
    if !plan.is_usable() {
        return None;
    }
    plan.normalize();
    Some(plan)
}
