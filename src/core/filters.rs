use crate::core::location::same_place;
use crate::models::{FilterOptions, Job, RankedCandidate};

/// Check if a candidate matches the operator's search text
///
/// Matches case-insensitively against `"first last skill1 skill2 ..."`.
/// A blank query matches everyone; otherwise the query is used as typed.
#[inline]
pub fn matches_search(entry: &RankedCandidate, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }

    let candidate = &entry.candidate;
    let haystack = format!("{} {}", candidate.full_name(), candidate.skills.join(" "));

    haystack.to_lowercase().contains(&query.to_lowercase())
}

/// Check if a candidate passes every active filter
#[inline]
pub fn matches_filters(entry: &RankedCandidate, filters: &FilterOptions, job: &Job) -> bool {
    let candidate = &entry.candidate;

    if !filters.status.is_empty() && !filters.status.contains(&candidate.status) {
        return false;
    }

    if !matches_flag(filters.is_premium, candidate.premium()) {
        return false;
    }

    if !matches_flag(filters.is_trained, candidate.trained()) {
        return false;
    }

    if let Some(quality) = filters.match_quality {
        if entry.result.quality() != quality {
            return false;
        }
    }

    if let Some(wanted) = filters.same_location {
        if same_place(candidate.city(), job.city()) != wanted {
            return false;
        }
    }

    if filters.hide_applied && entry.has_applied() {
        return false;
    }

    true
}

/// Tri-state flag check: `None` lets everything through
#[inline]
fn matches_flag(wanted: Option<bool>, actual: bool) -> bool {
    wanted.map_or(true, |wanted| wanted == actual)
}
