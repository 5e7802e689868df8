use crate::core::{
    filters::{matches_filters, matches_search},
    ordering::sort_candidates,
};
use crate::models::{Job, RankedCandidate, ViewQuery};

/// Apply search, filters and ordering to scored candidates
///
/// # Pipeline Stages
/// 1. Search text
/// 2. Filters (AND-combined)
/// 3. Stable sort
pub fn process(entries: Vec<RankedCandidate>, job: &Job, query: &ViewQuery) -> Vec<RankedCandidate> {
    let total = entries.len();

    let mut visible: Vec<RankedCandidate> = entries
        .into_iter()
        // Stage 1: Search
        .filter(|entry| matches_search(entry, &query.search))
        // Stage 2: Filters
        .filter(|entry| matches_filters(entry, &query.filters, job))
        .collect();

    // Stage 3: Ordering
    sort_candidates(&mut visible, query.sort);

    tracing::trace!(
        "Pipeline kept {} of {} candidates (sort: {})",
        visible.len(),
        total,
        query.sort
    );

    visible
}
