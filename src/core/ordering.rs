use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::models::{RankedCandidate, SortOption};

/// Sort ranked candidates in place
///
/// All orderings are stable: candidates that compare equal keep their
/// relative input order, descending ones included.
pub fn sort_candidates(entries: &mut [RankedCandidate], sort: SortOption) {
    match sort {
        SortOption::MatchDesc => {
            entries.sort_by(|a, b| b.result.percentage.cmp(&a.result.percentage))
        }
        SortOption::NameAsc => entries.sort_by(|a, b| {
            compare_names(&a.candidate.full_name(), &b.candidate.full_name())
        }),
        SortOption::NameDesc => entries.sort_by(|a, b| {
            compare_names(&b.candidate.full_name(), &a.candidate.full_name())
        }),
        SortOption::ExperienceAsc => entries.sort_by(|a, b| {
            compare_numbers(a.candidate.experience_years(), b.candidate.experience_years())
        }),
        SortOption::ExperienceDesc => entries.sort_by(|a, b| {
            compare_numbers(b.candidate.experience_years(), a.candidate.experience_years())
        }),
        SortOption::SalaryAsc => entries.sort_by(|a, b| {
            compare_numbers(a.candidate.salary_value(), b.candidate.salary_value())
        }),
        SortOption::SalaryDesc => entries.sort_by(|a, b| {
            compare_numbers(b.candidate.salary_value(), a.candidate.salary_value())
        }),
    }
}

/// Name comparison that ignores case and accents, then falls back to the
/// exact string so case variants order the same way regardless of input
pub fn compare_names(a: &str, b: &str) -> Ordering {
    name_key(a).cmp(&name_key(b)).then_with(|| a.cmp(b))
}

/// Lowercased name with combining marks stripped (`Élise` -> `elise`)
fn name_key(name: &str) -> String {
    name.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[inline]
fn compare_numbers(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
