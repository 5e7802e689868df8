use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::domain::{CandidateStatus, MatchQuality};

/// Ordering applied to the ranked list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    #[default]
    MatchDesc,
    NameAsc,
    NameDesc,
    ExperienceAsc,
    ExperienceDesc,
    SalaryAsc,
    SalaryDesc,
}

impl SortOption {
    /// Parse a sort key, falling back to `match_desc` for unknown keys
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "name_asc" => SortOption::NameAsc,
            "name_desc" => SortOption::NameDesc,
            "experience_asc" => SortOption::ExperienceAsc,
            "experience_desc" => SortOption::ExperienceDesc,
            "salary_asc" => SortOption::SalaryAsc,
            "salary_desc" => SortOption::SalaryDesc,
            _ => SortOption::MatchDesc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::MatchDesc => "match_desc",
            SortOption::NameAsc => "name_asc",
            SortOption::NameDesc => "name_desc",
            SortOption::ExperienceAsc => "experience_asc",
            SortOption::ExperienceDesc => "experience_desc",
            SortOption::SalaryAsc => "salary_asc",
            SortOption::SalaryDesc => "salary_desc",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters applied to the ranked list. Every field is optional and
/// the active ones are AND-combined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Empty means every status passes
    #[serde(default)]
    pub status: Vec<CandidateStatus>,
    #[serde(rename = "isPremium", default)]
    pub is_premium: Option<bool>,
    #[serde(rename = "isTrained", default)]
    pub is_trained: Option<bool>,
    #[serde(rename = "matchQuality", default)]
    pub match_quality: Option<MatchQuality>,
    #[serde(rename = "sameLocation", default)]
    pub same_location: Option<bool>,
    #[serde(rename = "hideApplied", default)]
    pub hide_applied: bool,
}

impl FilterOptions {
    pub fn is_active(&self) -> bool {
        *self != FilterOptions::default()
    }
}

/// Operator view state: search text, filters and sort key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub filters: FilterOptions,
    #[serde(default)]
    pub sort: SortOption,
}

impl ViewQuery {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_filters(mut self, filters: FilterOptions) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Whether the query can drop any candidate
    pub fn is_filtered(&self) -> bool {
        !self.search.trim().is_empty() || self.filters.is_active()
    }
}
