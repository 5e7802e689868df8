//! Helper Match - Candidate scoring and ranking for household helper hiring
//!
//! This library scores how well service-worker candidates fit a job posting,
//! then searches, filters and orders the scored list for an operator who
//! selects candidates within a credit budget.

pub mod config;
pub mod core;
pub mod models;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{process, Matcher, SelectionChange, SelectionRejected, SelectionTracker};
pub use models::{
    ApplicationRecord, Candidate, FilterOptions, Job, MatchQuality, MatchResult, RankedCandidate,
    RankedList, ScoringWeights, SortOption, SubmissionBatch, ViewQuery,
};
