// Model exports
pub mod domain;
pub mod query;
pub mod results;

pub use domain::{
    Accommodation, Address, ApplicationRecord, ApplicationStatus, Candidate, CandidateStatus,
    FactorScores, Job, MatchQuality, MatchResult, NumericValue, ScoringWeights,
};
pub use query::{FilterOptions, SortOption, ViewQuery};
pub use results::{RankedCandidate, RankedList, SubmissionBatch};
