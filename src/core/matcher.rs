use std::collections::HashMap;

use crate::core::{pipeline::process, scoring::calculate_match_score};
use crate::models::{
    ApplicationRecord, ApplicationStatus, Candidate, Job, MatchResult, RankedCandidate, RankedList,
    ScoringWeights, ViewQuery,
};

/// Main ranking orchestrator - scores every candidate and runs the view pipeline
///
/// Nothing is cached: call [`Matcher::rank`] again whenever the candidates,
/// the job, the applications or the view query change.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single candidate against a job
    pub fn score(&self, candidate: &Candidate, job: &Job) -> MatchResult {
        calculate_match_score(candidate, job, &self.weights)
    }

    /// Score all candidates and attach their application status, keeping input order
    pub fn annotate(
        &self,
        job: &Job,
        candidates: Vec<Candidate>,
        applications: &[ApplicationRecord],
    ) -> Vec<RankedCandidate> {
        let mut statuses: HashMap<&str, ApplicationStatus> = HashMap::with_capacity(applications.len());
        for record in applications {
            statuses.entry(record.candidate_id.as_str()).or_insert(record.status);
        }

        candidates
            .into_iter()
            .map(|candidate| {
                let result = self.score(&candidate, job);
                let application_status = statuses.get(candidate.id.as_str()).copied();
                RankedCandidate {
                    candidate,
                    result,
                    application_status,
                }
            })
            .collect()
    }

    /// Rank candidates for a job under the operator's current view
    ///
    /// # Arguments
    /// * `job` - The job posting candidates are scored against
    /// * `candidates` - Current candidate snapshot
    /// * `applications` - Existing applications for this job
    /// * `query` - Search text, filters and sort key
    ///
    /// # Returns
    /// RankedList with the visible candidates in display order
    pub fn rank(
        &self,
        job: &Job,
        candidates: Vec<Candidate>,
        applications: &[ApplicationRecord],
        query: &ViewQuery,
    ) -> RankedList {
        let total_candidates = candidates.len();

        let annotated = self.annotate(job, candidates, applications);
        let entries = process(annotated, job, query);

        tracing::debug!(
            "Ranked {} of {} candidates for job {}",
            entries.len(),
            total_candidates,
            job.id
        );

        RankedList {
            entries,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
