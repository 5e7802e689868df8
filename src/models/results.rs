use serde::{Deserialize, Serialize};

use crate::models::domain::{ApplicationStatus, Candidate, MatchResult};

/// A candidate annotated with its match against the current job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate: Candidate,
    #[serde(rename = "match")]
    pub result: MatchResult,
    #[serde(rename = "applicationStatus")]
    pub application_status: Option<ApplicationStatus>,
}

impl RankedCandidate {
    pub fn has_applied(&self) -> bool {
        self.application_status.is_some()
    }
}

/// Ordered, filtered candidate list for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedList {
    pub entries: Vec<RankedCandidate>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

impl RankedList {
    pub fn candidate_ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.candidate.id.as_str()).collect()
    }
}

/// Batch handed to the submission collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionBatch {
    #[serde(rename = "jobId")]
    pub job_id: String,
    #[serde(rename = "candidateIds")]
    pub candidate_ids: Vec<String>,
}
