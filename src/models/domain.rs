use serde::{Deserialize, Serialize};

/// Accommodation arrangement offered by a job or preferred by a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accommodation {
    #[serde(alias = "live-in", alias = "livein")]
    LiveIn,
    #[serde(alias = "live-out", alias = "liveout")]
    LiveOut,
    Either,
}

impl Accommodation {
    pub fn label(&self) -> &'static str {
        match self {
            Accommodation::LiveIn => "live-in",
            Accommodation::LiveOut => "live-out",
            Accommodation::Either => "either",
        }
    }
}

/// Availability of a candidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    #[default]
    Available,
    Unavailable,
    Employed,
}

/// Postal address down to barangay level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub barangay: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
}

/// A numeric field that upstream forms may have stored as free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    Number(f64),
    Text(String),
}

impl NumericValue {
    /// Numeric value of the field, 0 when it cannot be parsed
    pub fn value(&self) -> f64 {
        match self {
            NumericValue::Number(n) if n.is_finite() => *n,
            NumericValue::Number(_) => 0.0,
            NumericValue::Text(text) => parse_lenient(text),
        }
    }
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        NumericValue::Number(value)
    }
}

impl From<&str> for NumericValue {
    fn from(value: &str) -> Self {
        NumericValue::Text(value.to_string())
    }
}

/// Parse a free-text number such as `"15,000"`, falling back to 0
pub fn parse_lenient(text: &str) -> f64 {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',')
        .collect();

    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Service-worker candidate snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(rename = "preferredAccommodation", default)]
    pub preferred_accommodation: Option<Accommodation>,
    #[serde(rename = "expectedSalary", default)]
    pub expected_salary: Option<NumericValue>,
    #[serde(rename = "yearsExperience", default)]
    pub years_experience: Option<NumericValue>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub status: CandidateStatus,
    #[serde(rename = "isPremium", default)]
    pub is_premium: Option<bool>,
    #[serde(rename = "isTrained", default)]
    pub is_trained: Option<bool>,
    #[serde(rename = "isVerified", default)]
    pub is_verified: Option<bool>,
}

impl Candidate {
    /// `"first last"`, used for searching and name ordering
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Expected salary, 0 when missing or malformed
    pub fn salary_value(&self) -> f64 {
        self.expected_salary.as_ref().map_or(0.0, NumericValue::value)
    }

    /// Years of experience, 0 when missing or malformed
    pub fn experience_years(&self) -> f64 {
        self.years_experience.as_ref().map_or(0.0, NumericValue::value)
    }

    pub fn premium(&self) -> bool {
        self.is_premium.unwrap_or(false)
    }

    pub fn trained(&self) -> bool {
        self.is_trained.unwrap_or(false)
    }

    pub fn verified(&self) -> bool {
        self.is_verified.unwrap_or(false)
    }

    pub fn city(&self) -> Option<&str> {
        self.address.as_ref().and_then(|a| a.city.as_deref())
    }
}

/// Job posting snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "workTypes", default)]
    pub work_types: Vec<String>,
    #[serde(rename = "languagePreferences", default)]
    pub language_preferences: Vec<String>,
    #[serde(rename = "accommodationType", default)]
    pub accommodation_type: Option<Accommodation>,
    #[serde(rename = "salaryMin", default)]
    pub salary_min: Option<f64>,
    #[serde(rename = "salaryMax", default)]
    pub salary_max: Option<f64>,
    #[serde(default)]
    pub location: Option<Address>,
}

impl Job {
    pub fn city(&self) -> Option<&str> {
        self.location.as_ref().and_then(|a| a.city.as_deref())
    }
}

/// Status of an application already sent for a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Shortlisted,
    Interviewed,
    Hired,
    Rejected,
    Withdrawn,
    #[serde(other)]
    Unknown,
}

/// Existing application for a candidate, as reported by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationRecord {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    pub status: ApplicationStatus,
    #[serde(rename = "appliedAt", default)]
    pub applied_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Quality band of a match percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl MatchQuality {
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            80..=u8::MAX => MatchQuality::Excellent,
            60..=79 => MatchQuality::Good,
            40..=59 => MatchQuality::Fair,
            _ => MatchQuality::Poor,
        }
    }
}

/// Per-factor subscores, each in 0-100
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FactorScores {
    pub skill: f64,
    pub language: f64,
    pub accommodation: f64,
    pub salary: f64,
    pub location: f64,
}

/// Compatibility of one candidate with one job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub percentage: u8,
    pub factors: FactorScores,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

impl MatchResult {
    pub fn quality(&self) -> MatchQuality {
        MatchQuality::from_percentage(self.percentage)
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skill: f64,
    pub language: f64,
    pub accommodation: f64,
    pub salary: f64,
    pub location: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skill + self.language + self.accommodation + self.salary + self.location
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.35,
            language: 0.15,
            accommodation: 0.15,
            salary: 0.10,
            location: 0.25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient() {
        assert_eq!(parse_lenient("15000"), 15000.0);
        assert_eq!(parse_lenient(" 15,000 "), 15000.0);
        assert_eq!(parse_lenient("negotiable"), 0.0);
        assert_eq!(parse_lenient(""), 0.0);
        assert_eq!(parse_lenient("NaN"), 0.0);
    }

    #[test]
    fn test_numeric_value_from_json() {
        let number: NumericValue = serde_json::from_str("18000").unwrap();
        let text: NumericValue = serde_json::from_str("\"18,500\"").unwrap();
        assert_eq!(number.value(), 18000.0);
        assert_eq!(text.value(), 18500.0);
    }

    #[test]
    fn test_candidate_defaults_for_missing_fields() {
        let candidate: Candidate = serde_json::from_str(r#"{"id": "c1"}"#).unwrap();
        assert_eq!(candidate.status, CandidateStatus::Available);
        assert_eq!(candidate.salary_value(), 0.0);
        assert_eq!(candidate.experience_years(), 0.0);
        assert!(!candidate.premium());
        assert!(candidate.city().is_none());
    }

    #[test]
    fn test_accommodation_aliases() {
        let parsed: Accommodation = serde_json::from_str("\"live-in\"").unwrap();
        assert_eq!(parsed, Accommodation::LiveIn);
    }

    #[test]
    fn test_unknown_application_status() {
        let record: ApplicationRecord =
            serde_json::from_str(r#"{"candidateId": "c1", "status": "archived"}"#).unwrap();
        assert_eq!(record.status, ApplicationStatus::Unknown);
        assert!(record.applied_at.is_none());
    }

    #[test]
    fn test_match_quality_bands() {
        assert_eq!(MatchQuality::from_percentage(100), MatchQuality::Excellent);
        assert_eq!(MatchQuality::from_percentage(80), MatchQuality::Excellent);
        assert_eq!(MatchQuality::from_percentage(79), MatchQuality::Good);
        assert_eq!(MatchQuality::from_percentage(60), MatchQuality::Good);
        assert_eq!(MatchQuality::from_percentage(59), MatchQuality::Fair);
        assert_eq!(MatchQuality::from_percentage(40), MatchQuality::Fair);
        assert_eq!(MatchQuality::from_percentage(39), MatchQuality::Poor);
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!((ScoringWeights::default().sum() - 1.0).abs() < 1e-9);
    }
}
