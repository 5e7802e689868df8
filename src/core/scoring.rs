use crate::core::location::{location_tier, LocationTier};
use crate::models::{Accommodation, Candidate, FactorScores, Job, MatchResult, ScoringWeights};

/// Percentage ceiling when not a single skill matches
const SKILL_MISMATCH_CAP: f64 = 60.0;

/// Explanation attached to a factor
#[derive(Debug, Clone, PartialEq)]
enum Remark {
    Strength(String),
    Weakness(String),
}

/// Calculate the match (0-100) of a candidate for a job
///
/// Scoring formula:
/// percentage = round(min(cap, min(100,
///     skill_score * 0.35 +           # Work types covered by the candidate's skills
///     language_score * 0.15 +        # Preferred languages spoken
///     accommodation_score * 0.15 +   # Live-in / live-out preference
///     salary_score * 0.10 +          # Expected salary against the budget
///     location_score * 0.25 +        # Barangay / city / province proximity
///     experience_bonus               # +5 from 3 years, +10 from 5 years
/// )))
/// where cap is 60 when the skill score is 0 and 100 otherwise.
///
/// A factor whose input is missing on either side scores 0.
pub fn calculate_match_score(
    candidate: &Candidate,
    job: &Job,
    weights: &ScoringWeights,
) -> MatchResult {
    let (skill, skill_remark) = calculate_skill_score(candidate, job);
    let (language, language_remark) = calculate_language_score(candidate, job);
    let (accommodation, accommodation_remark) = calculate_accommodation_score(candidate, job);
    let (salary, salary_remark) = calculate_salary_score(candidate, job);
    let (location, location_remark) = calculate_location_score(candidate, job);
    let (bonus, experience_remark) = calculate_experience_bonus(candidate.experience_years());

    let weighted = skill * weights.skill
        + language * weights.language
        + accommodation * weights.accommodation
        + salary * weights.salary
        + location * weights.location;

    let mut total = (weighted + bonus).min(100.0);
    // Re-applied after the bonus, so experience cannot lift a skill mismatch past the cap
    if skill == 0.0 {
        total = total.min(SKILL_MISMATCH_CAP);
    }

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    for remark in [
        skill_remark,
        language_remark,
        accommodation_remark,
        salary_remark,
        location_remark,
        experience_remark,
    ]
    .into_iter()
    .flatten()
    {
        match remark {
            Remark::Strength(s) => strengths.push(s),
            Remark::Weakness(w) => weaknesses.push(w),
        }
    }

    MatchResult {
        // Float-to-int casts saturate, NaN becomes 0
        percentage: total.round().clamp(0.0, 100.0) as u8,
        factors: FactorScores {
            skill,
            language,
            accommodation,
            salary,
            location,
        },
        strengths,
        weaknesses,
    }
}

/// Turn raw work types such as `child_care` into display tokens (`Child Care`)
///
/// One token per work type, blank entries included.
pub fn normalize_work_types(work_types: &[String]) -> Vec<String> {
    work_types.iter().map(|work_type| title_case(work_type)).collect()
}

fn title_case(raw: &str) -> String {
    raw.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Skill score (0-100)
///
/// A skill counts when it contains a work type token or is contained by
/// one, ignoring case. "Cook" therefore matches "Cooking" and also any
/// other token that happens to share the substring. An empty skill or an
/// empty token is contained by everything.
fn calculate_skill_score(candidate: &Candidate, job: &Job) -> (f64, Option<Remark>) {
    let tokens: Vec<String> = normalize_work_types(&job.work_types)
        .into_iter()
        .map(|t| t.to_lowercase())
        .collect();

    let matched = if tokens.is_empty() {
        0
    } else {
        candidate
            .skills
            .iter()
            .map(|skill| skill.to_lowercase())
            .filter(|skill| {
                tokens
                    .iter()
                    .any(|token| token.contains(skill.as_str()) || skill.contains(token.as_str()))
            })
            .count()
    };

    if matched == 0 {
        return (0.0, Some(Remark::Weakness("No matching skills found".to_string())));
    }

    let score = (matched as f64 / tokens.len() as f64 * 100.0).min(100.0);
    let noun = if matched == 1 { "skill" } else { "skills" };
    (score, Some(Remark::Strength(format!("Matches {} required {}", matched, noun))))
}

/// Language score (0-100): share of the job's preferred languages spoken
fn calculate_language_score(candidate: &Candidate, job: &Job) -> (f64, Option<Remark>) {
    let preferred: Vec<&str> = job
        .language_preferences
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    if preferred.is_empty() || candidate.languages.is_empty() {
        return (0.0, None);
    }

    let spoken = preferred
        .iter()
        .filter(|wanted| {
            candidate
                .languages
                .iter()
                .any(|l| l.trim().to_lowercase() == wanted.to_lowercase())
        })
        .count();

    let score = (spoken as f64 / preferred.len() as f64 * 100.0).min(100.0);
    let remark = if spoken == preferred.len() {
        Remark::Strength("Speaks all preferred languages".to_string())
    } else if spoken > 0 {
        Remark::Strength(format!(
            "Speaks {} of {} preferred languages",
            spoken,
            preferred.len()
        ))
    } else {
        Remark::Weakness("Does not speak the preferred languages".to_string())
    };

    (score, Some(remark))
}

/// Accommodation score: 100 on a matching or flexible preference, else 0
fn calculate_accommodation_score(candidate: &Candidate, job: &Job) -> (f64, Option<Remark>) {
    let (preferred, offered) = match (candidate.preferred_accommodation, job.accommodation_type) {
        (Some(p), Some(o)) => (p, o),
        _ => return (0.0, None),
    };

    if preferred == Accommodation::Either {
        (
            100.0,
            Some(Remark::Strength("Open to live-in or live-out arrangements".to_string())),
        )
    } else if preferred == offered {
        (
            100.0,
            Some(Remark::Strength(format!("Prefers {} arrangement", preferred.label()))),
        )
    } else {
        (
            0.0,
            Some(Remark::Weakness(format!("Prefers {} arrangement", preferred.label()))),
        )
    }
}

/// Salary score (0-100)
///
/// Within budget scores 100 and below budget 90. Above budget loses one
/// point per percent over the maximum.
fn calculate_salary_score(candidate: &Candidate, job: &Job) -> (f64, Option<Remark>) {
    let expected = candidate.salary_value();
    let (min, max) = match (job.salary_min, job.salary_max) {
        (Some(min), Some(max)) if max > 0.0 => (min, max),
        _ => return (0.0, None),
    };

    if expected <= 0.0 {
        return (0.0, None);
    }

    if expected >= min && expected <= max {
        (
            100.0,
            Some(Remark::Strength("Salary expectation is within budget".to_string())),
        )
    } else if expected < min {
        (
            90.0,
            Some(Remark::Strength("Salary expectation is below budget".to_string())),
        )
    } else {
        let over_pct = (expected - max) / max * 100.0;
        (
            (100.0 - over_pct).max(0.0),
            Some(Remark::Weakness(format!(
                "Salary expectation is {}% over budget",
                over_pct.round()
            ))),
        )
    }
}

fn calculate_location_score(candidate: &Candidate, job: &Job) -> (f64, Option<Remark>) {
    let tier = location_tier(candidate.address.as_ref(), job.location.as_ref());

    let remark = match tier {
        LocationTier::SameBarangay => Some(Remark::Strength("Lives in the same barangay".to_string())),
        LocationTier::SameCity => Some(Remark::Strength("Lives in the same city".to_string())),
        LocationTier::SameProvince => Some(Remark::Strength("Lives in the same province".to_string())),
        LocationTier::Elsewhere => Some(Remark::Weakness("Lives outside the job's province".to_string())),
        LocationTier::Unknown => None,
    };

    (tier.score(), remark)
}

/// Additive experience bonus, never a weakness
fn calculate_experience_bonus(years: f64) -> (f64, Option<Remark>) {
    let bonus = if years >= 5.0 {
        10.0
    } else if years >= 3.0 {
        5.0
    } else {
        return (0.0, None);
    };

    (bonus, Some(Remark::Strength(format!("{} years of experience", format_years(years)))))
}

fn format_years(years: f64) -> String {
    if years.fract() == 0.0 {
        format!("{}", years as u32)
    } else {
        format!("{:.1}", years)
    }
}
