use crate::models::Address;

/// How close a candidate lives to the job, from the address hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationTier {
    SameBarangay,
    SameCity,
    SameProvince,
    Elsewhere,
    /// One side has no address at all
    Unknown,
}

impl LocationTier {
    /// Location factor (0-100) for this tier
    pub fn score(&self) -> f64 {
        match self {
            LocationTier::SameBarangay => 100.0,
            LocationTier::SameCity => 90.0,
            LocationTier::SameProvince => 75.0,
            LocationTier::Elsewhere | LocationTier::Unknown => 0.0,
        }
    }
}

/// Compare a candidate address with a job location
///
/// Barangay only counts together with the city, since barangay names
/// repeat across cities. Missing or blank parts never match.
pub fn location_tier(candidate: Option<&Address>, job: Option<&Address>) -> LocationTier {
    let (candidate, job) = match (candidate, job) {
        (Some(c), Some(j)) => (c, j),
        _ => return LocationTier::Unknown,
    };

    let same_city = same_place(candidate.city.as_deref(), job.city.as_deref());

    if same_city && same_place(candidate.barangay.as_deref(), job.barangay.as_deref()) {
        LocationTier::SameBarangay
    } else if same_city {
        LocationTier::SameCity
    } else if same_place(candidate.province.as_deref(), job.province.as_deref()) {
        LocationTier::SameProvince
    } else {
        LocationTier::Elsewhere
    }
}

/// Case-insensitive, whitespace-trimmed place name equality
#[inline]
pub fn same_place(a: Option<&str>, b: Option<&str>) -> bool {
    match (a.map(str::trim), b.map(str::trim)) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => a.to_lowercase() == b.to_lowercase(),
        _ => false,
    }
}
