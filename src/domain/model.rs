use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One notable person and the coordinates of their birthplace, extracted
/// from a single SPARQL result binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographicRecord {
    pub person_name: String,
    pub birth_place_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeographicRecord {
    /// Both components finite and within WGS84 bounds.
    pub fn in_bounds(latitude: f64, longitude: f64) -> bool {
        latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude)
    }
}

/// Complete result of one fetch cycle. Snapshots are immutable once
/// published; the store swaps whole snapshots, never individual records.
#[derive(Debug, Clone)]
pub struct MarkerSnapshot {
    pub records: Vec<GeographicRecord>,
    pub fetched_at: DateTime<Utc>,
}

impl MarkerSnapshot {
    pub fn new(records: Vec<GeographicRecord>) -> Self {
        Self {
            records,
            fetched_at: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}
