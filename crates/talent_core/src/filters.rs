use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{Job, Professional, MAX_RATING};

pub const MIN_DISTANCE_KM: u32 = 5;
pub const MAX_DISTANCE_KM: u32 = 100;
pub const RATING_STEP: f64 = 0.5;
pub const DEFAULT_MAX_DISTANCE_KM: u32 = 50;
pub const DEFAULT_SALARY_MAX: u64 = 500_000;

/// Work modes offered by the filter panel.
pub const WORK_MODE_OPTIONS: [&str; 3] = ["Remote", "Hybrid", "Onsite"];

/// User-adjustable constraints sent along with every search.
///
/// Setters keep every field inside its bounds, so a value read back is
/// always one the filter panel could have produced. Deserialization goes
/// through the same setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FilterFields", rename_all = "camelCase")]
pub struct FilterCriteria {
    max_distance: u32,
    min_rating: f64,
    work_mode: BTreeSet<String>,
    salary_min: u64,
    salary_max: u64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE_KM,
            min_rating: 0.0,
            work_mode: BTreeSet::new(),
            salary_min: 0,
            salary_max: DEFAULT_SALARY_MAX,
        }
    }
}

/// Unchecked wire form of [`FilterCriteria`]; missing fields take the defaults.
#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct FilterFields {
    max_distance: i64,
    min_rating: f64,
    work_mode: Vec<String>,
    salary_min: u64,
    salary_max: u64,
}

impl Default for FilterFields {
    fn default() -> Self {
        Self {
            max_distance: i64::from(DEFAULT_MAX_DISTANCE_KM),
            min_rating: 0.0,
            work_mode: Vec::new(),
            salary_min: 0,
            salary_max: DEFAULT_SALARY_MAX,
        }
    }
}

impl From<FilterFields> for FilterCriteria {
    fn from(fields: FilterFields) -> Self {
        let mut filters = FilterCriteria::default();
        filters.set_max_distance(fields.max_distance);
        filters.set_min_rating(fields.min_rating);
        for mode in &fields.work_mode {
            filters.set_work_mode(mode, true);
        }
        filters.set_salary_range(fields.salary_min, fields.salary_max);
        filters
    }
}

impl FilterCriteria {
    pub fn max_distance(&self) -> u32 {
        self.max_distance
    }

    pub fn min_rating(&self) -> f64 {
        self.min_rating
    }

    pub fn work_modes(&self) -> &BTreeSet<String> {
        &self.work_mode
    }

    pub fn salary_range(&self) -> (u64, u64) {
        (self.salary_min, self.salary_max)
    }

    /// Clamps to `MIN_DISTANCE_KM..=MAX_DISTANCE_KM`. Returns whether the value changed.
    pub fn set_max_distance(&mut self, km: i64) -> bool {
        let clamped = km.clamp(i64::from(MIN_DISTANCE_KM), i64::from(MAX_DISTANCE_KM)) as u32;
        replace(&mut self.max_distance, clamped)
    }

    /// Snaps to the nearest half star inside `0..=5`. Non-finite input resets to 0.
    pub fn set_min_rating(&mut self, rating: f64) -> bool {
        let snapped = if rating.is_finite() {
            ((rating.clamp(0.0, MAX_RATING) / RATING_STEP).round() * RATING_STEP)
                .clamp(0.0, MAX_RATING)
        } else {
            0.0
        };
        replace(&mut self.min_rating, snapped)
    }

    pub fn set_work_mode(&mut self, mode: &str, enabled: bool) -> bool {
        let mode = mode.trim();
        if mode.is_empty() {
            return false;
        }
        if enabled {
            self.work_mode.insert(mode.to_string())
        } else {
            self.work_mode.remove(mode)
        }
    }

    /// Out-of-order bounds are swapped.
    pub fn set_salary_range(&mut self, min: u64, max: u64) -> bool {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let changed_min = replace(&mut self.salary_min, min);
        let changed_max = replace(&mut self.salary_max, max);
        changed_min || changed_max
    }

    pub fn admits_job(&self, job: &Job) -> bool {
        self.admits_distance(job.location.distance)
            && self.admits_work_modes(&job.work_mode)
            && self.admits_salary(job.salary)
    }

    pub fn admits_professional(&self, pro: &Professional) -> bool {
        self.admits_distance(pro.location.distance)
            && self.admits_work_modes(&pro.work_mode)
            && self.admits_salary(pro.salary)
            && pro.rating >= self.min_rating
    }

    fn admits_distance(&self, distance: f64) -> bool {
        distance <= f64::from(self.max_distance)
    }

    fn admits_salary(&self, salary: f64) -> bool {
        salary >= self.salary_min as f64 && salary <= self.salary_max as f64
    }

    // An empty selection admits everything; otherwise any shared mode will do.
    fn admits_work_modes(&self, modes: &[String]) -> bool {
        if self.work_mode.is_empty() {
            return true;
        }
        modes.iter().any(|mode| {
            let mode = canonical_work_mode(mode);
            self.work_mode
                .iter()
                .any(|wanted| canonical_work_mode(wanted) == mode)
        })
    }
}

/// Folds the Spanish labels used by the catalog onto the filter options.
pub fn canonical_work_mode(mode: &str) -> String {
    let lowered = mode.trim().to_lowercase();
    match lowered.as_str() {
        "remoto" | "remote" => "remote".to_string(),
        "híbrido" | "hibrido" | "hybrid" => "hybrid".to_string(),
        "presencial" | "on-site" | "on site" | "onsite" => "onsite".to_string(),
        _ => lowered,
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}
