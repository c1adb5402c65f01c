pub mod engine;
pub mod params;
pub mod sort;

pub use engine::{apply_filters, filter_jobs};
pub use params::{
    apply_filter_params, encode_filter_params, has_filter_params, ViewState, FILTER_PARAM_KEYS,
};
pub use sort::sort_jobs;

use serde::{Deserialize, Serialize};

use crate::schema::{
    EmploymentType, ExperienceLevel, SortOrder, VisaPreference, WorkMode,
};

/// The complete set of user-chosen constraints plus the sort order. A plain
/// value: the engine never mutates it, and `Default` is the all-pass
/// baseline every predicate treats as "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    #[serde(default)]
    pub company: Option<String>,
    pub locations: Vec<String>,
    pub remote_modes: Vec<WorkMode>,
    pub remote_only: bool,
    #[serde(default)]
    pub timezone: Option<String>,
    pub visa: VisaPreference,
    pub employment_types: Vec<EmploymentType>,
    pub experience_levels: Vec<ExperienceLevel>,
    pub tech: Vec<String>,
    #[serde(default)]
    pub salary_min: Option<i64>,
    #[serde(default)]
    pub salary_max: Option<i64>,
    pub sort: SortOrder,
}

fn sorted<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let mut copy = values.to_vec();
    copy.sort();
    copy
}

impl FilterState {
    /// Canonical equality for round-trip verification: list fields compare
    /// as sets, scalars by exact value.
    pub fn set_eq(&self, other: &Self) -> bool {
        self.query == other.query
            && self.company == other.company
            && sorted(&self.locations) == sorted(&other.locations)
            && sorted(&self.remote_modes) == sorted(&other.remote_modes)
            && self.remote_only == other.remote_only
            && self.timezone == other.timezone
            && self.visa == other.visa
            && sorted(&self.employment_types) == sorted(&other.employment_types)
            && sorted(&self.experience_levels) == sorted(&other.experience_levels)
            && sorted(&self.tech) == sorted(&other.tech)
            && self.salary_min == other.salary_min
            && self.salary_max == other.salary_max
            && self.sort == other.sort
    }
}
