use serde::{Deserialize, Serialize};
use strum::AsRefStr;

use crate::JobFlags;

/// Where the work is performed. `Onsite` is the fallback when no keyword
/// matches at all.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WorkMode {
    Onsite,
    Hybrid,
    Remote,
}

impl WorkMode {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "onsite" => Some(Self::Onsite),
            "hybrid" => Some(Self::Hybrid),
            "remote" => Some(Self::Remote),
            _ => None,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl EmploymentType {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "full-time" => Some(Self::FullTime),
            "part-time" => Some(Self::PartTime),
            "contract" => Some(Self::Contract),
            "internship" => Some(Self::Internship),
            _ => None,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
    Lead,
    Manager,
}

impl ExperienceLevel {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "junior" => Some(Self::Junior),
            "mid" => Some(Self::Mid),
            "senior" => Some(Self::Senior),
            "lead" => Some(Self::Lead),
            "manager" => Some(Self::Manager),
            _ => None,
        }
    }
}

/// Visa constraint in a filter. `Any` is the no-constraint default; `Yes`
/// and `No` demand a known stance, so a posting with unknown visa fails both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VisaPreference {
    #[default]
    Any,
    Yes,
    No,
}

impl VisaPreference {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "any" => Some(Self::Any),
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Relevance,
    Newest,
    SalaryDesc,
    SalaryAsc,
}

impl SortOrder {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "relevance" => Some(Self::Relevance),
            "newest" => Some(Self::Newest),
            "salary-desc" => Some(Self::SalaryDesc),
            "salary-asc" => Some(Self::SalaryAsc),
            _ => None,
        }
    }
}

/// Which slice of the collection the caller is looking at. Membership is a
/// pure function of the caller-owned flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ViewMode {
    #[default]
    All,
    Starred,
    Applied,
    Notes,
}

impl ViewMode {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "all" => Some(Self::All),
            "starred" => Some(Self::Starred),
            "applied" => Some(Self::Applied),
            "notes" => Some(Self::Notes),
            _ => None,
        }
    }

    pub fn matches(&self, flags: &JobFlags) -> bool {
        match self {
            Self::All => true,
            Self::Starred => flags.starred,
            Self::Applied => flags.applied,
            Self::Notes => flags.notes.as_deref().is_some_and(|n| !n.trim().is_empty()),
        }
    }
}
