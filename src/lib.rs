pub mod extraction;
pub mod filter;
pub mod logging;
pub mod normalize;
pub mod schema;
pub mod search;
pub mod tags;
pub mod tech_keywords;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use extraction::parse_job_from_comment;
pub use filter::{apply_filters, filter_jobs, sort_jobs, FilterState, ViewState};
pub use schema::{
    EmploymentType, ExperienceLevel, SortOrder, ViewMode, VisaPreference, WorkMode,
};
pub use tech_keywords::{
    default_tech_dictionary, extract_tech_keywords, DictionaryError, TechDictionary,
};

/// One raw comment as delivered by the search API. The extraction pipeline
/// reads `comment_text` (falling back to `text`); everything else is carried
/// through to the posting unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceComment {
    #[serde(alias = "objectID")]
    pub id: String,
    pub story_id: i64,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub story_title: Option<String>,
    #[serde(default)]
    pub story_url: Option<String>,
    pub author: String,
    pub created_at: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub comment_text: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Provenance of a posting, copied verbatim from its source comment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceMetadata {
    pub story_id: i64,
    #[serde(default)]
    pub story_title: Option<String>,
    #[serde(default)]
    pub story_url: Option<String>,
    pub author: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

/// Caller-owned bookmarking state. The core never infers these values; it
/// only carries them so persisted state can be merged back onto freshly
/// rebuilt postings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobFlags {
    pub starred: bool,
    pub applied: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Parsed salary range. `min`/`max` are kept exactly as they appeared in the
/// text, so `min <= max` is not guaranteed; range comparisons must order the
/// pair themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    #[serde(default)]
    pub min: Option<i64>,
    #[serde(default)]
    pub max: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub raw: Option<String>,
}

/// One structured job record derived from one source comment.
///
/// Built once per comment and treated as a cache entry keyed by `id`:
/// re-running extraction on identical input yields a field-for-field
/// identical record. Only `flags` may change afterwards, via an explicit
/// caller update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub story_id: i64,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    pub locations: Vec<String>,
    pub work_mode: WorkMode,
    pub remote_only: bool,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub visa: Option<bool>,
    pub employment_types: Vec<EmploymentType>,
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub salary: Option<SalaryRange>,
    pub text: String,
    #[serde(default)]
    pub html: Option<String>,
    pub created_at: String,
    pub url: String,
    pub source: SourceMetadata,
    pub tags: Vec<String>,
    #[serde(default)]
    pub flags: JobFlags,
}

impl JobPosting {
    /// Replace the caller-owned flags, leaving every extracted field intact.
    pub fn with_flags(mut self, flags: JobFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// Merge persisted flag state onto freshly rebuilt postings. Postings without
/// a saved entry keep their cleared default.
pub fn apply_persisted_flags(jobs: &mut [JobPosting], saved: &HashMap<String, JobFlags>) {
    for job in jobs.iter_mut() {
        if let Some(flags) = saved.get(&job.id) {
            job.flags = flags.clone();
        }
    }
}
