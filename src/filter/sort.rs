use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};
use tracing::warn;

use crate::schema::SortOrder;
use crate::JobPosting;

/// Average of the record's present salary bounds; a single bound stands for
/// itself. No bounds, no value.
fn salary_value(job: &JobPosting) -> Option<f64> {
    let salary = job.salary.as_ref()?;
    let bounds: Vec<i64> = [salary.min, salary.max].into_iter().flatten().collect();
    if bounds.is_empty() {
        return None;
    }

    Some(bounds.iter().sum::<i64>() as f64 / bounds.len() as f64)
}

fn created_at(job: &JobPosting) -> Option<DateTime<FixedOffset>> {
    match DateTime::parse_from_rfc3339(&job.created_at) {
        Ok(timestamp) => Some(timestamp),
        Err(error) => {
            warn!(id = %job.id, created_at = %job.created_at, %error, "unparsable timestamp; sorting last");
            None
        }
    }
}

fn compare_optional(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        // Records without a usable value go last in either direction.
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            if descending {
                b.total_cmp(&a)
            } else {
                a.total_cmp(&b)
            }
        }
    }
}

/// Order a filtered collection. Stable throughout, so ties keep their input
/// order, and `Relevance` is the identity.
pub fn sort_jobs(jobs: Vec<JobPosting>, order: SortOrder) -> Vec<JobPosting> {
    let mut jobs = jobs;
    match order {
        SortOrder::Relevance => {}
        SortOrder::Newest => {
            jobs.sort_by_cached_key(|job| std::cmp::Reverse(created_at(job)));
        }
        SortOrder::SalaryAsc => {
            jobs.sort_by(|a, b| compare_optional(salary_value(a), salary_value(b), false));
        }
        SortOrder::SalaryDesc => {
            jobs.sort_by(|a, b| compare_optional(salary_value(a), salary_value(b), true));
        }
    }
    jobs
}
