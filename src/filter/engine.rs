use crate::filter::{sort::sort_jobs, FilterState};
use crate::schema::VisaPreference;
use crate::JobPosting;

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Every whitespace-separated query term must occur somewhere in the
/// record's searchable text: company, role, locations, tech stack, body.
fn matches_query(job: &JobPosting, query: &str) -> bool {
    let terms: Vec<String> = query.split_whitespace().map(normalize).collect();
    if terms.is_empty() {
        return true;
    }

    let haystack = normalize(&format!(
        "{} {} {} {} {}",
        job.company.as_deref().unwrap_or_default(),
        job.role.as_deref().unwrap_or_default(),
        job.locations.join(" "),
        job.tech_stack.join(" "),
        job.text,
    ));

    terms.iter().all(|term| haystack.contains(term.as_str()))
}

fn matches_company(job: &JobPosting, company: Option<&str>) -> bool {
    let Some(company) = company.filter(|c| !c.is_empty()) else {
        return true;
    };
    normalize(job.company.as_deref().unwrap_or_default()).contains(&normalize(company))
}

fn matches_locations(job: &JobPosting, locations: &[String]) -> bool {
    if locations.is_empty() {
        return true;
    }

    locations.iter().any(|wanted| {
        let wanted = normalize(wanted);
        job.locations
            .iter()
            .any(|have| normalize(have).contains(&wanted))
    })
}

fn matches_visa(job: &JobPosting, visa: VisaPreference) -> bool {
    match visa {
        VisaPreference::Any => true,
        VisaPreference::Yes => job.visa == Some(true),
        VisaPreference::No => job.visa == Some(false),
    }
}

fn matches_tech(job: &JobPosting, tech: &[String]) -> bool {
    if tech.is_empty() {
        return true;
    }

    let stack: Vec<String> = job.tech_stack.iter().map(|t| normalize(t)).collect();
    tech.iter()
        .all(|wanted| stack.contains(&normalize(wanted)))
}

fn matches_timezone(job: &JobPosting, timezone: Option<&str>) -> bool {
    let Some(wanted) = timezone.filter(|tz| !tz.is_empty()) else {
        return true;
    };
    let Some(have) = job.timezone.as_deref() else {
        return false;
    };
    normalize(have).contains(&normalize(wanted))
}

/// Range-overlap against the record's salary treated as an unordered
/// interval. One missing bound borrows the other; no salary at all fails as
/// soon as either constraint is set.
fn matches_salary(job: &JobPosting, salary_min: Option<i64>, salary_max: Option<i64>) -> bool {
    if salary_min.is_none() && salary_max.is_none() {
        return true;
    }

    let Some(salary) = job.salary.as_ref() else {
        return false;
    };

    let bounds = match (salary.min, salary.max) {
        (Some(a), Some(b)) => Some((a.min(b), a.max(b))),
        (Some(a), None) | (None, Some(a)) => Some((a, a)),
        (None, None) => None,
    };
    let Some((low, high)) = bounds else {
        return false;
    };

    if let Some(wanted_min) = salary_min {
        if high < wanted_min {
            return false;
        }
    }

    if let Some(wanted_max) = salary_max {
        if low > wanted_max {
            return false;
        }
    }

    true
}

fn matches_all(job: &JobPosting, filters: &FilterState) -> bool {
    matches_query(job, &filters.query)
        && matches_company(job, filters.company.as_deref())
        && matches_locations(job, &filters.locations)
        && (filters.remote_modes.is_empty() || filters.remote_modes.contains(&job.work_mode))
        && (!filters.remote_only || job.remote_only)
        && (filters.experience_levels.is_empty()
            || job
                .experience_level
                .is_some_and(|level| filters.experience_levels.contains(&level)))
        && (filters.employment_types.is_empty()
            || job
                .employment_types
                .iter()
                .any(|kind| filters.employment_types.contains(kind)))
        && matches_visa(job, filters.visa)
        && matches_tech(job, &filters.tech)
        && matches_timezone(job, filters.timezone.as_deref())
        && matches_salary(job, filters.salary_min, filters.salary_max)
}

/// The ordered subset of `jobs` satisfying every predicate. Input order is
/// preserved; sorting is a separate step.
pub fn filter_jobs(jobs: &[JobPosting], filters: &FilterState) -> Vec<JobPosting> {
    jobs.iter()
        .filter(|job| matches_all(job, filters))
        .cloned()
        .collect()
}

/// Filter then sort, the way the result list is produced for display.
pub fn apply_filters(jobs: &[JobPosting], filters: &FilterState) -> Vec<JobPosting> {
    sort_jobs(filter_jobs(jobs, filters), filters.sort)
}
