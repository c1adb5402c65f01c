use std::cmp::Ordering;

use strsim::normalized_damerau_levenshtein;

use crate::JobPosting;

/// Field weights for relevance scoring. Header fields dominate; the body
/// only nudges.
const WEIGHT_COMPANY: f64 = 0.30;
const WEIGHT_ROLE: f64 = 0.30;
const WEIGHT_TECH: f64 = 0.18;
const WEIGHT_LOCATIONS: f64 = 0.12;
const WEIGHT_TEXT: f64 = 0.10;

/// Minimum combined score for a posting to count as a hit.
const SCORE_THRESHOLD: f64 = 0.32;

/// Token similarity below this is treated as noise rather than a typo.
const FUZZY_CUTOFF: f64 = 0.72;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub score: f64,
    pub posting: &'a JobPosting,
}

/// Best score one query term earns against one field: a substring hit is
/// exact, otherwise the closest token by Damerau-Levenshtein similarity,
/// discarded below the typo cutoff.
fn field_score(field: &str, term: &str) -> f64 {
    if field.is_empty() {
        return 0.0;
    }

    let field = field.to_lowercase();
    if field.contains(term) {
        return 1.0;
    }

    let best = field
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| normalized_damerau_levenshtein(token, term))
        .fold(0.0_f64, f64::max);

    if best >= FUZZY_CUTOFF {
        best
    } else {
        0.0
    }
}

fn term_score(job: &JobPosting, term: &str) -> f64 {
    WEIGHT_COMPANY * field_score(job.company.as_deref().unwrap_or_default(), term)
        + WEIGHT_ROLE * field_score(job.role.as_deref().unwrap_or_default(), term)
        + WEIGHT_TECH * field_score(&job.tech_stack.join(" "), term)
        + WEIGHT_LOCATIONS * field_score(&job.locations.join(" "), term)
        + WEIGHT_TEXT * field_score(&job.text, term)
}

/// Relevance of a posting for a free-text query: the mean term score across
/// whitespace-separated terms. Empty queries score zero for every posting.
pub fn relevance_score(job: &JobPosting, query: &str) -> f64 {
    let terms: Vec<String> = query
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .collect();
    if terms.is_empty() {
        return 0.0;
    }

    let total: f64 = terms.iter().map(|term| term_score(job, term)).sum();
    total / terms.len() as f64
}

/// Postings scoring at or above the hit threshold, best first. The sort is
/// stable, so equally scored postings keep their input order. Deterministic:
/// same collection and query, same ranking.
pub fn search<'a>(jobs: &'a [JobPosting], query: &str) -> Vec<SearchHit<'a>> {
    let mut hits: Vec<SearchHit<'a>> = jobs
        .iter()
        .map(|posting| SearchHit {
            score: relevance_score(posting, query),
            posting,
        })
        .filter(|hit| hit.score >= SCORE_THRESHOLD)
        .collect();

    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::WorkMode;
    use crate::SourceMetadata;

    fn job(id: &str, company: &str, role: &str, tech: &[&str]) -> JobPosting {
        JobPosting {
            id: id.into(),
            story_id: 1,
            parent_id: None,
            company: Some(company.into()),
            role: Some(role.into()),
            locations: vec!["Remote".into()],
            work_mode: WorkMode::Remote,
            remote_only: false,
            timezone: None,
            visa: None,
            employment_types: Vec::new(),
            experience_level: None,
            tech_stack: tech.iter().map(|t| t.to_string()).collect(),
            salary: None,
            text: format!("{company} is hiring a {role}"),
            html: None,
            created_at: String::new(),
            url: String::new(),
            source: SourceMetadata::default(),
            tags: Vec::new(),
            flags: Default::default(),
        }
    }

    #[test]
    fn substring_hits_rank_first() {
        let jobs = vec![
            job("other", "Globex", "Accountant", &[]),
            job("match", "Acme", "React Engineer", &["React"]),
        ];
        let hits = search(&jobs, "react");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].posting.id, "match");
        assert!(hits[0].score >= SCORE_THRESHOLD);
    }

    #[test]
    fn small_typos_still_match() {
        let jobs = vec![job("match", "Acme", "React Engineer", &["React"])];
        let hits = search(&jobs, "raect");
        assert_eq!(hits.len(), 1);

        let noise = search(&jobs, "zzzzzz");
        assert!(noise.is_empty());
    }

    #[test]
    fn empty_query_matches_nothing() {
        let jobs = vec![job("a", "Acme", "Engineer", &[])];
        assert!(search(&jobs, "  ").is_empty());
    }

    #[test]
    fn scoring_is_deterministic() {
        let jobs = vec![job("a", "Acme", "Engineer", &["Rust"])];
        let first = relevance_score(&jobs[0], "rust engineer");
        let second = relevance_score(&jobs[0], "rust engineer");
        assert_eq!(first, second);
    }
}
