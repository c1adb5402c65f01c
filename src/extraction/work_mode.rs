use lazy_static::lazy_static;
use regex::Regex;

use crate::schema::WorkMode;

lazy_static! {
    static ref REMOTE_RE: Regex = Regex::new(r"(?i)\bremote\b").unwrap();
    static ref HYBRID_RE: Regex = Regex::new(r"(?i)\bhybrid\b").unwrap();
    static ref ONSITE_RE: Regex =
        Regex::new(r"(?i)\b(?:on[-\s]?site|in[-\s]?office)\b").unwrap();
    // Phrases that promise there is no office at all.
    static ref REMOTE_ONLY_RE: Regex =
        Regex::new(r"(?i)\b(?:remote[-\s]?only|fully remote|100% remote|remote-first)\b").unwrap();
    static ref LOCATION_REMOTE_RE: Regex = Regex::new(r"(?i)remote").unwrap();
}

/// Classify where the work happens.
///
/// Remote combined with hybrid or onsite resolves to `Hybrid`: the posting
/// offers both. A pure remote match is `Remote`, and remote-only holds when
/// an explicit phrase says so or every extracted location is itself a remote
/// marker. No keyword at all falls back to `Onsite`.
pub fn infer_work_mode(text: &str, locations: &[String]) -> (WorkMode, bool) {
    let remote = REMOTE_RE.is_match(text);
    let hybrid = HYBRID_RE.is_match(text);
    let onsite = ONSITE_RE.is_match(text);

    if remote && (hybrid || onsite) {
        return (WorkMode::Hybrid, false);
    }

    if remote {
        let remote_only = REMOTE_ONLY_RE.is_match(text)
            || locations
                .iter()
                .all(|location| LOCATION_REMOTE_RE.is_match(location));
        return (WorkMode::Remote, remote_only);
    }

    if hybrid {
        return (WorkMode::Hybrid, false);
    }

    (WorkMode::Onsite, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locs(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn remote_plus_hybrid_or_onsite_is_hybrid() {
        assert_eq!(
            infer_work_mode("remote or hybrid welcome", &[]),
            (WorkMode::Hybrid, false)
        );
        assert_eq!(
            infer_work_mode("remote possible, otherwise on-site", &[]),
            (WorkMode::Hybrid, false)
        );
    }

    #[test]
    fn explicit_phrases_force_remote_only() {
        assert_eq!(
            infer_work_mode("we are fully remote", &locs(&["Berlin"])),
            (WorkMode::Remote, true)
        );
        assert_eq!(
            infer_work_mode("100% remote, async", &locs(&["Berlin"])),
            (WorkMode::Remote, true)
        );
        assert_eq!(
            infer_work_mode("remote-first company", &locs(&["Berlin"])),
            (WorkMode::Remote, true)
        );
    }

    #[test]
    fn remote_with_a_physical_location_is_not_remote_only() {
        assert_eq!(
            infer_work_mode("remote welcome", &locs(&["Berlin", "Remote"])),
            (WorkMode::Remote, false)
        );
    }

    #[test]
    fn all_remote_locations_imply_remote_only() {
        assert_eq!(
            infer_work_mode("remote position", &locs(&["Remote", "remote (EU)"])),
            (WorkMode::Remote, true)
        );
        // Vacuously true when nothing was extracted.
        assert_eq!(infer_work_mode("remote position", &[]), (WorkMode::Remote, true));
    }

    #[test]
    fn defaults_to_onsite_when_nothing_matches() {
        assert_eq!(infer_work_mode("join our office", &[]), (WorkMode::Onsite, false));
        assert_eq!(
            infer_work_mode("hybrid 2 days a week", &[]),
            (WorkMode::Hybrid, false)
        );
        assert_eq!(
            infer_work_mode("in-office culture", &[]),
            (WorkMode::Onsite, false)
        );
    }
}
