use lazy_static::lazy_static;
use regex::Regex;

use crate::schema::ExperienceLevel;

/// Priority order for seniority classification. A posting mentioning both
/// "senior" and "manager" is a manager role, so the broader titles are
/// tested first. This order is policy; changing it changes classification.
pub const EXPERIENCE_PRIORITY: [ExperienceLevel; 5] = [
    ExperienceLevel::Lead,
    ExperienceLevel::Manager,
    ExperienceLevel::Senior,
    ExperienceLevel::Mid,
    ExperienceLevel::Junior,
];

lazy_static! {
    static ref LEAD_RE: Regex = Regex::new(r"(?i)\b(?:lead|principal|staff)\b").unwrap();
    static ref MANAGER_RE: Regex = Regex::new(r"(?i)\b(?:manager|head of|director)\b").unwrap();
    static ref SENIOR_RE: Regex = Regex::new(r"(?i)\b(?:senior|sr\.?)\b").unwrap();
    static ref MID_RE: Regex = Regex::new(r"(?i)\bmid(?:[-\s]?level)?\b").unwrap();
    static ref JUNIOR_RE: Regex =
        Regex::new(r"(?i)\b(?:junior|new grad|entry[-\s]?level)\b").unwrap();
}

fn pattern_for(level: ExperienceLevel) -> &'static Regex {
    match level {
        ExperienceLevel::Lead => &LEAD_RE,
        ExperienceLevel::Manager => &MANAGER_RE,
        ExperienceLevel::Senior => &SENIOR_RE,
        ExperienceLevel::Mid => &MID_RE,
        ExperienceLevel::Junior => &JUNIOR_RE,
    }
}

/// First level in [`EXPERIENCE_PRIORITY`] whose keyword set matches, None
/// when the posting says nothing about seniority.
pub fn infer_experience_level(text: &str) -> Option<ExperienceLevel> {
    EXPERIENCE_PRIORITY
        .into_iter()
        .find(|level| pattern_for(*level).is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order_is_fixed() {
        assert_eq!(
            EXPERIENCE_PRIORITY,
            [
                ExperienceLevel::Lead,
                ExperienceLevel::Manager,
                ExperienceLevel::Senior,
                ExperienceLevel::Mid,
                ExperienceLevel::Junior,
            ]
        );
    }

    #[test]
    fn broader_titles_win_over_narrower_ones() {
        assert_eq!(
            infer_experience_level("senior engineering manager"),
            Some(ExperienceLevel::Manager)
        );
        assert_eq!(
            infer_experience_level("staff engineer, senior welcome"),
            Some(ExperienceLevel::Lead)
        );
        assert_eq!(
            infer_experience_level("head of platform"),
            Some(ExperienceLevel::Manager)
        );
    }

    #[test]
    fn each_level_is_reachable() {
        assert_eq!(infer_experience_level("principal"), Some(ExperienceLevel::Lead));
        assert_eq!(infer_experience_level("sr. developer"), Some(ExperienceLevel::Senior));
        assert_eq!(
            infer_experience_level("mid-level backend"),
            Some(ExperienceLevel::Mid)
        );
        assert_eq!(
            infer_experience_level("new grad friendly"),
            Some(ExperienceLevel::Junior)
        );
        assert_eq!(
            infer_experience_level("entry level ok"),
            Some(ExperienceLevel::Junior)
        );
    }

    #[test]
    fn silence_means_unknown() {
        assert_eq!(infer_experience_level("we hire engineers"), None);
    }
}
