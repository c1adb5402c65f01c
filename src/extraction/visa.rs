use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref VISA_NEGATIVE_RE: Regex = Regex::new(
        r"(?i)\b(?:no (?:visa|sponsorship)|cannot sponsor|unable to sponsor|no sponsorship)\b"
    )
    .unwrap();
    static ref VISA_POSITIVE_RE: Regex =
        Regex::new(r"(?i)\bvisa (?:sponsorship|support|available|provided)\b").unwrap();
}

/// Visa stance: an explicit refusal beats an offer, silence stays unknown.
pub fn infer_visa(text: &str) -> Option<bool> {
    if VISA_NEGATIVE_RE.is_match(text) {
        return Some(false);
    }

    if VISA_POSITIVE_RE.is_match(text) {
        return Some(true);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_wins_over_positive() {
        assert_eq!(infer_visa("visa sponsorship available"), Some(true));
        assert_eq!(infer_visa("no visa sponsorship"), Some(false));
        assert_eq!(
            infer_visa("we offer visa support but cannot sponsor in the US"),
            Some(false)
        );
        assert_eq!(infer_visa("unable to sponsor at this time"), Some(false));
    }

    #[test]
    fn silence_is_unknown_not_false() {
        assert_eq!(infer_visa("competitive salary and equity"), None);
    }
}
