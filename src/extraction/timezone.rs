use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TIMEZONE_RE: Regex = Regex::new(
        r"(?i)\b(?:UTC[+-]\d{1,2}(?::?\d{2})?|GMT|CET|CEST|EST|EDT|PST|PDT|CST|CDT|IST|AEST|AEDT)\b"
    )
    .unwrap();
}

/// First timezone token in the text, uppercased. Runs over the original-case
/// text so offsets like "utc+5:30" are still found and normalized.
pub fn infer_timezone(text: &str) -> Option<String> {
    TIMEZONE_RE
        .find(text)
        .map(|token| token.as_str().to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_offsets_and_zone_names() {
        assert_eq!(infer_timezone("overlap with UTC+2 required"), Some("UTC+2".into()));
        assert_eq!(infer_timezone("work hours in cet"), Some("CET".into()));
        assert_eq!(infer_timezone("utc-8 to utc-5"), Some("UTC-8".into()));
        assert_eq!(infer_timezone("IST overlap (utc+5:30)"), Some("IST".into()));
    }

    #[test]
    fn nothing_matches_nothing() {
        assert_eq!(infer_timezone("async-friendly team"), None);
    }
}
