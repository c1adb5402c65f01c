use serde::{Deserialize, Serialize};

use crate::filter::FilterState;
use crate::schema::{
    EmploymentType, ExperienceLevel, SortOrder, ViewMode, VisaPreference, WorkMode,
};

/// Auxiliary view state that travels with the filters: the selected thread
/// month and the active flag view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    #[serde(default)]
    pub month: Option<String>,
    pub view: ViewMode,
}

/// Keys the codec owns. Anything else in a parameter map is ignored on
/// decode and never produced on encode.
pub const FILTER_PARAM_KEYS: &[&str] = &[
    "query",
    "company",
    "locations",
    "modes",
    "remoteOnly",
    "timezone",
    "visa",
    "employment",
    "experience",
    "tech",
    "salaryMin",
    "salaryMax",
    "sort",
    "month",
    "view",
];

/// True when the map carries at least one recognized key, i.e. decoding it
/// would change something relative to an arbitrary baseline.
pub fn has_filter_params(params: &[(String, String)]) -> bool {
    params
        .iter()
        .any(|(key, _)| FILTER_PARAM_KEYS.contains(&key.as_str()))
}

fn push(params: &mut Vec<(String, String)>, key: &str, value: impl Into<String>) {
    params.push((key.to_string(), value.into()));
}

fn join_tokens<T: AsRef<str>>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}

/// Encode filters and view state as ordered key/value pairs, leaving out
/// every field that still has its default value. The output is small enough
/// to embed in a URL query string and decodes back losslessly.
pub fn encode_filter_params(filters: &FilterState, view: &ViewState) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = Vec::new();

    let query = filters.query.trim();
    if !query.is_empty() {
        push(&mut params, "query", query);
    }

    if let Some(company) = filters.company.as_deref().filter(|c| !c.is_empty()) {
        push(&mut params, "company", company);
    }

    if !filters.locations.is_empty() {
        push(&mut params, "locations", filters.locations.join(","));
    }

    if !filters.remote_modes.is_empty() {
        push(&mut params, "modes", join_tokens(&filters.remote_modes));
    }

    if filters.remote_only {
        push(&mut params, "remoteOnly", "1");
    }

    if let Some(timezone) = filters.timezone.as_deref().filter(|tz| !tz.is_empty()) {
        push(&mut params, "timezone", timezone);
    }

    if filters.visa != VisaPreference::Any {
        push(&mut params, "visa", filters.visa.as_ref());
    }

    if !filters.employment_types.is_empty() {
        push(
            &mut params,
            "employment",
            join_tokens(&filters.employment_types),
        );
    }

    if !filters.experience_levels.is_empty() {
        push(
            &mut params,
            "experience",
            join_tokens(&filters.experience_levels),
        );
    }

    if !filters.tech.is_empty() {
        push(&mut params, "tech", filters.tech.join(","));
    }

    if let Some(min) = filters.salary_min {
        push(&mut params, "salaryMin", min.to_string());
    }

    if let Some(max) = filters.salary_max {
        push(&mut params, "salaryMax", max.to_string());
    }

    if filters.sort != SortOrder::Relevance {
        push(&mut params, "sort", filters.sort.as_ref());
    }

    if let Some(month) = view.month.as_deref().filter(|m| !m.is_empty()) {
        push(&mut params, "month", month);
    }

    if view.view != ViewMode::All {
        push(&mut params, "view", view.view.as_ref());
    }

    params
}

fn get<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

fn parse_tokens<T>(value: &str, parse: impl Fn(&str) -> Option<T>) -> Vec<T> {
    parse_list(value)
        .iter()
        .filter_map(|item| parse(item.to_lowercase().as_str()))
        .collect()
}

fn parse_number(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Apply a parameter map on top of a baseline. Only recognized keys present
/// in the map overwrite their field; everything else keeps the baseline
/// value. Unrecognized list tokens are dropped, unrecognized scalar enums
/// fall back to the default, malformed numbers decode as absent.
pub fn apply_filter_params(
    params: &[(String, String)],
    filters: &FilterState,
    view: &ViewState,
) -> (FilterState, ViewState) {
    let mut next = filters.clone();
    let mut next_view = view.clone();

    if let Some(value) = get(params, "query") {
        next.query = value.to_string();
    }

    if let Some(value) = get(params, "company") {
        next.company = (!value.is_empty()).then(|| value.to_string());
    }

    if let Some(value) = get(params, "locations") {
        next.locations = parse_list(value);
    }

    if let Some(value) = get(params, "modes") {
        next.remote_modes = parse_tokens(value, WorkMode::parse);
    }

    if let Some(value) = get(params, "remoteOnly") {
        next.remote_only = value == "1" || value.eq_ignore_ascii_case("true");
    }

    if let Some(value) = get(params, "timezone") {
        next.timezone = (!value.is_empty()).then(|| value.to_string());
    }

    if let Some(value) = get(params, "visa") {
        next.visa = VisaPreference::parse(value).unwrap_or_default();
    }

    if let Some(value) = get(params, "employment") {
        next.employment_types = parse_tokens(value, EmploymentType::parse);
    }

    if let Some(value) = get(params, "experience") {
        next.experience_levels = parse_tokens(value, ExperienceLevel::parse);
    }

    if let Some(value) = get(params, "tech") {
        next.tech = parse_list(value);
    }

    if let Some(value) = get(params, "salaryMin") {
        next.salary_min = parse_number(value);
    }

    if let Some(value) = get(params, "salaryMax") {
        next.salary_max = parse_number(value);
    }

    if let Some(value) = get(params, "sort") {
        next.sort = SortOrder::parse(value).unwrap_or_default();
    }

    if let Some(value) = get(params, "month") {
        next_view.month = (!value.is_empty()).then(|| value.to_string());
    }

    if let Some(value) = get(params, "view") {
        next_view.view = ViewMode::parse(value).unwrap_or_default();
    }

    (next, next_view)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_encode_to_nothing() {
        let encoded = encode_filter_params(&FilterState::default(), &ViewState::default());
        assert!(encoded.is_empty());
    }

    #[test]
    fn only_non_default_fields_are_emitted_in_fixed_order() {
        let filters = FilterState {
            query: "  rust backend  ".into(),
            remote_modes: vec![WorkMode::Remote, WorkMode::Hybrid],
            remote_only: true,
            tech: vec!["Rust".into(), "AWS".into()],
            salary_min: Some(120_000),
            sort: SortOrder::Newest,
            ..FilterState::default()
        };
        let view = ViewState {
            month: Some("2025-03".into()),
            view: ViewMode::Starred,
        };

        let encoded = encode_filter_params(&filters, &view);
        assert_eq!(
            encoded,
            pairs(&[
                ("query", "rust backend"),
                ("modes", "remote,hybrid"),
                ("remoteOnly", "1"),
                ("tech", "Rust,AWS"),
                ("salaryMin", "120000"),
                ("sort", "newest"),
                ("month", "2025-03"),
                ("view", "starred"),
            ])
        );
    }

    #[test]
    fn decode_is_a_partial_update() {
        let baseline = FilterState {
            query: "python".into(),
            salary_min: Some(90_000),
            ..FilterState::default()
        };
        let (decoded, view) = apply_filter_params(
            &pairs(&[("tech", "Rust, AWS ,")]),
            &baseline,
            &ViewState::default(),
        );

        // Unmentioned fields keep the baseline; the list is trimmed and
        // stripped of empty segments.
        assert_eq!(decoded.query, "python");
        assert_eq!(decoded.salary_min, Some(90_000));
        assert_eq!(decoded.tech, vec!["Rust", "AWS"]);
        assert_eq!(view, ViewState::default());
    }

    #[test]
    fn unrecognized_tokens_fall_back() {
        let (decoded, view) = apply_filter_params(
            &pairs(&[
                ("modes", "remote,orbital"),
                ("visa", "maybe"),
                ("sort", "oldest"),
                ("salaryMin", "12k"),
                ("view", "archived"),
            ]),
            &FilterState {
                visa: VisaPreference::Yes,
                sort: SortOrder::Newest,
                salary_min: Some(50_000),
                ..FilterState::default()
            },
            &ViewState {
                month: None,
                view: ViewMode::Starred,
            },
        );

        assert_eq!(decoded.remote_modes, vec![WorkMode::Remote]);
        assert_eq!(decoded.visa, VisaPreference::Any);
        assert_eq!(decoded.sort, SortOrder::Relevance);
        assert_eq!(decoded.salary_min, None);
        assert_eq!(view.view, ViewMode::All);
    }

    #[test]
    fn remote_only_accepts_flag_spellings() {
        for (token, expected) in [("1", true), ("true", true), ("TRUE", true), ("0", false)] {
            let (decoded, _) = apply_filter_params(
                &pairs(&[("remoteOnly", token)]),
                &FilterState::default(),
                &ViewState::default(),
            );
            assert_eq!(decoded.remote_only, expected, "token {token:?}");
        }
    }

    #[test]
    fn list_tokens_are_case_folded() {
        let (decoded, _) = apply_filter_params(
            &pairs(&[("employment", "Full-Time,CONTRACT"), ("experience", "Senior")]),
            &FilterState::default(),
            &ViewState::default(),
        );
        assert_eq!(
            decoded.employment_types,
            vec![EmploymentType::FullTime, EmploymentType::Contract]
        );
        assert_eq!(decoded.experience_levels, vec![ExperienceLevel::Senior]);
    }

    #[test]
    fn recognizes_own_keys() {
        assert!(has_filter_params(&pairs(&[("tech", "Rust")])));
        assert!(!has_filter_params(&pairs(&[("utm_source", "mail")])));
    }
}
