use lazy_static::lazy_static;
use regex::Regex;

use crate::SalaryRange;

lazy_static! {
    // Optional currency code, optional symbol, 2-3 digit figure with an
    // optional thousands group, optional decimal tail, optional k/m suffix.
    static ref SALARY_RE: Regex = Regex::new(
        r"(?i)(?:(USD|EUR|GBP|CAD|AUD|CHF|SEK|NOK|DKK|JPY|INR|SGD|HKD)\s*)?([$€£])?\s?(\d{2,3}(?:[.,]\d{3})?)(?:[.,](\d+))?\s?([km])?"
    )
    .unwrap();
}

fn currency_from_symbol(symbol: &str) -> String {
    match symbol {
        "$" => "USD".to_string(),
        "€" => "EUR".to_string(),
        "£" => "GBP".to_string(),
        other => other.to_string(),
    }
}

/// Annual figure from one matched token: strip everything outside digits,
/// separators and magnitude suffixes, then scale by a trailing k/m.
/// Unparsable leftovers are absent, never zero.
fn parse_salary_value(token: &str) -> Option<i64> {
    let cleaned: String = token
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | 'k' | 'K' | 'm' | 'M'))
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let suffix = cleaned
        .chars()
        .last()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| *c == 'k' || *c == 'm');
    let numeric_part = match suffix {
        Some(_) => &cleaned[..cleaned.len() - 1],
        None => cleaned.as_str(),
    };

    let numeric: f64 = numeric_part.replace(',', "").parse().ok()?;

    let value = match suffix {
        Some('k') => numeric * 1_000.0,
        Some('m') => numeric * 1_000_000.0,
        _ => numeric,
    };

    Some(value.round() as i64)
}

/// Scan for currency-and-magnitude tokens. The first match is the lower
/// bound, the second (when present) the upper; a single figure stands for
/// both. The bounds are kept in text order even if that order is reversed.
pub fn parse_salary(text: &str) -> Option<SalaryRange> {
    let matches: Vec<regex::Captures> = SALARY_RE.captures_iter(text).collect();
    if matches.is_empty() {
        return None;
    }

    let first = &matches[0];
    let currency = first
        .get(1)
        .map(|code| code.as_str().to_uppercase())
        .or_else(|| first.get(2).map(|symbol| currency_from_symbol(symbol.as_str())));

    let min = parse_salary_value(&first[0]);
    let max = matches
        .get(1)
        .and_then(|second| parse_salary_value(&second[0]))
        .or(min);

    let raw = matches
        .iter()
        .map(|m| m[0].trim())
        .collect::<Vec<_>>()
        .join(" - ");

    Some(SalaryRange {
        min,
        max,
        currency,
        raw: Some(raw),
    })
}
