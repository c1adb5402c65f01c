use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::normalize::sanitize_line;

lazy_static! {
    // First-line segments: dash family, pipe, bullet, middle dot.
    static ref HEADER_DELIMITER_RE: Regex = Regex::new(r"[–—‒‐\-|•·]+").unwrap();
    // Secondary split inside a location fragment.
    static ref LOCATION_DELIMITER_RE: Regex =
        Regex::new(r"(?i)[,/|•·]|\s+or\s+|\s+and\s+").unwrap();
    static ref LOCATION_LINE_RE: Regex = Regex::new(r"(?i)^locations?:\s*(.+)$").unwrap();
    static ref LOCATION_HINT_RE: Regex =
        Regex::new(r"(?i)\b(?:remote|onsite|hybrid|usa|europe|asia|canada)\b").unwrap();
}

/// Segments recovered from a posting's first line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedHeader {
    pub company: Option<String>,
    pub role: Option<String>,
    pub location_parts: Vec<String>,
}

/// Split the first line on the header delimiter class: segment one is the
/// company, segment two the role, the rest location candidates. A line with
/// no usable segments yields an empty header.
pub fn parse_header(first_line: &str) -> ParsedHeader {
    let cleaned = sanitize_line(first_line);
    if cleaned.is_empty() {
        return ParsedHeader::default();
    }

    let mut parts = HEADER_DELIMITER_RE
        .split(&cleaned)
        .map(sanitize_line)
        .filter(|part| !part.is_empty());

    ParsedHeader {
        company: parts.next(),
        role: parts.next(),
        location_parts: parts.collect(),
    }
}

fn split_locations(value: &str) -> Vec<String> {
    LOCATION_DELIMITER_RE
        .split(value)
        .map(sanitize_line)
        .filter(|part| !part.is_empty())
        .collect()
}

fn push_location(results: &mut Vec<String>, seen: &mut HashSet<String>, location: String) {
    let key = location.to_lowercase();
    if seen.insert(key) {
        results.push(location);
    }
}

/// Location strings from header fragments and `Location:` lines, split on
/// the secondary delimiter class and deduplicated case-insensitively in
/// first-seen order. When nothing was found, the second and third lines are
/// scanned for location-ish keywords as a last resort.
pub fn extract_locations(lines: &[&str], initial: &[String]) -> Vec<String> {
    let mut results: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for part in initial {
        for location in split_locations(part) {
            push_location(&mut results, &mut seen, location);
        }
    }

    for line in lines {
        if let Some(caps) = LOCATION_LINE_RE.captures(line) {
            for location in split_locations(&caps[1]) {
                push_location(&mut results, &mut seen, location);
            }
        }
    }

    if results.is_empty() {
        for line in lines.iter().skip(1).take(2) {
            if LOCATION_HINT_RE.is_match(line) {
                for location in split_locations(line) {
                    push_location(&mut results, &mut seen, location);
                }
            }
        }
    }

    results
}
