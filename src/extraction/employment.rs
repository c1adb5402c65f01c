use lazy_static::lazy_static;
use regex::Regex;

use crate::schema::EmploymentType;

lazy_static! {
    static ref FULL_TIME_RE: Regex = Regex::new(r"(?i)\bfull[-\s]?time\b").unwrap();
    static ref PART_TIME_RE: Regex = Regex::new(r"(?i)\bpart[-\s]?time\b").unwrap();
    static ref CONTRACT_RE: Regex =
        Regex::new(r"(?i)\b(?:contract|freelance|consultant)\b").unwrap();
    static ref INTERNSHIP_RE: Regex =
        Regex::new(r"(?i)\b(?:intern(?:ship)?|co[-\s]?op)\b").unwrap();
}

/// Union of every employment-type keyword that matches, in declaration
/// order. A posting that names none is treated as full-time.
pub fn infer_employment_types(text: &str) -> Vec<EmploymentType> {
    let checks: [(&Regex, EmploymentType); 4] = [
        (&FULL_TIME_RE, EmploymentType::FullTime),
        (&PART_TIME_RE, EmploymentType::PartTime),
        (&CONTRACT_RE, EmploymentType::Contract),
        (&INTERNSHIP_RE, EmploymentType::Internship),
    ];

    let matches: Vec<EmploymentType> = checks
        .iter()
        .filter(|(pattern, _)| pattern.is_match(text))
        .map(|(_, kind)| *kind)
        .collect();

    if matches.is_empty() {
        return vec![EmploymentType::FullTime];
    }

    matches
}
