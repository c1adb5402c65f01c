use std::collections::BTreeSet;

use crate::schema::{EmploymentType, ExperienceLevel, WorkMode};

/// Flatten extracted fields into one sorted, deduplicated tag list: tech
/// labels, work mode, `remote-only`, employment types, experience level,
/// timezone, and `visa`/`no-visa` for a known stance. Unknown visa adds
/// nothing.
pub fn build_tags(
    tech_stack: &[String],
    work_mode: WorkMode,
    remote_only: bool,
    employment_types: &[EmploymentType],
    experience: Option<ExperienceLevel>,
    timezone: Option<&str>,
    visa: Option<bool>,
) -> Vec<String> {
    let mut tags: BTreeSet<String> = tech_stack.iter().cloned().collect();

    tags.insert(work_mode.as_ref().to_string());

    if remote_only {
        tags.insert("remote-only".to_string());
    }

    for kind in employment_types {
        tags.insert(kind.as_ref().to_string());
    }

    if let Some(level) = experience {
        tags.insert(level.as_ref().to_string());
    }

    if let Some(zone) = timezone {
        tags.insert(zone.to_string());
    }

    match visa {
        Some(true) => {
            tags.insert("visa".to_string());
        }
        Some(false) => {
            tags.insert("no-visa".to_string());
        }
        None => {}
    }

    tags.into_iter().collect()
}
