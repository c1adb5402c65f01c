pub mod employment;
pub mod experience;
pub mod header;
pub mod salary;
pub mod timezone;
pub mod visa;
pub mod work_mode;

pub use employment::infer_employment_types;
pub use experience::{infer_experience_level, EXPERIENCE_PRIORITY};
pub use header::{extract_locations, parse_header, ParsedHeader};
pub use salary::parse_salary;
pub use timezone::infer_timezone;
pub use visa::infer_visa;
pub use work_mode::infer_work_mode;

use crate::normalize::html_to_plain_text;
use crate::tags::build_tags;
use crate::tech_keywords::TechDictionary;
use crate::{JobFlags, JobPosting, SourceComment, SourceMetadata};

/// Run the whole extraction pipeline against one source comment.
///
/// Normalization feeds every classifier; the classifiers are independent
/// and total, so this function never fails and identical input always
/// produces an identical record. Flags start cleared; persisted state is
/// merged by the caller afterwards.
pub fn parse_job_from_comment(comment: &SourceComment, dictionary: &TechDictionary) -> JobPosting {
    let html = comment
        .comment_text
        .as_deref()
        .or(comment.text.as_deref())
        .unwrap_or_default();
    let text = html_to_plain_text(html);
    let lines: Vec<&str> = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let parsed = parse_header(lines.first().copied().unwrap_or_default());
    let locations = extract_locations(&lines, &parsed.location_parts);

    let lower = text.to_lowercase();
    let (work_mode, remote_only) = infer_work_mode(&lower, &locations);
    let employment_types = infer_employment_types(&lower);
    let experience_level = infer_experience_level(&lower);
    let timezone = infer_timezone(&text);
    let visa = infer_visa(&lower);
    let salary = parse_salary(&text);
    let tech_stack = dictionary.extract(&text);

    let url = match &comment.url {
        Some(url) => url.clone(),
        None if comment.id.is_empty() => String::new(),
        None => format!("https://news.ycombinator.com/item?id={}", comment.id),
    };

    let tags = build_tags(
        &tech_stack,
        work_mode,
        remote_only,
        &employment_types,
        experience_level,
        timezone.as_deref(),
        visa,
    );

    JobPosting {
        id: comment.id.clone(),
        story_id: comment.story_id,
        parent_id: comment.parent_id,
        company: parsed.company,
        role: parsed.role,
        locations,
        work_mode,
        remote_only,
        timezone,
        visa,
        employment_types,
        experience_level,
        tech_stack,
        salary,
        text,
        html: (!html.is_empty()).then(|| html.to_string()),
        created_at: comment.created_at.clone(),
        url,
        source: SourceMetadata {
            story_id: comment.story_id,
            story_title: comment.story_title.clone(),
            story_url: comment.story_url.clone(),
            author: comment.author.clone(),
            parent_id: comment.parent_id,
        },
        tags,
        flags: JobFlags::default(),
    }
}
