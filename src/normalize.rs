use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BLOCK_CLOSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</(?:p|div|li|ul|ol|br)>").unwrap());
static BR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());
static HEADING_CLOSE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</h\d>").unwrap());
static LI_OPEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<li>").unwrap());
static P_OPEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<p>").unwrap());
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

static ENTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)&(#\d+|#x[a-f0-9]+|[a-z]+);").unwrap());
static WHITESPACE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static LEADING_BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[•\-\*]+\s*").unwrap());
static TRAILING_PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+[:|\-]\s*$").unwrap());

/// Collapse internal whitespace runs to a single space and trim the ends.
pub fn normalize_whitespace(value: &str) -> String {
    WHITESPACE_RUN_RE.replace_all(value, " ").trim().to_string()
}

/// Decode HTML character references: the named set used by comment bodies
/// (`amp lt gt quot apos nbsp`) plus decimal and hex code points. Anything
/// unrecognized, including code points outside the valid range, is left
/// verbatim.
pub fn decode_html_entities(value: &str) -> String {
    ENTITY_RE
        .replace_all(value, |caps: &Captures| {
            let entity = &caps[1];
            decode_entity(entity).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn decode_entity(entity: &str) -> Option<String> {
    if let Some(hex) = entity
        .strip_prefix("#x")
        .or_else(|| entity.strip_prefix("#X"))
    {
        let code = u32::from_str_radix(hex, 16).ok()?;
        return char::from_u32(code).map(String::from);
    }

    if let Some(decimal) = entity.strip_prefix('#') {
        let code: u32 = decimal.parse().ok()?;
        return char::from_u32(code).map(String::from);
    }

    let named = match entity.to_ascii_lowercase().as_str() {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => " ",
        _ => return None,
    };
    Some(named.to_string())
}

/// One display line: leading bullet/dash markers stripped, a dangling
/// trailing `:` `|` `-` removed, whitespace collapsed.
pub fn sanitize_line(line: &str) -> String {
    let without_bullet = LEADING_BULLET_RE.replace(line, "");
    let without_trailer = TRAILING_PUNCT_RE.replace(&without_bullet, "");
    normalize_whitespace(&without_trailer)
}

/// Convert an HTML fragment into line-oriented plain text.
///
/// Block and break tags become line breaks, list items get a bullet marker
/// before tags are stripped, entities are decoded, and every surviving line
/// is sanitized. Empty lines are dropped. Total: any input, including empty
/// or malformed markup, produces a (possibly empty) string.
pub fn html_to_plain_text(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let broken = BLOCK_CLOSE_RE.replace_all(html, "\n");
    let broken = BR_RE.replace_all(&broken, "\n");
    let broken = HEADING_CLOSE_RE.replace_all(&broken, "\n");
    let broken = LI_OPEN_RE.replace_all(&broken, "\n• ");
    let broken = P_OPEN_RE.replace_all(&broken, "\n");

    let without_tags = TAG_RE.replace_all(&broken, "");
    let decoded = decode_html_entities(&without_tags);

    decoded
        .split('\n')
        .map(sanitize_line)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
