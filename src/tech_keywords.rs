use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Canonical technology label → alias spellings. An empty alias list means
/// the label matches under its own name.
///
/// NOTE: keep this table in sync with the sidebar tech facet labels.
static DEFAULT_ENTRIES: &[(&str, &[&str])] = &[
    ("TypeScript", &["typescript", "ts"]),
    ("JavaScript", &["javascript", "js", "node.js", "nodejs", "node"]),
    ("Python", &["python"]),
    ("Go", &["go", "golang"]),
    ("Rust", &["rust"]),
    ("Java", &["java"]),
    ("Kotlin", &["kotlin"]),
    ("Swift", &["swift", "swiftui"]),
    ("React", &["react", "reactjs", "react.js"]),
    ("Next.js", &["next.js", "nextjs", "next js"]),
    ("Vue", &["vue", "vue.js", "vuejs"]),
    ("Angular", &["angular", "angular.js", "angularjs"]),
    ("Svelte", &["svelte", "sveltekit"]),
    ("React Native", &["react native"]),
    ("Flutter", &["flutter", "dart"]),
    ("AWS", &["aws", "amazon web services"]),
    ("GCP", &["google cloud", "gcp", "google cloud platform"]),
    ("Azure", &["azure", "microsoft azure"]),
    ("PostgreSQL", &["postgresql", "postgres"]),
    ("MySQL", &["mysql"]),
    ("MongoDB", &["mongodb", "mongo"]),
    ("Redis", &["redis"]),
    ("GraphQL", &["graphql"]),
    ("REST", &["rest", "restful"]),
    ("Docker", &["docker"]),
    ("Kubernetes", &["k8s", "kubernetes"]),
    ("Terraform", &["terraform"]),
    ("CI/CD", &["ci/cd", "continuous integration", "continuous deployment"]),
    ("Linux", &["linux"]),
    ("Machine Learning", &["machine learning", "ml"]),
    ("AI", &["ai", "artificial intelligence"]),
    ("TensorFlow", &["tensorflow"]),
    ("PyTorch", &["pytorch"]),
    ("Elasticsearch", &["elasticsearch", "elastic search", "elastic"]),
    ("Kafka", &["kafka", "apache kafka"]),
    ("Snowflake", &["snowflake"]),
    ("Airflow", &["airflow", "apache airflow"]),
    ("C++", &["c++"]),
    ("C#", &["c#", "csharp", "c-sharp"]),
    ("PHP", &["php"]),
    ("Laravel", &["laravel"]),
    ("Django", &["django"]),
    ("FastAPI", &["fastapi", "fast api"]),
    ("Ruby on Rails", &["rails", "ruby on rails", "ror"]),
    ("Ruby", &["ruby"]),
    ("SQL", &["sql"]),
    ("Testing Library", &["testing library", "@testing-library"]),
    ("Jest", &["jest"]),
];

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("technology label {0:?} has an empty alias")]
    EmptyAlias(String),
    #[error("alias {alias:?} for {label:?} does not compile: {source}")]
    Pattern {
        label: String,
        alias: String,
        #[source]
        source: regex::Error,
    },
}

/// Immutable alias → canonical-label table with one compiled word-boundary
/// pattern per alias. Built once, then shared freely: lookups take `&self`
/// and never mutate, so a `'static` instance is safe to read from any thread.
#[derive(Debug)]
pub struct TechDictionary {
    labels: Vec<String>,
    patterns: Vec<(Regex, usize)>,
}

impl TechDictionary {
    /// Compile a dictionary from `(label, aliases)` pairs. A label with no
    /// aliases matches under its own spelling. Fails only on a blank alias
    /// or a pattern the regex engine rejects; a well-formed table yields a
    /// total matcher.
    pub fn new(entries: &[(&str, &[&str])]) -> Result<Self, DictionaryError> {
        let mut labels = Vec::with_capacity(entries.len());
        let mut patterns = Vec::new();

        for (index, (label, aliases)) in entries.iter().enumerate() {
            labels.push((*label).to_string());

            let own = [*label];
            let alias_list: &[&str] = if aliases.is_empty() { &own } else { aliases };

            for alias in alias_list {
                let alias = alias.trim().to_lowercase();
                if alias.is_empty() {
                    return Err(DictionaryError::EmptyAlias((*label).to_string()));
                }

                let source = format!(r"(?i)\b{}\b", regex::escape(&alias));
                let pattern =
                    Regex::new(&source).map_err(|source| DictionaryError::Pattern {
                        label: (*label).to_string(),
                        alias: alias.clone(),
                        source,
                    })?;
                patterns.push((pattern, index));
            }
        }

        Ok(Self { labels, patterns })
    }

    /// Canonical labels whose alias occurs word-delimited in `text`,
    /// lexicographically sorted and deduplicated. Aliases match
    /// independently: "react native" and "react" may both appear in the
    /// result for the same text.
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut matched: BTreeSet<&str> = BTreeSet::new();
        for (pattern, label_index) in &self.patterns {
            if pattern.is_match(text) {
                matched.insert(self.labels[*label_index].as_str());
            }
        }

        matched.into_iter().map(String::from).collect()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

static DEFAULT_DICTIONARY: LazyLock<TechDictionary> =
    LazyLock::new(|| TechDictionary::new(DEFAULT_ENTRIES).expect("default table is well-formed"));

/// The process-wide default dictionary. Initialized on first use and never
/// mutated afterwards.
pub fn default_tech_dictionary() -> &'static TechDictionary {
    &DEFAULT_DICTIONARY
}

/// Match against the default dictionary.
pub fn extract_tech_keywords(text: &str) -> Vec<String> {
    default_tech_dictionary().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deduplicates_and_detects_overlapping_aliases() {
        let found =
            extract_tech_keywords("React react React! We also love React Native and React.");
        assert_eq!(found, vec!["React".to_string(), "React Native".to_string()]);
    }

    #[test]
    fn empty_text_matches_nothing() {
        assert_eq!(extract_tech_keywords(""), Vec::<String>::new());
    }

    #[test]
    fn matches_are_word_delimited() {
        // "going" contains the alias "go" but not on a word boundary.
        assert_eq!(extract_tech_keywords("We are going places"), Vec::<String>::new());
        assert_eq!(extract_tech_keywords("Written in Go."), vec!["Go".to_string()]);
    }

    #[test]
    fn output_is_sorted_case_insensitively_unique() {
        let found = extract_tech_keywords("TypeScript, react, AWS and postgres");
        assert_eq!(
            found,
            vec![
                "AWS".to_string(),
                "PostgreSQL".to_string(),
                "React".to_string(),
                "TypeScript".to_string(),
            ]
        );
    }

    #[test]
    fn smaller_injected_dictionaries_are_supported() {
        let dictionary =
            TechDictionary::new(&[("Zig", &["zig", "ziglang"]), ("Odin", &[])]).unwrap();
        assert_eq!(
            dictionary.extract("Odin and zig fans welcome"),
            vec!["Odin".to_string(), "Zig".to_string()]
        );
        assert_eq!(dictionary.labels().count(), 2);
    }

    #[test]
    fn blank_alias_is_rejected() {
        let err = TechDictionary::new(&[("Ghost", &["  "])]).unwrap_err();
        assert!(matches!(err, DictionaryError::EmptyAlias(label) if label == "Ghost"));
    }
}
