// src/matching/keywords.rs
use std::collections::BTreeSet;

/// Words of three characters or fewer carry too little signal to match on.
const MIN_KEYWORD_CHARS: usize = 4;

/// Lowercase alphanumeric tokens longer than three characters, first
/// occurrence order, without duplicates.
pub fn keyword_sequence(text: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= MIN_KEYWORD_CHARS)
        .filter(|token| seen.insert(token.to_string()))
        .map(str::to_string)
        .collect()
}

pub fn extract_keywords(text: &str) -> BTreeSet<String> {
    keyword_sequence(text).into_iter().collect()
}

/// Keywords across several text fragments, e.g. every history entry.
pub fn extract_keywords_from<'a, I>(fragments: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    fragments
        .into_iter()
        .flat_map(|fragment| keyword_sequence(fragment))
        .collect()
}

/// |A ∩ B| / |A ∪ B| scaled to 0-100; two empty sets score 0.
pub fn jaccard_score(a: &BTreeSet<String>, b: &BTreeSet<String>) -> u8 {
    let union = a.union(b).count();
    if union == 0 {
        return 0;
    }
    let intersection = a.intersection(b).count();
    ((intersection as f64 / union as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_sequence() {
        assert_eq!(
            keyword_sequence("Senior Rust/Go engineer, Rust & SQL; remote-first"),
            vec!["senior", "rust", "engineer", "remote", "first"]
        );
        assert!(keyword_sequence("a an the").is_empty());
    }

    #[test]
    fn test_jaccard_score() {
        let a = extract_keywords("react typescript node");
        let b = extract_keywords("react typescript python");
        assert_eq!(jaccard_score(&a, &b), 50);
        assert_eq!(jaccard_score(&a, &a), 100);
        assert_eq!(jaccard_score(&BTreeSet::new(), &BTreeSet::new()), 0);
        assert_eq!(jaccard_score(&a, &BTreeSet::new()), 0);
    }

    #[test]
    fn test_extract_keywords_from_fragments() {
        let keywords = extract_keywords_from(["Backend Engineer", "Built payment APIs"]);
        assert!(keywords.contains("backend"));
        assert!(keywords.contains("payment"));
        assert_eq!(keywords.len(), 5);
    }
}
