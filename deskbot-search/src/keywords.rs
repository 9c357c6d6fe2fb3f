//! Query tokenization shared by both search policies.

/// Lower-cased whitespace tokens of length > 2. When every token is too
/// short the whole trimmed lower-cased query becomes the sole keyword,
/// so queries like "hi" still match something.
pub fn derive_keywords(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    let keywords: Vec<String> = lowered
        .split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .map(|w| w.to_string())
        .collect();

    if keywords.is_empty() {
        vec![lowered.trim().to_string()]
    } else {
        keywords
    }
}

/// Jaccard overlap between the row's token set and the keyword set.
/// Zero when either set is empty.
pub fn jaccard(row_tokens: &[&str], keywords: &[String]) -> f64 {
    use std::collections::HashSet;

    let rows: HashSet<&str> = row_tokens.iter().copied().collect();
    let kws: HashSet<&str> = keywords.iter().map(String::as_str).collect();
    if rows.is_empty() || kws.is_empty() {
        return 0.0;
    }

    let intersection = rows.intersection(&kws).count();
    let union = rows.union(&kws).count();
    intersection as f64 / union as f64
}
