//! Tag extraction: builds the skill vocabulary offered on the profile form
//! from listing description and tag text.

use std::collections::BTreeSet;

use crate::models::listing::Listing;

/// Tokens must be longer than this (in letters) to enter the vocabulary.
const MIN_TOKEN_EXCLUSIVE: usize = 2;

/// Extracts a sorted, deduplicated vocabulary from every listing's
/// description and tags.
pub fn extract_vocabulary(listings: &[Listing]) -> Vec<String> {
    let mut vocabulary = BTreeSet::new();

    for listing in listings {
        let combined = [listing.description.as_deref(), listing.tags.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        for token in combined.replace(',', " ").split_whitespace() {
            if let Some(label) = clean_token(token) {
                vocabulary.insert(label);
            }
        }
    }

    vocabulary.into_iter().collect()
}

/// Drops every non-letter character, rejects short tokens and capitalises
/// the rest. Interior punctuation is removed, not split on: `ethical-hacking`
/// becomes `Ethicalhacking`.
fn clean_token(token: &str) -> Option<String> {
    let letters: String = token.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.chars().count() <= MIN_TOKEN_EXCLUSIVE {
        return None;
    }
    Some(capitalize(&letters))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(description: Option<&str>, tags: Option<&str>) -> Listing {
        Listing {
            description: description.map(str::to_string),
            tags: tags.map(str::to_string),
            ..Listing::default()
        }
    }

    #[test]
    fn test_description_and_tags_are_combined() {
        let vocab = extract_vocabulary(&[listing(
            Some("Work on Python APIs"),
            Some("flask sql backend"),
        )]);
        assert_eq!(
            vocab,
            vec!["Apis", "Backend", "Flask", "Python", "Sql", "Work"]
        );
    }

    #[test]
    fn test_short_tokens_are_dropped() {
        let vocab = extract_vocabulary(&[listing(None, Some("c cpp ml ai iot"))]);
        assert_eq!(vocab, vec!["Cpp", "Iot"]);
    }

    #[test]
    fn test_length_counted_after_stripping() {
        // "C/C++" strips to "CC"; "esp32" strips to "esp"
        let vocab = extract_vocabulary(&[listing(Some("C/C++ on boards"), Some("esp32"))]);
        assert_eq!(vocab, vec!["Boards", "Esp"]);
    }

    #[test]
    fn test_hyphenated_tag_collapses_into_one_token() {
        let vocab = extract_vocabulary(&[listing(None, Some("ethical-hacking"))]);
        assert_eq!(vocab, vec!["Ethicalhacking"]);
    }

    #[test]
    fn test_commas_separate_tokens() {
        let vocab = extract_vocabulary(&[listing(Some("HTML, CSS,and Figma"), None)]);
        assert_eq!(vocab, vec!["And", "Css", "Figma", "Html"]);
    }

    #[test]
    fn test_case_variants_are_deduplicated() {
        let vocab = extract_vocabulary(&[
            listing(Some("PYTHON scripting"), Some("python")),
            listing(None, Some("Python")),
        ]);
        assert_eq!(vocab, vec!["Python", "Scripting"]);
    }

    #[test]
    fn test_output_is_sorted() {
        let vocab = extract_vocabulary(&[listing(None, Some("zeta alpha mid"))]);
        let mut sorted = vocab.clone();
        sorted.sort();
        assert_eq!(vocab, sorted);
    }

    #[test]
    fn test_absent_fields_do_not_error() {
        assert!(extract_vocabulary(&[listing(None, None)]).is_empty());
        assert!(extract_vocabulary(&[listing(Some(""), Some(""))]).is_empty());
        assert!(extract_vocabulary(&[]).is_empty());
    }
}
