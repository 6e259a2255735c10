//! Case-insensitive matching shared by the list filters.

/// True when `needle` is blank or appears in any of `haystacks`, ignoring case.
pub fn matches_search(needle: &str, haystacks: &[&str]) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystacks
        .iter()
        .any(|value| value.to_lowercase().contains(&needle))
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_matches_everything() {
        assert!(matches_search("", &["anything"]));
        assert!(matches_search("   ", &[]));
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        assert!(matches_search("FLOOD", &["Rescue", "river flood near bridge"]));
        assert!(!matches_search("fire", &["Rescue", "river flood"]));
    }

    #[test]
    fn char_count_counts_unicode_scalars() {
        assert_eq!(char_count("राहत"), 4);
    }
}
