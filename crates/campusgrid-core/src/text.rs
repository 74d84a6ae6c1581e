//! Search keyword normalization.

/// Returns true when the keyword contains CJK ideographs, which means the
/// user is searching by name rather than by student/staff number.
pub fn contains_cjk(keyword: &str) -> bool {
    keyword
        .chars()
        .any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c))
}

/// Normalizes a search keyword before the upstream call.
///
/// The upstream service only indexes lower-case student and staff numbers,
/// so purely alphanumeric keywords are case-folded. Name searches (or any
/// keyword with other characters) pass through unchanged.
pub fn normalize_keyword(keyword: &str) -> String {
    if !keyword.is_empty() && keyword.chars().all(|c| c.is_ascii_alphanumeric()) {
        keyword.to_ascii_lowercase()
    } else {
        keyword.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric_keyword_lowercased() {
        assert_eq!(normalize_keyword("T19XZ0407"), "t19xz0407");
        assert_eq!(normalize_keyword("3901160407"), "3901160407");
    }

    #[test]
    fn test_name_keyword_unchanged() {
        assert_eq!(normalize_keyword("王小明"), "王小明");
        assert_eq!(normalize_keyword("O'Brien"), "O'Brien");
    }

    #[test]
    fn test_contains_cjk() {
        assert!(contains_cjk("王小明"));
        assert!(contains_cjk("A教301"));
        assert!(!contains_cjk("t19xz0407"));
    }
}
