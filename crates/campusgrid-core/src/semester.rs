//! Semester string helpers.
//!
//! Semesters are addressed as `YYYY-YYYY-N` (e.g. `2019-2020-1`) where `N`
//! is 1, 2 or 3. Lexicographic order matches chronological order for this
//! format, so "latest semester" is simply the maximum element.

use serde::Serialize;
use utoipa::ToSchema;

/// One entry of the semester switcher shown on timetable pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SemesterView {
    pub semester: String,
    pub is_current: bool,
}

/// Checks the `YYYY-YYYY-N` semester format used in public URLs.
///
/// Anything else is rejected before identifiers are decoded or upstream
/// calls are made.
pub fn is_valid_semester(semester: &str) -> bool {
    let bytes = semester.as_bytes();
    if bytes.len() != 11 {
        return false;
    }

    let digits = |range: std::ops::Range<usize>| {
        bytes[range].iter().all(|b| b.is_ascii_digit())
    };

    digits(0..4)
        && bytes[4] == b'-'
        && digits(5..9)
        && bytes[9] == b'-'
        && matches!(bytes[10], b'1' | b'2' | b'3')
}

/// Returns the latest semester of an availability list, if any.
pub fn latest_semester(semesters: &[String]) -> Option<&str> {
    semesters.iter().max().map(String::as_str)
}

/// Builds the semester switcher list, flagging the currently viewed one.
///
/// Input order is preserved; the mapper hands semesters over already
/// sorted ascending.
pub fn semester_views(current: &str, semesters: &[String]) -> Vec<SemesterView> {
    semesters
        .iter()
        .map(|semester| SemesterView {
            semester: semester.clone(),
            is_current: semester == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_semesters() {
        assert!(is_valid_semester("2018-2019-1"));
        assert!(is_valid_semester("2019-2020-2"));
        assert!(is_valid_semester("2019-2020-3"));
    }

    #[test]
    fn test_invalid_semesters() {
        assert!(!is_valid_semester(""));
        assert!(!is_valid_semester("2018-2019"));
        assert!(!is_valid_semester("2018-2019-4"));
        assert!(!is_valid_semester("2018-2019-12"));
        assert!(!is_valid_semester("18-19-1"));
        assert!(!is_valid_semester("2018_2019_1"));
        assert!(!is_valid_semester("aaaa-bbbb-1"));
    }

    #[test]
    fn test_latest_semester() {
        let semesters = vec!["2018-2019-1".to_string(), "2019-2020-1".to_string()];
        assert_eq!(latest_semester(&semesters), Some("2019-2020-1"));
        assert_eq!(latest_semester(&[]), None);
    }

    #[test]
    fn test_semester_views_flags_current() {
        let semesters = vec!["2018-2019-1".to_string(), "2019-2020-1".to_string()];
        let views = semester_views("2019-2020-1", &semesters);
        assert_eq!(views.len(), 2);
        assert!(!views[0].is_current);
        assert!(views[1].is_current);
    }
}
