//! Store key generation.

/// Prefix for all keys to avoid collisions with other redis users.
const KEY_PREFIX: &str = "campusgrid";

/// Key holding a student's privacy level (integer 0/1/2).
pub fn privacy_level(student_id: &str) -> String {
    format!("{KEY_PREFIX}:privacy:{student_id}")
}

/// Hash of a student's recent visitors, keyed by visitor id.
pub fn visitor_trail(host_id: &str) -> String {
    format!("{KEY_PREFIX}:visitors:{host_id}")
}

/// Counter of total page views on a student's timetable.
pub fn visitor_count(host_id: &str) -> String {
    format!("{KEY_PREFIX}:visitor_count:{host_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_prefixed_and_distinct() {
        assert_eq!(privacy_level("s1"), "campusgrid:privacy:s1");
        assert_ne!(visitor_trail("s1"), visitor_count("s1"));
    }
}
