//! Name normalization for cross-roster identity matching.
//!
//! The DSWD eligibility roster arrives keyed by name rather than by
//! registry id, so correlating it with the senior registry requires a
//! canonical matching key. Matching is exact string equality on the
//! normalized key, with no fuzzy matching or edit-distance tolerance. Two
//! registered persons with identical full names collide; this is a
//! known limitation of name-keyed rosters, which is why every other
//! join in the system uses the senior's database id instead.

/// Produce a canonical matching key from the four name parts.
///
/// Concatenates first, middle, last, and suffix (empty for missing),
/// lowercases, strips `.` and `,`, collapses whitespace runs to a
/// single space, and trims. Never fails.
///
/// ```
/// use lingap_core::identity::normalize_name;
///
/// assert_eq!(
///     normalize_name("Juan", "", "Dela Cruz", ""),
///     normalize_name("juan", "", "dela cruz,", "")
/// );
/// ```
pub fn normalize_name(first: &str, middle: &str, last: &str, suffix: &str) -> String {
    let joined = format!("{first} {middle} {last} {suffix}");
    let stripped: String = joined
        .to_lowercase()
        .chars()
        .filter(|c| *c != '.' && *c != ',')
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_key() {
        assert_eq!(normalize_name("Juan", "", "Dela Cruz", ""), "juan dela cruz");
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(
            normalize_name("JUAN", "SANTOS", "DELA CRUZ", "JR"),
            normalize_name("juan", "santos", "dela cruz", "jr")
        );
    }

    #[test]
    fn punctuation_stripped() {
        assert_eq!(
            normalize_name("Juan", "S.", "Dela Cruz,", "Jr."),
            "juan s dela cruz jr"
        );
    }

    #[test]
    fn whitespace_collapsed() {
        assert_eq!(
            normalize_name("  Juan ", "", "Dela   Cruz", " "),
            "juan dela cruz"
        );
    }

    #[test]
    fn all_empty_yields_empty() {
        assert_eq!(normalize_name("", "", "", ""), "");
    }

    #[test]
    fn suffix_participates_in_key() {
        // "Jr" distinguishes father and son.
        assert_ne!(
            normalize_name("Juan", "", "Dela Cruz", "Jr"),
            normalize_name("Juan", "", "Dela Cruz", "")
        );
    }
}
