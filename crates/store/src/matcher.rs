//! Case-insensitive substring search predicate
//!
//! Exact substring semantics only: no tokenization, no fuzzy matching.
//! Keeping the predicate this small is what makes the server-side and
//! batch-side search paths trivially equivalent.

use dossier_core::Profile;

/// Case-insensitive substring containment
///
/// # Example
///
/// ```
/// use dossier_store::matcher::contains_ci;
///
/// assert!(contains_ci("Javier Rodriguez", "javier"));
/// assert!(!contains_ci("Javier", "xavier"));
/// ```
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether a profile matches a search query
///
/// The predicate is applied independently to the display name, every alias
/// entry, and the actor key; the profile matches if any field matches.
pub fn profile_matches(profile: &Profile, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    profile.display_name.to_lowercase().contains(&needle)
        || profile
            .aliases
            .iter()
            .any(|alias| alias.to_lowercase().contains(&needle))
        || profile.actor_key.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use dossier_core::{ProfileDraft, ProfileId};

    fn profile(name: &str, aliases: &[&str], key: &str) -> Profile {
        ProfileDraft::new(key, name, "HIGH")
            .aliases(aliases.iter().copied())
            .into_profile(ProfileId::new(), Utc::now())
    }

    #[test]
    fn test_contains_ci_basic() {
        assert!(contains_ci("Hello World", "world"));
        assert!(contains_ci("HELLO", "hello"));
        assert!(!contains_ci("Hello", "worlds"));
    }

    #[test]
    fn test_contains_ci_empty_needle_matches() {
        // The blank-query guard lives in the callers, not the predicate.
        assert!(contains_ci("anything", ""));
    }

    #[test]
    fn test_matches_display_name() {
        let p = profile("Javier Rodriguez", &[], "jr-1");
        assert!(profile_matches(&p, "JAVIER"));
    }

    #[test]
    fn test_matches_any_alias() {
        let p = profile("Unknown", &["Night Stalker", "Valley Intruder"], "ns-1");
        assert!(profile_matches(&p, "stalker"));
        assert!(profile_matches(&p, "intruder"));
    }

    #[test]
    fn test_matches_actor_key() {
        let p = profile("Unknown", &[], "zodiac-killer");
        assert!(profile_matches(&p, "zodiac"));
    }

    #[test]
    fn test_fields_are_or_not_and() {
        // Matching one field is enough even when the others miss.
        let p = profile("Alpha", &["Beta"], "gamma");
        assert!(profile_matches(&p, "beta"));
    }

    #[test]
    fn test_no_match() {
        let p = profile("Alpha", &["Beta"], "gamma");
        assert!(!profile_matches(&p, "delta"));
    }
}
