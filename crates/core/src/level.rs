//! Threat level ranking and normalization
//!
//! Threat levels are stored with their original casing but compared
//! case-insensitively. Sorting uses a fixed severity ranking; labels
//! outside the known set rank after all known ones.

/// Rank assigned to threat level labels outside the known severity set.
pub const UNKNOWN_LEVEL_RANK: u8 = u8::MAX;

/// Normalize a threat level label for comparison and filtering
///
/// # Example
///
/// ```
/// use dossier_core::level::normalize_level;
///
/// assert_eq!(normalize_level(" high "), "HIGH");
/// ```
pub fn normalize_level(label: &str) -> String {
    label.trim().to_uppercase()
}

/// Fixed severity ranking: CRITICAL(0), EXTREME(1), HIGH(2), MEDIUM(3), LOW(4)
///
/// Lower rank means more severe. Unknown labels get [`UNKNOWN_LEVEL_RANK`]
/// so they sort after all known levels.
///
/// # Example
///
/// ```
/// use dossier_core::level::severity_rank;
///
/// assert!(severity_rank("critical") < severity_rank("LOW"));
/// ```
pub fn severity_rank(label: &str) -> u8 {
    match normalize_level(label).as_str() {
        "CRITICAL" => 0,
        "EXTREME" => 1,
        "HIGH" => 2,
        "MEDIUM" => 3,
        "LOW" => 4,
        _ => UNKNOWN_LEVEL_RANK,
    }
}
