//! Alias lookup against a raw row.

use profile_model::{FieldEntry, RawRow};

use crate::aliases::AliasGroup;

/// Look up the first candidate with a non-empty value.
///
/// Each candidate is tried by exact header first, then by the first column
/// whose header matches ignoring case. Columns that differ only by case are
/// resolved in row order. When nothing matches the entry carries the first
/// candidate as its key and an empty value.
pub fn get_entry(row: &RawRow, candidates: &[&str]) -> FieldEntry {
    for candidate in candidates {
        if let Some(value) = row.get(candidate).filter(|v| !v.is_empty()) {
            return FieldEntry {
                key: (*candidate).to_string(),
                value: value.to_string(),
            };
        }
        if let Some((key, value)) = row.find_case_insensitive(candidate)
            && !value.is_empty()
        {
            return FieldEntry {
                key: key.to_string(),
                value: value.to_string(),
            };
        }
    }
    FieldEntry {
        key: candidates.first().map(|c| (*c).to_string()).unwrap_or_default(),
        value: String::new(),
    }
}

/// [`get_entry`] over an [`AliasGroup`].
pub fn resolve_group(row: &RawRow, group: &AliasGroup) -> FieldEntry {
    let entry = get_entry(row, group.candidates);
    tracing::trace!(
        field = group.field,
        column = %entry.key,
        found = entry.is_found(),
        "resolved field"
    );
    entry
}

/// Column header as a caption: trimmed, one trailing colon removed.
pub fn format_label(key: &str) -> String {
    let trimmed = key.trim();
    trimmed.strip_suffix(':').unwrap_or(trimmed).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs.iter().copied().collect()
    }

    #[test]
    fn first_candidate_wins() {
        let r = row(&[("Name", "Short"), ("Full Name", "Long Name")]);
        let entry = get_entry(&r, &["Full Name", "Name"]);
        assert_eq!(entry.key, "Full Name");
        assert_eq!(entry.value, "Long Name");
    }

    #[test]
    fn empty_value_falls_through_to_next_candidate() {
        let r = row(&[("Full Name", ""), ("Name", "Ada")]);
        let entry = get_entry(&r, &["Full Name", "Name"]);
        assert_eq!(entry.key, "Name");
        assert_eq!(entry.value, "Ada");
    }

    #[test]
    fn case_insensitive_match_reports_actual_header() {
        let r = row(&[("OFFICIAL EMAIL", "ada@x.edu")]);
        let entry = get_entry(&r, &["Official Email", "Email"]);
        assert_eq!(entry.key, "OFFICIAL EMAIL");
        assert_eq!(entry.value, "ada@x.edu");
    }

    #[test]
    fn exact_match_preferred_over_case_variant() {
        let r = row(&[("email", "lower@x.edu"), ("Email", "exact@x.edu")]);
        let entry = get_entry(&r, &["Email"]);
        assert_eq!(entry.key, "Email");
        assert_eq!(entry.value, "exact@x.edu");
    }

    #[test]
    fn case_insensitive_scan_stops_at_first_column() {
        // The first case-insensitive hit is empty, so the candidate is skipped.
        let r = row(&[("email", ""), ("EMAIL", "later@x.edu")]);
        let entry = get_entry(&r, &["Email"]);
        assert_eq!(entry.key, "Email");
        assert_eq!(entry.value, "");
    }

    #[test]
    fn not_found_reports_first_candidate() {
        let r = row(&[("Dept", "")]);
        let entry = get_entry(&r, &["Department", "Dept"]);
        assert_eq!(entry.key, "Department");
        assert!(!entry.is_found());
    }

    #[test]
    fn no_candidates_yields_empty_entry() {
        let entry = get_entry(&row(&[("Name", "Ada")]), &[]);
        assert_eq!(entry.key, "");
        assert_eq!(entry.value, "");
    }

    #[test]
    fn label_strips_single_trailing_colon() {
        assert_eq!(format_label(" ORCID ID: "), "ORCID ID");
        assert_eq!(format_label("Scopus::"), "Scopus:");
        assert_eq!(format_label("Scholar"), "Scholar");
    }
}
