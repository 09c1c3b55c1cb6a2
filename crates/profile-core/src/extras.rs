//! Row columns that no alias group claims.

use std::collections::HashSet;

use profile_model::{ExtraField, RawRow};

use crate::aliases::{ALIAS_GROUPS, NON_FIELD_COLUMNS};

/// Set of header names compared after lowercasing.
#[derive(Debug, Clone, Default)]
pub struct CaseInsensitiveSet {
    inner: HashSet<String>,
}

impl CaseInsensitiveSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            inner: names
                .into_iter()
                .map(|name| name.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.contains(&name.to_lowercase())
    }
}

/// Every alias candidate plus the non-field columns.
pub fn handled_keys() -> CaseInsensitiveSet {
    CaseInsensitiveSet::new(
        ALIAS_GROUPS
            .iter()
            .flat_map(|group| group.candidates.iter().copied())
            .chain(NON_FIELD_COLUMNS.iter().copied()),
    )
}

/// Non-empty, unclaimed columns in row order.
///
/// Exclusion is by header membership in `excluded`, not by alias matching.
pub fn extract_extra_fields(row: &RawRow, excluded: &CaseInsensitiveSet) -> Vec<ExtraField> {
    row.iter()
        .filter(|(key, value)| {
            !value.is_empty() && !excluded.contains(key) && !key.trim().is_empty()
        })
        .map(|(key, value)| ExtraField {
            label: key.to_string(),
            value: value.to_string(),
        })
        .collect()
}
