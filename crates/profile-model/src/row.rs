use serde::{Deserialize, Serialize};

/// One spreadsheet record: header to cell text, in source column order.
///
/// Headers are free-form and may differ only by case between sheets, so the
/// row keeps every column rather than collapsing them into a map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    cells: Vec<(String, String)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.cells.push((key.into(), value.into()));
    }

    /// Exact header lookup. The first column with this header wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(header, _)| header == key)
            .map(|(_, value)| value.as_str())
    }

    /// First column, in row order, whose lowercased header equals the lowercased key.
    pub fn find_case_insensitive(&self, key: &str) -> Option<(&str, &str)> {
        let wanted = key.to_lowercase();
        self.cells
            .iter()
            .find(|(header, _)| header.to_lowercase() == wanted)
            .map(|(header, value)| (header.as_str(), value.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells
            .iter()
            .map(|(header, value)| (header.as_str(), value.as_str()))
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(header, _)| header.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
