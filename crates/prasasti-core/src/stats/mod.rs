//! Dataset statistics: folds the two count queries into a [`StatsSummary`].

use std::collections::BTreeMap;

use serde::Serialize;

use crate::query;
use crate::store::{Binding, SparqlEndpoint, StoreError};

/// Aggregate view of the dataset, shown in the portal sidebar.
///
/// Lines without a manuscript edge count toward `total_line_count` but do
/// not appear in `lines_per_manuscript`, so the per-manuscript values sum to
/// at most the total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    /// Number of rows the per-manuscript query returned.
    pub manuscript_count: usize,
    pub total_line_count: u64,
    /// Manuscript label to line count.
    pub lines_per_manuscript: BTreeMap<String, u64>,
}

/// Derives a human-readable manuscript label from its URI: the fragment
/// after `#` if present, else the final `/`-segment.
pub fn manuscript_label(uri: &str) -> String {
    match uri.rsplit_once('#') {
        Some((_, fragment)) => fragment.to_string(),
        None => uri.rsplit('/').next().unwrap_or(uri).to_string(),
    }
}

/// Issues both count queries and folds them into a summary.
///
/// Statistics are advisory display data; callers map any error here to a
/// zeroed [`StatsSummary`] rather than propagating it.
pub async fn collect(store: &dyn SparqlEndpoint) -> Result<StatsSummary, StoreError> {
    let total_rows = store.select(&query::build_stats_total()).await?;
    let manuscript_rows = store.select(&query::build_stats_per_manuscript()).await?;

    let mut lines_per_manuscript = BTreeMap::new();
    for row in &manuscript_rows {
        let uri = row.get(query::VAR_MANUSCRIPT).map(String::as_str).unwrap_or("");
        lines_per_manuscript.insert(manuscript_label(uri), parse_count(row, query::VAR_LINE_COUNT));
    }

    Ok(StatsSummary {
        manuscript_count: manuscript_rows.len(),
        total_line_count: total_rows
            .first()
            .map(|row| parse_count(row, query::VAR_TOTAL))
            .unwrap_or(0),
        lines_per_manuscript,
    })
}

fn parse_count(row: &Binding, var: &str) -> u64 {
    row.get(var).and_then(|v| v.parse().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manuscript_label_prefers_fragment() {
        assert_eq!(manuscript_label("http://contoh.org/data#KawaliI"), "KawaliI");
        assert_eq!(manuscript_label("http://contoh.org/data/KawaliII"), "KawaliII");
        assert_eq!(manuscript_label("KawaliIII"), "KawaliIII");
        assert_eq!(manuscript_label("http://contoh.org/a/b#c"), "c");
    }

    #[test]
    fn test_parse_count_fallbacks() {
        let mut row = Binding::new();
        assert_eq!(parse_count(&row, "total"), 0);

        row.insert("total".to_string(), "not a number".to_string());
        assert_eq!(parse_count(&row, "total"), 0);

        row.insert("total".to_string(), "42".to_string());
        assert_eq!(parse_count(&row, "total"), 42);
    }

    #[test]
    fn test_default_summary_is_zeroed() {
        let summary = StatsSummary::default();
        assert_eq!(summary.manuscript_count, 0);
        assert_eq!(summary.total_line_count, 0);
        assert!(summary.lines_per_manuscript.is_empty());
    }
}
