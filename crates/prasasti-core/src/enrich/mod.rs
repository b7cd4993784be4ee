//! Result enrichment: raw SPARQL bindings become [`LineRecord`]s with a
//! match-field classification and manuscript/line identifiers derived from
//! the line's resource URI.

use std::fmt;

use serde::Serialize;

use crate::query::{self, SearchField};
use crate::store::Binding;

/// Placeholder manuscript identifier when the URI encodes none.
pub const DEFAULT_MANUSCRIPT_ID: &str = "P1";
/// Placeholder line identifier when the URI encodes none.
pub const DEFAULT_LINE_ID: &str = "1";

/// Which field satisfied the search for a given result row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchField {
    Transliteration,
    Translation,
    Script,
    /// No field provably matched: either no term was applied (load-all) or
    /// store-side normalization differed from ours.
    Other,
}

impl MatchField {
    /// Display label, matching the vocabulary of the portal's export files.
    pub fn label(&self) -> &'static str {
        match self {
            MatchField::Transliteration => "Transliterasi",
            MatchField::Translation => "Terjemahan",
            MatchField::Script => "Aksara Sunda",
            MatchField::Other => "Lainnya",
        }
    }
}

impl fmt::Display for MatchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One normalized search result: a response-shape value constructed fresh
/// per call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineRecord {
    /// Opaque resource URI of the line.
    pub uri: String,
    pub transliteration: String,
    pub translation: String,
    /// Native-script rendering; empty when the store has none.
    pub script: String,
    pub match_field: MatchField,
    pub manuscript_id: String,
    pub line_id: String,
}

impl LineRecord {
    /// Number of non-space characters in the transliteration, as shown in
    /// the portal's metadata panel.
    pub fn transliteration_char_count(&self) -> usize {
        self.transliteration.chars().filter(|c| *c != ' ').count()
    }
}

/// Derives `(manuscript_id, line_id)` from a line resource URI.
///
/// The store assigns opaque URIs without a guaranteed scheme, so this is a
/// best-effort heuristic: with two or more `/`-segments the last segment is
/// the line and the second-to-last the manuscript; shorter URIs fall back to
/// the `#`-fragment and then to the placeholders. Total over all inputs and
/// always returns non-empty strings.
pub fn derive_ids(uri: &str) -> (String, String) {
    let segments: Vec<&str> = uri.split('/').collect();

    if segments.len() >= 2 {
        let line_id = or_placeholder(segments[segments.len() - 1], DEFAULT_LINE_ID);
        let manuscript_id = if segments.len() > 2 {
            or_placeholder(segments[segments.len() - 2], DEFAULT_MANUSCRIPT_ID)
        } else {
            DEFAULT_MANUSCRIPT_ID.to_string()
        };
        (manuscript_id, line_id)
    } else {
        let line_id = match uri.rsplit_once('#') {
            Some((_, fragment)) if !fragment.is_empty() => fragment.to_string(),
            _ => DEFAULT_LINE_ID.to_string(),
        };
        (DEFAULT_MANUSCRIPT_ID.to_string(), line_id)
    }
}

fn or_placeholder(segment: &str, placeholder: &str) -> String {
    if segment.is_empty() {
        placeholder.to_string()
    } else {
        segment.to_string()
    }
}

/// Classifies which field matched for one result row.
///
/// Field-scoped searches tag every row with the scoped field. An `all`
/// search tests in fixed priority order: transliteration, then translation
/// (both case-insensitive), then script (case-sensitive); first hit wins.
pub fn classify_match(
    term: &str,
    field: SearchField,
    transliteration: &str,
    translation: &str,
    script: &str,
) -> MatchField {
    match field {
        SearchField::Transliteration => MatchField::Transliteration,
        SearchField::Translation => MatchField::Translation,
        SearchField::Script => MatchField::Script,
        SearchField::All => {
            let term_lower = term.to_lowercase();
            if transliteration.to_lowercase().contains(&term_lower) {
                MatchField::Transliteration
            } else if translation.to_lowercase().contains(&term_lower) {
                MatchField::Translation
            } else if script.contains(term) {
                MatchField::Script
            } else {
                MatchField::Other
            }
        }
    }
}

/// Enriches search result bindings, classifying matches against `term`.
pub fn enrich_search(bindings: Vec<Binding>, term: &str, field: SearchField) -> Vec<LineRecord> {
    bindings
        .into_iter()
        .map(|binding| {
            let match_field = classify_match(
                term,
                field,
                value(&binding, query::VAR_TRANSLITERATION),
                value(&binding, query::VAR_TRANSLATION),
                value(&binding, query::VAR_SCRIPT),
            );
            record_from_binding(binding, match_field)
        })
        .collect()
}

/// Enriches load-all bindings; with no term applied every row is tagged
/// [`MatchField::Other`].
pub fn enrich_load(bindings: Vec<Binding>) -> Vec<LineRecord> {
    bindings
        .into_iter()
        .map(|binding| record_from_binding(binding, MatchField::Other))
        .collect()
}

fn value<'a>(binding: &'a Binding, var: &str) -> &'a str {
    binding.get(var).map(String::as_str).unwrap_or("")
}

fn record_from_binding(mut binding: Binding, match_field: MatchField) -> LineRecord {
    let uri = binding.remove(query::VAR_LINE).unwrap_or_default();
    let (manuscript_id, line_id) = derive_ids(&uri);

    LineRecord {
        transliteration: binding.remove(query::VAR_TRANSLITERATION).unwrap_or_default(),
        translation: binding.remove(query::VAR_TRANSLATION).unwrap_or_default(),
        script: binding.remove(query::VAR_SCRIPT).unwrap_or_default(),
        uri,
        match_field,
        manuscript_id,
        line_id,
    }
}
