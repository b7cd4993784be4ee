//! SPARQL query construction for the Kawali dataset.
//!
//! The engine only ever issues a fixed set of query shapes: load-all,
//! filtered search, the two statistics counts, and a connection test. The
//! ontology vocabulary (`:BarisNaskah`, `:hasTransliteration`, ...) is owned
//! by the external Fuseki dataset and is reproduced here verbatim.
//!
//! User input reaches query text only through [`escape_literal`]; the
//! builders guarantee syntactically valid SPARQL for any input term.

use std::fmt;
use std::str::FromStr;

/// Maximum number of rows a filtered search returns.
pub const SEARCH_RESULT_LIMIT: usize = 50;

/// Result variable holding the line resource URI.
pub const VAR_LINE: &str = "line";
/// Result variable holding the Latin transliteration.
pub const VAR_TRANSLITERATION: &str = "transliteration";
/// Result variable holding the Indonesian translation.
pub const VAR_TRANSLATION: &str = "translation";
/// Result variable holding the native-script rendering, when present.
pub const VAR_SCRIPT: &str = "script";
/// Result variable of [`build_stats_total`].
pub const VAR_TOTAL: &str = "total";
/// Result variables of [`build_stats_per_manuscript`].
pub const VAR_MANUSCRIPT: &str = "manuscript";
pub const VAR_LINE_COUNT: &str = "line_count";

const PREFIXES: &str = "\
PREFIX : <http://contoh.org/ontology#>
PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>
";

/// Shared graph pattern: every line with its required transliteration and
/// translation values and the optional native-script value. Values hang off
/// intermediate nodes via `rdf:value` in this dataset.
const LINE_PATTERN: &str = "\
SELECT ?line ?transliteration ?translation ?script
WHERE {
    ?line a :BarisNaskah ;
          :hasTransliteration ?translit_node ;
          :hasTranslation ?translation_node .
    ?translit_node rdf:value ?transliteration .
    ?translation_node rdf:value ?translation .
    OPTIONAL {
        ?line :mengandungAksara ?script_node .
        ?script_node rdf:value ?script .
    }
";

/// Which field a search is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Disjunction over all three fields.
    All,
    Transliteration,
    Translation,
    Script,
}

impl SearchField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::All => "all",
            SearchField::Transliteration => "transliteration",
            SearchField::Translation => "translation",
            SearchField::Script => "script",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = String;

    /// Accepts the selector values the portal UI sends, including the
    /// original Indonesian name `aksara` for the script field.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(SearchField::All),
            "transliteration" => Ok(SearchField::Transliteration),
            "translation" => Ok(SearchField::Translation),
            "script" | "aksara" => Ok(SearchField::Script),
            other => Err(format!("unknown search field: {other}")),
        }
    }
}

/// Escapes a user-supplied term for interpolation into a double-quoted
/// SPARQL string literal.
///
/// Backslashes are escaped first, then quotes and control characters, so the
/// result can never terminate the literal early regardless of input.
pub fn escape_literal(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Query selecting every line with its fields, ordered by line URI.
pub fn build_load_all() -> String {
    let mut query = String::from(PREFIXES);
    query.push('\n');
    query.push_str(LINE_PATTERN);
    query.push_str("}\nORDER BY ?line\n");
    query
}

/// Query selecting lines whose target field contains `term`.
///
/// Transliteration and translation containment is case-insensitive; script
/// containment is case-sensitive because script characters have no
/// case-folding semantics. Callers reject empty/whitespace terms before
/// building a query.
pub fn build_search(term: &str, field: SearchField) -> String {
    let escaped = escape_literal(term);
    let lowered = escape_literal(&term.to_lowercase());

    let filter = match field {
        SearchField::Transliteration => {
            format!("    FILTER(CONTAINS(LCASE(STR(?transliteration)), \"{lowered}\"))\n")
        }
        SearchField::Translation => {
            format!("    FILTER(CONTAINS(LCASE(STR(?translation)), \"{lowered}\"))\n")
        }
        SearchField::Script => {
            format!("    FILTER(CONTAINS(STR(?script), \"{escaped}\"))\n")
        }
        SearchField::All => format!(
            "    FILTER(\n        \
             CONTAINS(LCASE(STR(?transliteration)), \"{lowered}\") ||\n        \
             CONTAINS(LCASE(STR(?translation)), \"{lowered}\") ||\n        \
             CONTAINS(STR(?script), \"{escaped}\")\n    )\n"
        ),
    };

    let mut query = String::from(PREFIXES);
    query.push('\n');
    query.push_str(LINE_PATTERN);
    query.push_str(&filter);
    query.push_str(&format!("}}\nORDER BY ?line\nLIMIT {SEARCH_RESULT_LIMIT}\n"));
    query
}

/// Query counting all lines in the dataset.
pub fn build_stats_total() -> String {
    format!(
        "{PREFIXES}\n\
         SELECT (COUNT(?line) AS ?total)\n\
         WHERE {{\n    ?line a :BarisNaskah .\n}}\n"
    )
}

/// Query counting lines per manuscript, for manuscripts with at least one
/// line. Lines without a manuscript edge are excluded here but still count
/// toward [`build_stats_total`].
pub fn build_stats_per_manuscript() -> String {
    format!(
        "{PREFIXES}\n\
         SELECT ?manuscript (COUNT(?line) AS ?line_count)\n\
         WHERE {{\n    \
             ?line a :BarisNaskah ;\n          \
                   :isFromManuscript ?manuscript .\n    \
             ?manuscript a :Manuskrip .\n\
         }}\n\
         GROUP BY ?manuscript\n"
    )
}

/// Minimal count query used only to verify the endpoint is reachable and
/// holds data of the expected shape.
pub fn build_connection_test() -> String {
    format!(
        "{PREFIXES}\n\
         SELECT (COUNT(?line) AS ?total)\n\
         WHERE {{\n    ?line a :BarisNaskah .\n}}\n\
         LIMIT 1\n"
    )
}
