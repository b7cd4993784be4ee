//! Core search engine for the Prasasti Kawali portal.
//!
//! The Kawali inscriptions are stored as RDF triples in an Apache Jena
//! Fuseki triple store, one resource per inscribed line with its Latin
//! transliteration, Indonesian translation, and (optionally) the native
//! Sundanese script. This crate owns everything between the user's search
//! term and the normalized line records the UI renders:
//!
//! - [`query`] builds the fixed set of SPARQL query shapes, with mandatory
//!   literal escaping of user input.
//! - [`store`] executes queries over HTTP and flattens the SPARQL 1.1
//!   results JSON into plain variable→value maps.
//! - [`enrich`] turns raw bindings into [`LineRecord`]s, classifying which
//!   field matched and deriving manuscript/line identifiers from URIs.
//! - [`stats`] folds the count queries into a [`StatsSummary`].
//! - [`service`] composes the above into the public [`SearchService`] API.
//!
//! Rendering, export-file formatting, and the triple store itself are
//! external collaborators and are not part of this crate.

pub mod config;
pub mod enrich;
pub mod query;
pub mod service;
pub mod stats;
pub mod store;

pub use config::Config;
pub use enrich::{LineRecord, MatchField};
pub use query::SearchField;
pub use service::SearchService;
pub use stats::StatsSummary;
pub use store::{Binding, FusekiClient, SparqlEndpoint, StoreError};
