//! File-backed dataset sources.
//!
//! - [`jsonl`] - JSON-lines document collections, one record per line
//! - [`trec_xml`] - TREC-style XML topic (query) files

pub mod jsonl;
pub mod trec_xml;

pub use jsonl::{Doc, DocsProvider, JsonlDocs};
pub use trec_xml::{QueriesProvider, TopicQuery, TrecXmlQueries};
