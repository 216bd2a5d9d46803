//! # IR Anthology Core
//!
//! Library for loading the IR Anthology document collection and its
//! TREC-style topics through a process-wide dataset registry.
//!
//! A dataset bundles two file-backed sources: a JSON-lines document
//! collection and an XML topic file. Sources are lazy; registering a dataset
//! records paths and schemas but reads nothing until a consumer iterates.
//!
//! ## Modules
//!
//! - [`anthology`] - The IR Anthology document schema and its registration
//! - [`dataset`] - Dataset handle bundling document and query sources
//! - [`formats`] - File-backed readers (JSONL documents, TREC XML topics)
//! - [`registry`] - Process-wide named dataset registry
//! - [`util`] - Package-relative data file resolution
//! - [`error`] - Error types for loading and registration
//!
//! ## Example
//!
//! ```no_run
//! use iranthology_core::{anthology, registry};
//!
//! anthology::register()?;
//! let dataset = registry::registry()
//!     .lookup(anthology::DATASET_NAME)
//!     .expect("just registered");
//!
//! for doc in dataset.docs().docs_iter()? {
//!     let doc = doc?;
//!     println!("{}: {}", doc.doc_id(), doc.default_text());
//! }
//! # Ok::<(), iranthology_core::error::DatasetError>(())
//! ```

pub mod anthology;
pub mod dataset;
pub mod error;
pub mod formats;
pub mod registry;
pub mod util;

pub use anthology::{AnthologyDoc, DATASET_NAME};
pub use dataset::Dataset;
pub use error::DatasetError;
pub use formats::jsonl::{Doc, DocsProvider, JsonlDocs};
pub use formats::trec_xml::{QueriesProvider, TopicQuery, TrecXmlQueries};
pub use registry::{registry, Registry};
pub use util::PackageDataFile;
