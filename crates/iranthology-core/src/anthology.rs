//! The IR Anthology dataset: paper records plus TREC-style topics.
//!
//! This module is the adapter that makes the collection available to
//! downstream tooling: a six-field document schema over
//! `datasets_in_progress/ir-anthology-processed.jsonl`, topics from
//! `datasets_in_progress/topics.xml`, registered under
//! [`DATASET_NAME`].

use crate::dataset::Dataset;
use crate::error::DatasetError;
use crate::formats::jsonl::{Doc, JsonlDocs};
use crate::formats::trec_xml::TrecXmlQueries;
use crate::registry::registry;
use crate::util::PackageDataFile;
use serde::{Deserialize, Serialize};

/// Registry name of the IR Anthology dataset.
pub const DATASET_NAME: &str = "iranthology-tutors";

/// Package-relative path of the processed document collection.
pub const DOCS_PATH: &str = "datasets_in_progress/ir-anthology-processed.jsonl";

/// Package-relative path of the topic file.
pub const TOPICS_PATH: &str = "datasets_in_progress/topics.xml";

/// Language tag of both documents and topics.
pub const LANG: &str = "en";

/// One paper record from the IR Anthology collection.
///
/// Instances are deserialized from one JSONL line each and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnthologyDoc {
    /// Opaque identifier, unique within the collection.
    pub doc_id: String,
    /// Abstract text; possibly empty. (`abstract` is reserved in Rust.)
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Paper title.
    pub title: String,
    /// Author names, in publication order.
    pub authors: Vec<String>,
    /// Publication year as it appears in the source, not validated as numeric.
    pub year: String,
    /// Venue name.
    pub booktitle: String,
}

impl AnthologyDoc {
    /// Title and abstract joined by a single space, recomputed on demand.
    pub fn default_text(&self) -> String {
        format!("{} {}", self.title, self.abstract_text)
    }
}

impl Doc for AnthologyDoc {
    fn doc_id(&self) -> &str {
        &self.doc_id
    }

    fn default_text(&self) -> String {
        self.default_text()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Builds the dataset definition without registering it.
pub fn dataset() -> Dataset {
    Dataset::new(
        JsonlDocs::<AnthologyDoc>::new(PackageDataFile::new(DOCS_PATH), LANG),
        TrecXmlQueries::new(PackageDataFile::new(TOPICS_PATH), LANG),
    )
}

/// Registers the IR Anthology dataset under [`DATASET_NAME`].
///
/// Performs no file I/O; the data files are read when the dataset is first
/// iterated. Fails with [`DatasetError::DuplicateDataset`] if something in
/// the process already registered the name.
pub fn register() -> Result<(), DatasetError> {
    registry().register(DATASET_NAME, dataset())
}
