//! Dataset handle bundling a document source and a query source.

use crate::error::DatasetError;
use crate::formats::jsonl::{Doc, DocsProvider};
use crate::formats::trec_xml::{QueriesProvider, TopicQuery};

/// A named dataset's definition: where its documents and topics live and
/// how to read them.
///
/// The two sources are type-erased so datasets with different document
/// schemas can share one registry. A `Dataset` owns no data; every access
/// goes back to the underlying files.
pub struct Dataset {
    docs: Box<dyn DocsProvider>,
    queries: Box<dyn QueriesProvider>,
}

impl Dataset {
    /// Bundles a document source and a query source.
    pub fn new(
        docs: impl DocsProvider + 'static,
        queries: impl QueriesProvider + 'static,
    ) -> Self {
        Self {
            docs: Box::new(docs),
            queries: Box::new(queries),
        }
    }

    /// The document source.
    pub fn docs(&self) -> &dyn DocsProvider {
        self.docs.as_ref()
    }

    /// The query source.
    pub fn queries(&self) -> &dyn QueriesProvider {
        self.queries.as_ref()
    }

    /// Iterates all documents.
    pub fn docs_iter(
        &self,
    ) -> Result<Box<dyn Iterator<Item = Result<Box<dyn Doc>, DatasetError>> + Send>, DatasetError>
    {
        self.docs.docs_iter()
    }

    /// Parses and returns all topics.
    pub fn queries_iter(&self) -> Result<Vec<TopicQuery>, DatasetError> {
        self.queries.queries_iter()
    }

    /// Scans the collection for a document by id.
    ///
    /// `doc_id` is unique by the collection's contract, so the first match
    /// wins. Returns `Ok(None)` when no document has the id.
    pub fn docs_lookup(&self, doc_id: &str) -> Result<Option<Box<dyn Doc>>, DatasetError> {
        for doc in self.docs.docs_iter()? {
            let doc = doc?;
            if doc.doc_id() == doc_id {
                return Ok(Some(doc));
            }
        }
        Ok(None)
    }
}

impl std::fmt::Debug for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dataset")
            .field("docs_path", &self.docs.docs_path())
            .field("queries_path", &self.queries.queries_path())
            .finish()
    }
}
