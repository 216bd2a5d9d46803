//! JSON-lines document collections.
//!
//! A JSONL collection holds one JSON object per line, each deserializing
//! into the collection's document type. Reading is lazy: constructing a
//! [`JsonlDocs`] records the file location and schema, and the file is only
//! opened when an iterator is requested. Blank lines are skipped; a
//! malformed line fails the iteration with its 1-based line number.

use crate::error::DatasetError;
use crate::util::PackageDataFile;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing::debug;

// ============================================================================
// Document Traits
// ============================================================================

/// Object-safe view of one document in a collection.
///
/// Concrete document types (e.g. [`crate::anthology::AnthologyDoc`]) carry
/// their full typed fields; this trait is what type-erased consumers such as
/// [`crate::dataset::Dataset`] and the CLI see.
pub trait Doc: Send {
    /// Unique identifier within the collection.
    fn doc_id(&self) -> &str;

    /// Text indexed/searched when no specific field is requested.
    fn default_text(&self) -> String;

    /// Full record as JSON, for export.
    fn to_json(&self) -> serde_json::Value;
}

/// A file-backed source of documents.
///
/// Implementations load nothing at construction time. Each call to
/// [`DocsProvider::docs_iter`] opens the underlying file anew.
pub trait DocsProvider: Send + Sync {
    /// Resolved path of the backing file.
    fn docs_path(&self) -> PathBuf;

    /// Language tag of the document text (e.g. `"en"`).
    fn docs_lang(&self) -> &str;

    /// Iterates the collection in file order.
    fn docs_iter(
        &self,
    ) -> Result<Box<dyn Iterator<Item = Result<Box<dyn Doc>, DatasetError>> + Send>, DatasetError>;

    /// Number of documents in the collection.
    ///
    /// Default implementation consumes a full iteration.
    fn docs_count(&self) -> Result<usize, DatasetError> {
        let mut count = 0;
        for doc in self.docs_iter()? {
            doc?;
            count += 1;
        }
        Ok(count)
    }
}

// ============================================================================
// JsonlDocs
// ============================================================================

/// A JSON-lines document collection with a fixed record schema `T`.
#[derive(Debug, Clone)]
pub struct JsonlDocs<T> {
    file: PackageDataFile,
    lang: String,
    _doc: PhantomData<fn() -> T>,
}

impl<T> JsonlDocs<T>
where
    T: Doc + DeserializeOwned + Serialize + 'static,
{
    /// Creates a collection over `file` with the given language tag.
    ///
    /// No I/O happens here; the file may not exist yet.
    pub fn new(file: PackageDataFile, lang: impl Into<String>) -> Self {
        Self {
            file,
            lang: lang.into(),
            _doc: PhantomData,
        }
    }

    /// Iterates the collection as its concrete document type.
    pub fn iter(&self) -> Result<JsonlIter<T>, DatasetError> {
        let path = self.file.resolve();
        if !path.exists() {
            return Err(DatasetError::MissingFile(path));
        }
        debug!("opening JSONL collection: {}", path.display());
        let reader = BufReader::new(File::open(&path)?);
        Ok(JsonlIter {
            lines: reader.lines(),
            line_no: 0,
            _doc: PhantomData,
        })
    }
}

impl<T> DocsProvider for JsonlDocs<T>
where
    T: Doc + DeserializeOwned + Serialize + 'static,
{
    fn docs_path(&self) -> PathBuf {
        self.file.resolve()
    }

    fn docs_lang(&self) -> &str {
        &self.lang
    }

    fn docs_iter(
        &self,
    ) -> Result<Box<dyn Iterator<Item = Result<Box<dyn Doc>, DatasetError>> + Send>, DatasetError>
    {
        let iter = self.iter()?;
        Ok(Box::new(
            iter.map(|doc| doc.map(|d| Box::new(d) as Box<dyn Doc>)),
        ))
    }
}

/// Lazy iterator over a JSONL file, yielding one `T` per non-blank line.
pub struct JsonlIter<T> {
    lines: Lines<BufReader<File>>,
    line_no: usize,
    _doc: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> Iterator for JsonlIter<T> {
    type Item = Result<T, DatasetError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;
            if line.trim().is_empty() {
                continue;
            }
            return Some(serde_json::from_str(&line).map_err(|e| DatasetError::Parse {
                line: self.line_no,
                message: e.to_string(),
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;
    use tempfile::TempDir;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestDoc {
        doc_id: String,
        title: String,
    }

    impl Doc for TestDoc {
        fn doc_id(&self) -> &str {
            &self.doc_id
        }

        fn default_text(&self) -> String {
            self.title.clone()
        }

        fn to_json(&self) -> serde_json::Value {
            serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
        }
    }

    fn write_collection(lines: &[&str]) -> (TempDir, JsonlDocs<TestDoc>) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docs.jsonl");
        let mut file = File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        // Absolute path: resolution finds it without a package root.
        let docs = JsonlDocs::new(PackageDataFile::new(&path), "en");
        (dir, docs)
    }

    #[test]
    fn test_iterates_in_file_order() {
        let (_dir, docs) = write_collection(&[
            r#"{"doc_id": "a", "title": "First"}"#,
            r#"{"doc_id": "b", "title": "Second"}"#,
        ]);

        let loaded: Vec<TestDoc> = docs.iter().unwrap().map(|d| d.unwrap()).collect();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].doc_id, "a");
        assert_eq!(loaded[1].title, "Second");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let (_dir, docs) = write_collection(&[
            r#"{"doc_id": "a", "title": "First"}"#,
            "",
            "   ",
            r#"{"doc_id": "b", "title": "Second"}"#,
        ]);

        assert_eq!(docs.docs_count().unwrap(), 2);
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let (_dir, docs) = write_collection(&[
            r#"{"doc_id": "a", "title": "First"}"#,
            r#"{"doc_id": "#,
        ]);

        let results: Vec<_> = docs.iter().unwrap().collect();
        assert!(results[0].is_ok());
        match &results[1] {
            Err(DatasetError::Parse { line, .. }) => assert_eq!(*line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let docs: JsonlDocs<TestDoc> =
            JsonlDocs::new(PackageDataFile::new("/nonexistent/docs.jsonl"), "en");
        assert!(matches!(docs.iter(), Err(DatasetError::MissingFile(_))));
    }

    #[test]
    fn test_construction_does_no_io() {
        // The file does not exist; construction must still succeed.
        let docs: JsonlDocs<TestDoc> =
            JsonlDocs::new(PackageDataFile::new("/nonexistent/docs.jsonl"), "en");
        assert_eq!(docs.docs_lang(), "en");
    }

    #[test]
    fn test_type_erased_iteration() {
        let (_dir, docs) = write_collection(&[r#"{"doc_id": "a", "title": "First"}"#]);

        let provider: &dyn DocsProvider = &docs;
        let loaded: Vec<_> = provider.docs_iter().unwrap().map(|d| d.unwrap()).collect();
        assert_eq!(loaded[0].doc_id(), "a");
        assert_eq!(loaded[0].default_text(), "First");
        assert_eq!(loaded[0].to_json()["title"], "First");
    }
}
