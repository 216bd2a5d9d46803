//! Process-wide named dataset registry.
//!
//! Downstream tooling looks datasets up by name; adapters register their
//! definitions once, typically at startup. Registration is write-once per
//! name: re-registering an existing name fails and leaves the original
//! entry untouched.

use crate::dataset::Dataset;
use crate::error::DatasetError;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};
use tracing::info;

/// A mapping from dataset name to dataset definition.
///
/// Most callers want the process-wide instance from [`registry`]; separate
/// instances exist for tests and embedding scenarios.
#[derive(Default)]
pub struct Registry {
    datasets: RwLock<HashMap<String, Arc<Dataset>>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `dataset` under `name`.
    ///
    /// Fails with [`DatasetError::DuplicateDataset`] if the name is taken.
    pub fn register(&self, name: impl Into<String>, dataset: Dataset) -> Result<(), DatasetError> {
        let name = name.into();
        let mut datasets = self.datasets.write().expect("registry lock poisoned");
        if datasets.contains_key(&name) {
            return Err(DatasetError::DuplicateDataset(name));
        }
        info!("registered dataset '{}'", name);
        datasets.insert(name, Arc::new(dataset));
        Ok(())
    }

    /// Looks a dataset up by name.
    pub fn lookup(&self, name: &str) -> Option<Arc<Dataset>> {
        self.datasets
            .read()
            .expect("registry lock poisoned")
            .get(name)
            .cloned()
    }

    /// Like [`Registry::lookup`], but an absent name is an error.
    pub fn get(&self, name: &str) -> Result<Arc<Dataset>, DatasetError> {
        self.lookup(name)
            .ok_or_else(|| DatasetError::UnknownDataset(name.to_string()))
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .datasets
            .read()
            .expect("registry lock poisoned")
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Number of registered datasets.
    pub fn len(&self) -> usize {
        self.datasets.read().expect("registry lock poisoned").len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The process-wide registry.
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::jsonl::{Doc, JsonlDocs};
    use crate::formats::trec_xml::TrecXmlQueries;
    use crate::util::PackageDataFile;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct TestDoc {
        doc_id: String,
    }

    impl Doc for TestDoc {
        fn doc_id(&self) -> &str {
            &self.doc_id
        }

        fn default_text(&self) -> String {
            String::new()
        }

        fn to_json(&self) -> serde_json::Value {
            serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
        }
    }

    // Paths need not exist; registration performs no I/O.
    fn test_dataset() -> Dataset {
        Dataset::new(
            JsonlDocs::<TestDoc>::new(PackageDataFile::new("nowhere/docs.jsonl"), "en"),
            TrecXmlQueries::new(PackageDataFile::new("nowhere/topics.xml"), "en"),
        )
    }

    #[test]
    fn test_register_then_lookup() {
        let registry = Registry::new();
        registry.register("corpus-a", test_dataset()).unwrap();

        assert!(registry.lookup("corpus-a").is_some());
        assert!(registry.lookup("corpus-b").is_none());
        assert!(matches!(
            registry.get("corpus-b"),
            Err(DatasetError::UnknownDataset(name)) if name == "corpus-b"
        ));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_registration_fails_and_keeps_original() {
        let registry = Registry::new();
        registry.register("corpus-a", test_dataset()).unwrap();
        let original = registry.lookup("corpus-a").unwrap();

        let err = registry.register("corpus-a", test_dataset()).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateDataset(name) if name == "corpus-a"));

        // Same Arc as before the failed attempt.
        let after = registry.lookup("corpus-a").unwrap();
        assert!(Arc::ptr_eq(&original, &after));
    }

    #[test]
    fn test_names_are_sorted() {
        let registry = Registry::new();
        registry.register("zeta", test_dataset()).unwrap();
        registry.register("alpha", test_dataset()).unwrap();

        assert_eq!(registry.names(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.names().is_empty());
    }
}
