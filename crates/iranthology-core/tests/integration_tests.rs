//! End-to-end tests against the process-wide registry and the shipped
//! sample data under `datasets_in_progress/`.
//!
//! The global registry is shared mutable state, so everything that touches
//! it lives in one test function; per-module unit tests use private
//! `Registry` instances instead.

use iranthology_core::{anthology, registry, DatasetError};

#[test]
fn test_anthology_registration_end_to_end() {
    anthology::register().expect("first registration succeeds");

    // Resolvable exactly once, under the documented name.
    let dataset = registry()
        .lookup(anthology::DATASET_NAME)
        .expect("registered name resolves");
    assert_eq!(registry().names(), vec!["iranthology-tutors"]);

    // Re-registration is refused and keeps the original entry.
    let err = anthology::register().expect_err("duplicate registration fails");
    assert!(matches!(err, DatasetError::DuplicateDataset(name) if name == "iranthology-tutors"));
    assert_eq!(registry().len(), 1);

    // Source paths are package-relative, language tags are English.
    assert!(dataset
        .docs()
        .docs_path()
        .ends_with("datasets_in_progress/ir-anthology-processed.jsonl"));
    assert!(dataset
        .queries()
        .queries_path()
        .ends_with("datasets_in_progress/topics.xml"));
    assert_eq!(dataset.docs().docs_lang(), "en");
    assert_eq!(dataset.queries().queries_lang(), "en");

    // The shipped sample collection loads and the schema holds.
    let docs: Vec<_> = dataset
        .docs_iter()
        .expect("sample collection opens")
        .collect::<Result<_, _>>()
        .expect("every sample record deserializes");
    assert_eq!(docs.len(), 8);
    let salton = dataset
        .docs_lookup("sigir/SaltonWY75")
        .unwrap()
        .expect("known doc id resolves");
    assert!(salton
        .default_text()
        .starts_with("A Vector Space Model for Automatic Indexing In a document retrieval"));

    // Empty abstract gives "title + space".
    let trec_report = dataset.docs_lookup("trec/VoorheesH00").unwrap().unwrap();
    assert_eq!(
        trec_report.default_text(),
        "The TREC-9 Question Answering Track Report "
    );

    // The shipped topics parse.
    let topics = dataset.queries_iter().expect("sample topics parse");
    assert_eq!(topics.len(), 3);
    assert_eq!(topics[0].query_id, "1");
    assert_eq!(topics[0].title, "retrieval system improving effectiveness");
    assert!(topics[2].narrative.is_some());
}
