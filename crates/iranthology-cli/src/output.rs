//! Output formatting for dataset exports.
//!
//! Documents and topics stream to stdout as JSONL so the output can be piped
//! straight into indexing tooling; `list` supports human and JSON forms.

use anyhow::Result;
use iranthology_core::Dataset;
use serde::Serialize;
use std::io::Write;
use tracing::info;

/// JSON form of `ira list`.
#[derive(Serialize)]
struct NamesOutput<'a> {
    datasets: &'a [String],
}

/// Formats registered dataset names.
pub fn format_names(names: &[String], json: bool) -> String {
    if json {
        let output = NamesOutput { datasets: names };
        let mut rendered =
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string());
        rendered.push('\n');
        return rendered;
    }

    if names.is_empty() {
        return "No datasets registered.\n".to_string();
    }
    let mut rendered = String::new();
    for name in names {
        rendered.push_str(name);
        rendered.push('\n');
    }
    rendered
}

/// Streams a dataset's documents as JSONL.
pub fn write_docs(writer: &mut impl Write, dataset: &Dataset, limit: Option<usize>) -> Result<()> {
    let mut written = 0;
    for doc in dataset.docs_iter()? {
        if limit.is_some_and(|n| written >= n) {
            break;
        }
        let doc = doc?;
        writeln!(writer, "{}", serde_json::to_string(&doc.to_json())?)?;
        written += 1;
    }
    info!("exported {} documents", written);
    Ok(())
}

/// Streams a dataset's topics as JSONL.
pub fn write_topics(
    writer: &mut impl Write,
    dataset: &Dataset,
    limit: Option<usize>,
) -> Result<()> {
    let topics = dataset.queries_iter()?;
    let take = limit.unwrap_or(topics.len());
    for topic in topics.iter().take(take) {
        writeln!(writer, "{}", serde_json::to_string(topic)?)?;
    }
    info!("exported {} topics", topics.len().min(take));
    Ok(())
}
