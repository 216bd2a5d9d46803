//! TREC-style XML topic files.
//!
//! Topics arrive as an XML document of the shape
//!
//! ```xml
//! <topics>
//!   <topic number="1">
//!     <query>retrieval evaluation</query>
//!     <description>...</description>
//!     <narrative>...</narrative>
//!   </topic>
//! </topics>
//! ```
//!
//! The topic id comes from the `number` attribute, or from a `<number>`
//! child element when the attribute is absent. `<query>` and `<title>` are
//! accepted interchangeably for the query text. Description and narrative
//! are optional. Text content is whitespace-trimmed.

use crate::error::DatasetError;
use crate::util::PackageDataFile;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::debug;

// ============================================================================
// Topic Record
// ============================================================================

/// One topic (query) from a TREC XML topic file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicQuery {
    /// Topic identifier, as given in the file.
    pub query_id: String,
    /// Query text (`<query>` or `<title>` element).
    pub title: String,
    /// Longer statement of the information need, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Relevance criteria for assessors, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}

impl TopicQuery {
    /// Text searched when no specific field is requested.
    pub fn default_text(&self) -> &str {
        &self.title
    }
}

/// A file-backed source of topics.
pub trait QueriesProvider: Send + Sync {
    /// Resolved path of the backing file.
    fn queries_path(&self) -> PathBuf;

    /// Language tag of the query text (e.g. `"en"`).
    fn queries_lang(&self) -> &str;

    /// Parses the file and returns all topics in file order.
    fn queries_iter(&self) -> Result<Vec<TopicQuery>, DatasetError>;
}

// ============================================================================
// TrecXmlQueries
// ============================================================================

/// A TREC XML topic file.
///
/// Like the document sources, construction records only the file location;
/// the XML is parsed on each [`QueriesProvider::queries_iter`] call.
#[derive(Debug, Clone)]
pub struct TrecXmlQueries {
    file: PackageDataFile,
    lang: String,
}

impl TrecXmlQueries {
    /// Creates a topic source over `file` with the given language tag.
    pub fn new(file: PackageDataFile, lang: impl Into<String>) -> Self {
        Self {
            file,
            lang: lang.into(),
        }
    }
}

impl QueriesProvider for TrecXmlQueries {
    fn queries_path(&self) -> PathBuf {
        self.file.resolve()
    }

    fn queries_lang(&self) -> &str {
        &self.lang
    }

    fn queries_iter(&self) -> Result<Vec<TopicQuery>, DatasetError> {
        let path = self.file.resolve();
        if !path.exists() {
            return Err(DatasetError::MissingFile(path));
        }
        debug!("parsing TREC XML topics: {}", path.display());
        let reader = BufReader::new(File::open(&path)?);
        parse_topics(reader)
    }
}

/// Fields of the topic currently being assembled.
#[derive(Default)]
struct PartialTopic {
    query_id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    narrative: Option<String>,
}

impl PartialTopic {
    fn finish(self, index: usize) -> Result<TopicQuery, DatasetError> {
        let query_id = self
            .query_id
            .ok_or_else(|| DatasetError::Xml(format!("topic #{} has no number", index + 1)))?;
        let title = self.title.ok_or_else(|| {
            DatasetError::Xml(format!("topic '{}' has no query text", query_id))
        })?;
        Ok(TopicQuery {
            query_id,
            title,
            description: self.description,
            narrative: self.narrative,
        })
    }
}

/// Starts a topic from a `<topic>` tag, taking the id from its `number`
/// attribute when present.
fn topic_from_attributes(
    start: &quick_xml::events::BytesStart<'_>,
) -> Result<PartialTopic, DatasetError> {
    let mut topic = PartialTopic::default();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| DatasetError::Xml(e.to_string()))?;
        if attr.key.as_ref() == b"number" {
            let value = attr
                .unescape_value()
                .map_err(|e| DatasetError::Xml(e.to_string()))?;
            topic.query_id = Some(value.trim().to_string());
        }
    }
    Ok(topic)
}

/// Parses a `<topics>` document from any buffered reader.
fn parse_topics<R: std::io::BufRead>(input: R) -> Result<Vec<TopicQuery>, DatasetError> {
    let mut reader = Reader::from_reader(input);
    reader.trim_text(true);

    let mut topics = Vec::new();
    let mut current: Option<PartialTopic> = None;
    // Element whose text content is being collected, e.g. b"query".
    let mut field: Option<Vec<u8>> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(start) => match start.name().as_ref() {
                b"topic" => {
                    current = Some(topic_from_attributes(&start)?);
                    field = None;
                }
                name @ (b"query" | b"title" | b"description" | b"narrative" | b"number") => {
                    if current.is_some() {
                        field = Some(name.to_vec());
                    }
                }
                _ => {}
            },
            Event::Text(text) => {
                if let (Some(topic), Some(name)) = (current.as_mut(), field.as_ref()) {
                    let value = text.unescape()?.trim().to_string();
                    if !value.is_empty() {
                        match name.as_slice() {
                            b"query" | b"title" => topic.title = Some(value),
                            b"description" => topic.description = Some(value),
                            b"narrative" => topic.narrative = Some(value),
                            b"number" => topic.query_id = Some(value),
                            _ => {}
                        }
                    }
                }
            }
            // A self-closing <topic/> can carry at most a number attribute;
            // it fails the same checks as an empty <topic></topic>.
            Event::Empty(start) => {
                if start.name().as_ref() == b"topic" {
                    let topic = topic_from_attributes(&start)?;
                    topics.push(topic.finish(topics.len())?);
                }
            }
            Event::End(end) => match end.name().as_ref() {
                b"topic" => {
                    if let Some(topic) = current.take() {
                        topics.push(topic.finish(topics.len())?);
                    }
                }
                _ => field = None,
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(topics)
}
