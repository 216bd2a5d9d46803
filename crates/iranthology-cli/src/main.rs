//! IR Anthology CLI - inspect registered datasets from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Registered dataset names
//! ira list
//!
//! # Export documents as JSONL
//! ira docs iranthology-tutors
//! ira docs iranthology-tutors --limit 10
//! ira docs iranthology-tutors --count
//!
//! # Export topics as JSONL
//! ira topics iranthology-tutors
//!
//! # Look one document up by id
//! ira lookup iranthology-tutors sigir/SaltonWY75
//! ```

mod output;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use iranthology_core::{anthology, registry, Dataset};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// IR Anthology dataset inspector.
///
/// Lists registered datasets and exports their documents and topics.
#[derive(Parser)]
#[command(name = "ira", version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List registered dataset names
    List {
        /// Output names as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export a dataset's documents as JSONL to stdout
    Docs {
        /// Registered dataset name
        dataset: String,

        /// Print only the number of documents
        #[arg(long)]
        count: bool,

        /// Stop after N documents
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Export a dataset's topics as JSONL to stdout
    Topics {
        /// Registered dataset name
        dataset: String,

        /// Stop after N topics
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print one document by id
    Lookup {
        /// Registered dataset name
        dataset: String,

        /// Document identifier
        doc_id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    anthology::register().context("registering the IR Anthology dataset")?;

    match cli.command {
        Command::List { json } => {
            print!("{}", output::format_names(&registry().names(), json));
        }
        Command::Docs {
            dataset,
            count,
            limit,
        } => {
            let dataset = resolve(&dataset)?;
            if count {
                println!("{}", dataset.docs().docs_count()?);
            } else {
                output::write_docs(&mut std::io::stdout().lock(), &dataset, limit)?;
            }
        }
        Command::Topics { dataset, limit } => {
            let dataset = resolve(&dataset)?;
            output::write_topics(&mut std::io::stdout().lock(), &dataset, limit)?;
        }
        Command::Lookup { dataset, doc_id } => {
            let dataset = resolve(&dataset)?;
            let doc = dataset
                .docs_lookup(&doc_id)?
                .ok_or_else(|| anyhow!("no document with id '{}' in the collection", doc_id))?;
            println!("{}", serde_json::to_string_pretty(&doc.to_json())?);
        }
    }

    Ok(())
}

/// Looks a dataset up in the process-wide registry.
fn resolve(name: &str) -> Result<Arc<Dataset>> {
    registry()
        .get(name)
        .with_context(|| format!("registered datasets: {}", registry().names().join(", ")))
}
