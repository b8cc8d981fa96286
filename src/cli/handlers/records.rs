//! Records command handler.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

use crate::cli::RecordsArgs;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat, RecordSlugListing};
use crate::infra::{JsonRecord, SlugBehavior, SlugRecord};

pub fn handle_records(args: &RecordsArgs, config: &Config) -> Result<()> {
    let behavior = config.behavior(
        &args.policy,
        args.source_attr.as_deref(),
        args.id_attr.as_deref(),
    );
    let records = read_records(&args.file)?;
    let slugs = slug_records(records, &args.entity, &behavior)?;

    tracing::info!(count = slugs.len(), file = %args.file.display(), "generated slugs");

    match args.format {
        OutputFormat::Human => {
            for listing in &slugs {
                println!("{}", listing.slug);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(slugs))?);
        }
    }
    Ok(())
}

/// Reads a JSON array of records from disk.
fn read_records(path: &Path) -> Result<Vec<Value>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read records file: {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse records file: {}", path.display()))
}

/// Builds a slug for each record, stopping at the first failure.
pub(crate) fn slug_records(
    records: Vec<Value>,
    entity: &str,
    behavior: &SlugBehavior,
) -> Result<Vec<RecordSlugListing>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, value)| -> Result<RecordSlugListing> {
            let record = JsonRecord::from_value(entity, behavior.id_attr.as_str(), value)
                .with_context(|| format!("record {index} is not a JSON object"))?;
            let slug = behavior
                .generate_unique_slug(&record)
                .with_context(|| format!("failed to build slug for record {index}"))?;
            Ok(RecordSlugListing {
                key: record.primary_key(),
                slug,
            })
        })
        .collect()
}
