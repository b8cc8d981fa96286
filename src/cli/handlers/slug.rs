//! Handlers for `base`, `build`, and `extract`.

use anyhow::{Context, Result};

use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat, SlugListing};
use crate::cli::{BaseArgs, BuildArgs, ExtractArgs};
use crate::domain::SlugConfig;
use crate::infra::{build_slug, create_base_slug, extract_identifier};

pub fn handle_base(args: &BaseArgs, config: &Config) -> Result<()> {
    let lowercase = config.behavior.lowercase && !args.keep_case;
    println!("{}", create_base_slug(&args.text, lowercase));
    Ok(())
}

pub fn handle_build(args: &BuildArgs, config: &Config) -> Result<()> {
    let slug_config = slug_config_for(args, config);
    let slug = build_slug(&slug_config)
        .with_context(|| format!("failed to build slug for '{}'", args.text))?;

    match args.format {
        OutputFormat::Human => println!("{slug}"),
        OutputFormat::Json => {
            let listing = SlugListing {
                slug,
                identifier: slug_config.identifier().map(|id| id.to_string()),
            };
            println!("{}", serde_json::to_string_pretty(&Output::new(listing))?);
        }
    }
    Ok(())
}

pub fn handle_extract(args: &ExtractArgs) -> Result<()> {
    let identifier = extract_identifier(&args.slug);

    match args.format {
        OutputFormat::Human => println!("{identifier}"),
        OutputFormat::Json => {
            let listing = SlugListing {
                slug: args.slug.clone(),
                identifier: Some(identifier.to_string()),
            };
            println!("{}", serde_json::to_string_pretty(&Output::new(listing))?);
        }
    }
    Ok(())
}

/// Combines `build` arguments with the configured behavior (pure, no I/O).
pub(crate) fn slug_config_for(args: &BuildArgs, config: &Config) -> SlugConfig {
    let behavior = config.behavior(&args.policy, None, None);
    let mut builder = SlugConfig::builder()
        .source_text(args.text.as_str())
        .include_identifier_prefix(!behavior.avoid_id_prefixing)
        .max_length(behavior.max_chars)
        .lowercase(behavior.lowercase);

    if let Some(id) = &args.id {
        builder = builder.identifier(id.as_str());
    }

    tracing::debug!(?builder, "build slug");
    builder.build()
}
