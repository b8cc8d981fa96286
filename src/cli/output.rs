//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A built slug together with the identifier it carries.
#[derive(Debug, Serialize)]
pub struct SlugListing {
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

/// One record's slug in `records` output.
#[derive(Debug, Serialize)]
pub struct RecordSlugListing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn output_wraps_in_data() {
        let out = Output::new(SlugListing {
            slug: "42-my-title".to_string(),
            identifier: Some("42".to_string()),
        });
        assert_eq!(
            serde_json::to_string(&out).unwrap(),
            r#"{"data":{"slug":"42-my-title","identifier":"42"}}"#
        );
    }

    #[test]
    fn absent_identifier_is_omitted() {
        let listing = SlugListing {
            slug: "my-title".to_string(),
            identifier: None,
        };
        assert_eq!(
            serde_json::to_string(&listing).unwrap(),
            r#"{"slug":"my-title"}"#
        );
    }
}
