//! Per-call inputs for building a slug.

use crate::domain::Identifier;

/// Default cap on slug length, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// Everything [`build_slug`](crate::infra::build_slug) needs for one slug.
///
/// The caller resolves the source text and identifier before building the
/// config; the slug builder only checks that they are present.
///
/// # Examples
///
/// ```
/// use recslug::domain::SlugConfig;
///
/// let config = SlugConfig::builder()
///     .source_text("My Title")
///     .identifier(42u64)
///     .max_length(50)
///     .build();
///
/// assert!(config.include_identifier_prefix());
/// assert_eq!(config.max_length(), 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugConfig {
    source_text: Option<String>,
    identifier: Option<Identifier>,
    include_identifier_prefix: bool,
    max_length: usize,
    lowercase: bool,
}

impl SlugConfig {
    /// Starts a builder with the default policy: prefix on, 100 chars, lowercase.
    pub fn builder() -> SlugConfigBuilder {
        SlugConfigBuilder::default()
    }

    pub fn source_text(&self) -> Option<&str> {
        self.source_text.as_deref()
    }

    pub fn identifier(&self) -> Option<&Identifier> {
        self.identifier.as_ref()
    }

    pub fn include_identifier_prefix(&self) -> bool {
        self.include_identifier_prefix
    }

    /// Maximum slug length in characters (Unicode scalar values, not bytes).
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn lowercase(&self) -> bool {
        self.lowercase
    }
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`SlugConfig`].
#[derive(Debug, Clone)]
pub struct SlugConfigBuilder {
    source_text: Option<String>,
    identifier: Option<Identifier>,
    include_identifier_prefix: bool,
    max_length: usize,
    lowercase: bool,
}

impl Default for SlugConfigBuilder {
    fn default() -> Self {
        Self {
            source_text: None,
            identifier: None,
            include_identifier_prefix: true,
            max_length: DEFAULT_MAX_LENGTH,
            lowercase: true,
        }
    }
}

impl SlugConfigBuilder {
    /// Sets the raw text to slugify.
    pub fn source_text(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    /// Sets the record identifier used as the prefix.
    pub fn identifier(mut self, identifier: impl Into<Identifier>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Sets whether `identifier + "-"` is prepended.
    pub fn include_identifier_prefix(mut self, include: bool) -> Self {
        self.include_identifier_prefix = include;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn build(self) -> SlugConfig {
        SlugConfig {
            source_text: self.source_text,
            identifier: self.identifier,
            include_identifier_prefix: self.include_identifier_prefix,
            max_length: self.max_length,
            lowercase: self.lowercase,
        }
    }
}
