//! Slug construction and identifier extraction.

use crate::domain::{ConfigurationError, SlugConfig};

/// Characters removed outright from slug source text.
///
/// ASCII only. Non-ASCII punctuation such as curly quotes or em-dashes is
/// left in place.
pub const DISALLOWED_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '+', '=', '~', ':', '.', ',', ';', '\'',
    '"', '<', '>', '/', '\\', '`',
];

/// Separator between words, and between the identifier and the rest.
pub const SEPARATOR: char = '-';

/// Converts text to a base slug, without identifier or length cap.
///
/// - Replaces each space (U+0020 only) with a hyphen
/// - Removes every character in [`DISALLOWED_CHARS`], inserting nothing
/// - Replaces underscores with hyphens
/// - Lowercases (Unicode-aware) when `lowercase` is true
///
/// Runs of spaces become runs of hyphens; nothing is collapsed or trimmed.
///
/// # Examples
///
/// ```
/// use recslug::infra::create_base_slug;
///
/// assert_eq!(create_base_slug("Hello World", true), "hello-world");
/// assert_eq!(create_base_slug("Café Time!", true), "café-time");
/// assert_eq!(create_base_slug("Keep_Case", false), "Keep-Case");
/// ```
pub fn create_base_slug(text: &str, lowercase: bool) -> String {
    // Spaces and underscores both end up as hyphens, and neither is in the
    // disallowed set, so one pass covers the space/strip/underscore steps.
    let slug: String = text
        .chars()
        .filter(|c| !DISALLOWED_CHARS.contains(c))
        .map(|c| if c == ' ' || c == '_' { SEPARATOR } else { c })
        .collect();

    if lowercase { slug.to_lowercase() } else { slug }
}

/// Builds the full slug described by `config`.
///
/// The identifier prefix is added before the length cap is applied, so a long
/// identifier can push out part or all of the base slug (and even its own
/// trailing hyphen).
///
/// # Errors
///
/// Returns `ConfigurationError` if:
/// - The prefix is enabled and the identifier is absent or empty
/// - No source text was supplied
///
/// # Examples
///
/// ```
/// use recslug::domain::SlugConfig;
/// use recslug::infra::build_slug;
///
/// let config = SlugConfig::builder()
///     .source_text("My Title")
///     .identifier(42u64)
///     .build();
/// assert_eq!(build_slug(&config).unwrap(), "42-my-title");
/// ```
pub fn build_slug(config: &SlugConfig) -> Result<String, ConfigurationError> {
    let prefix = if config.include_identifier_prefix() {
        match config.identifier() {
            Some(id) if !id.is_empty() => Some(id),
            _ => return Err(ConfigurationError::MissingIdentifier),
        }
    } else {
        None
    };

    let text = config
        .source_text()
        .ok_or(ConfigurationError::MissingSourceText)?;

    let base = create_base_slug(text, config.lowercase());
    let slug = match prefix {
        Some(id) => format!("{id}{SEPARATOR}{base}"),
        None => base,
    };

    let max_length = config.max_length();
    let mut slug = truncate_chars(&slug, max_length).to_string();

    if config.lowercase() {
        // Covers the identifier too. Folding can expand a character
        // (U+0130 becomes two), so the cap is applied once more.
        slug = slug.to_lowercase();
        slug.truncate(char_boundary(&slug, max_length));
    }

    Ok(slug)
}

/// Returns the identifier portion of a slug: everything before the first hyphen.
///
/// A slug without a hyphen is returned whole. This is purely syntactic and
/// does not check that the result looks like an identifier.
///
/// # Examples
///
/// ```
/// use recslug::infra::extract_identifier;
///
/// assert_eq!(extract_identifier("42-my-title"), "42");
/// assert_eq!(extract_identifier("noHyphenHere"), "noHyphenHere");
/// ```
pub fn extract_identifier(slug: &str) -> &str {
    slug.split_once(SEPARATOR).map_or(slug, |(id, _)| id)
}

/// Cuts `s` to at most `max` characters.
fn truncate_chars(s: &str, max: usize) -> &str {
    &s[..char_boundary(s, max)]
}

/// Byte offset just past the `max`-th character, or the length of `s`.
fn char_boundary(s: &str, max: usize) -> usize {
    s.char_indices().nth(max).map_or(s.len(), |(idx, _)| idx)
}
