//! Slug generation for records, resolving text and identifier by name.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::{ConfigurationError, DEFAULT_MAX_LENGTH, SlugConfig};
use crate::infra::slug::{build_slug, extract_identifier};

/// A record that can be slugged by [`SlugBehavior`].
///
/// Lookups return `None` when the record has no such attribute or method at
/// all. An attribute that exists but holds no value should return an empty
/// string instead, so the two cases stay distinguishable.
pub trait SlugRecord {
    /// Type name used in error messages (e.g. "Post").
    fn entity_name(&self) -> &str;

    /// Primary key shown in error messages, if the record has one.
    fn primary_key(&self) -> Option<String>;

    /// Returns the textual value of the named attribute.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Runs the named source-preparation method.
    ///
    /// Records without preparation methods can rely on the default.
    fn prepare_source(&self, _method: &str) -> Option<String> {
        None
    }
}

/// Per-record-type slug settings.
///
/// Field names follow the record-facing vocabulary (`max_chars`,
/// `avoid_id_prefixing`) and map one-to-one onto [`SlugConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlugBehavior {
    /// Attribute holding the text to slugify.
    pub source_attr: String,

    /// Method producing the text instead of `source_attr`, if set.
    pub prepare_method: Option<String>,

    /// Attribute holding the record identifier.
    pub id_attr: String,

    /// Skips the identifier prefix. Two records can then share a slug.
    pub avoid_id_prefixing: bool,

    pub max_chars: usize,

    pub lowercase: bool,
}

impl Default for SlugBehavior {
    fn default() -> Self {
        Self {
            source_attr: "title".to_string(),
            prepare_method: None,
            id_attr: "id".to_string(),
            avoid_id_prefixing: false,
            max_chars: DEFAULT_MAX_LENGTH,
            lowercase: true,
        }
    }
}

impl SlugBehavior {
    /// Builds the slug for `record`.
    ///
    /// The name is historical: the slug is only unique when the identifier
    /// prefix is on and identifiers are unique.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if:
    /// - Prefixing is on and the record lacks `id_attr`, or its value is empty
    /// - `prepare_method` is set and the record has no such method
    /// - `prepare_method` is unset and the record lacks `source_attr`
    pub fn generate_unique_slug<R: SlugRecord + ?Sized>(
        &self,
        record: &R,
    ) -> Result<String, ConfigurationError> {
        let mut builder = SlugConfig::builder()
            .include_identifier_prefix(!self.avoid_id_prefixing)
            .max_length(self.max_chars)
            .lowercase(self.lowercase);

        if !self.avoid_id_prefixing {
            let id = record
                .attribute(&self.id_attr)
                .ok_or_else(|| self.missing_attribute(record, &self.id_attr))?;
            builder = builder.identifier(id);
        }

        let text = match &self.prepare_method {
            Some(method) => record.prepare_source(method).ok_or_else(|| {
                ConfigurationError::MissingPrepareMethod {
                    entity: record.entity_name().to_string(),
                    key: display_key(record),
                    method: method.clone(),
                }
            })?,
            None => record
                .attribute(&self.source_attr)
                .ok_or_else(|| self.missing_attribute(record, &self.source_attr))?,
        };

        tracing::debug!(
            entity = record.entity_name(),
            text = %text,
            "resolved slug source"
        );

        build_slug(&builder.source_text(text).build())
    }

    /// Recovers the identifier from a slug this behavior produced.
    pub fn extract_identifier<'a>(&self, slug: &'a str) -> &'a str {
        extract_identifier(slug)
    }

    fn missing_attribute<R: SlugRecord + ?Sized>(
        &self,
        record: &R,
        attribute: &str,
    ) -> ConfigurationError {
        ConfigurationError::MissingAttribute {
            entity: record.entity_name().to_string(),
            key: display_key(record),
            attribute: attribute.to_string(),
        }
    }
}

fn display_key<R: SlugRecord + ?Sized>(record: &R) -> String {
    record.primary_key().unwrap_or_else(|| "?".to_string())
}

/// A [`SlugRecord`] backed by a JSON object.
///
/// Strings are used verbatim, numbers and booleans by their JSON text, and
/// `null` as an empty string. Nested arrays and objects count as absent.
#[derive(Debug, Clone)]
pub struct JsonRecord {
    entity: String,
    key_attr: String,
    fields: Map<String, Value>,
}

impl JsonRecord {
    /// Wraps a JSON object. `key_attr` names the field shown as the primary key.
    pub fn new(
        entity: impl Into<String>,
        key_attr: impl Into<String>,
        fields: Map<String, Value>,
    ) -> Self {
        Self {
            entity: entity.into(),
            key_attr: key_attr.into(),
            fields,
        }
    }

    /// Wraps a JSON value, returning `None` if it is not an object.
    pub fn from_value(
        entity: impl Into<String>,
        key_attr: impl Into<String>,
        value: Value,
    ) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self::new(entity, key_attr, fields)),
            _ => None,
        }
    }
}

impl SlugRecord for JsonRecord {
    fn entity_name(&self) -> &str {
        &self.entity
    }

    fn primary_key(&self) -> Option<String> {
        self.attribute(&self.key_attr).filter(|k| !k.is_empty())
    }

    fn attribute(&self, name: &str) -> Option<String> {
        match self.fields.get(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null => Some(String::new()),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}
