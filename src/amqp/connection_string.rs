//! Parsing of flat `key=value;key=value` connection strings.
//!
//! Separators are configurable via [`ParseOptions`]. There is no escaping mechanism: a key or a
//! value cannot contain the entity separator, and a key cannot contain the key/value separator.
use crate::error::Error;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use tracing::{debug, trace};

/// The separator used between `key=value` segments if none is specified.
pub const DEFAULT_ENTITY_SEPARATOR: &str = ";";
/// The separator used between a key and its value if none is specified.
pub const DEFAULT_KEY_VALUE_SEPARATOR: &str = "=";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Separators used to split a connection string.
///
/// Both separators are matched as literal substrings. A separator left unset, or set to an
/// empty string, falls back to its default (`;` between segments, `=` between key and value).
pub struct ParseOptions {
    /// Delimits successive `key=value` segments.
    pub entity_separator: Option<String>,
    /// Delimits a segment's key from its value.
    pub key_value_separator: Option<String>,
}

impl ParseOptions {
    #[must_use]
    pub fn with_entity_separator<T: Into<String>>(mut self, separator: T) -> Self {
        self.entity_separator = Some(separator.into());
        self
    }

    #[must_use]
    pub fn with_key_value_separator<T: Into<String>>(mut self, separator: T) -> Self {
        self.key_value_separator = Some(separator.into());
        self
    }

    /// The entity separator that will actually be used for splitting.
    pub fn entity_separator(&self) -> &str {
        effective(&self.entity_separator, DEFAULT_ENTITY_SEPARATOR)
    }

    /// The key/value separator that will actually be used for splitting.
    pub fn key_value_separator(&self) -> &str {
        effective(&self.key_value_separator, DEFAULT_KEY_VALUE_SEPARATOR)
    }
}

fn effective<'a>(separator: &'a Option<String>, default: &'static str) -> &'a str {
    separator
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
/// The key/value pairs extracted from a connection string.
///
/// Keys are unique: when a key appears more than once, the last occurrence wins.
/// No schema is enforced on the keys; use [`ParsedConfiguration::deserialize_into`] to
/// validate the entries against a typed model.
pub struct ParsedConfiguration(HashMap<String, String>);

impl ParsedConfiguration {
    /// Lookup the value associated with `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.0
    }

    /// Join the entries back into a connection string using the separators in `options`.
    ///
    /// Entries are emitted in key order, so the output is deterministic.
    /// Parsing the output with the same `options` yields an equal `ParsedConfiguration`
    /// as long as no key or value contains one of the separators.
    pub fn to_connection_string(&self, options: &ParseOptions) -> String {
        let key_value_separator = options.key_value_separator();
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable();
        entries
            .into_iter()
            .map(|(key, value)| format!("{key}{key_value_separator}{value}"))
            .collect::<Vec<_>>()
            .join(options.entity_separator())
    }

    /// Validate the entries against a typed model.
    ///
    /// All values are handed to `T` as strings: numeric or boolean fields need a lenient
    /// deserializer (e.g. those provided by `serde_aux::field_attributes`).
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let object: serde_json::Map<String, serde_json::Value> = self
            .0
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect();
        let parsed = serde_json::from_value(serde_json::Value::Object(object))
            .context("The connection string does not match the expected schema.")?;
        Ok(parsed)
    }
}

impl From<ParsedConfiguration> for HashMap<String, String> {
    fn from(value: ParsedConfiguration) -> Self {
        value.0
    }
}

impl FromStr for ParsedConfiguration {
    type Err = Error;

    /// Parse using the default separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_connection_string(s, None)
    }
}

/// Split a connection string into its key/value pairs.
///
/// The input is split on every occurrence of the entity separator. Each segment is then split
/// on the *first* occurrence of the key/value separator: the value keeps any further
/// occurrences. A segment without a key/value separator is stored as a key with an empty value,
/// which means that an empty connection string yields a single `"" -> ""` entry.
///
/// Malformed segments never cause a failure. The only error is a missing connection string,
/// reported as [`Error::InvalidArgument`].
///
/// ```rust
/// use amqp_connection_core::amqp::connection_string::{parse_connection_string, ParseOptions};
///
/// let parsed = parse_connection_string("Endpoint=sb://a.b/;EntityPath=q=1", None).unwrap();
/// assert_eq!(parsed.get("Endpoint"), Some("sb://a.b/"));
/// assert_eq!(parsed.get("EntityPath"), Some("q=1"));
///
/// let options = ParseOptions::default()
///     .with_entity_separator("|")
///     .with_key_value_separator(":");
/// let parsed = parse_connection_string("a:1|b:2", Some(&options)).unwrap();
/// assert_eq!(parsed.get("b"), Some("2"));
///
/// assert!(parse_connection_string(None::<&str>, None).is_err());
/// ```
pub fn parse_connection_string<'a, S>(
    connection_string: S,
    options: Option<&ParseOptions>,
) -> Result<ParsedConfiguration, Error>
where
    S: Into<Option<&'a str>>,
{
    let connection_string = connection_string
        .into()
        .ok_or_else(|| Error::invalid_argument("'connection_string' is a required parameter."))?;
    let default_options = ParseOptions::default();
    let options = options.unwrap_or(&default_options);
    let entity_separator = options.entity_separator();
    let key_value_separator = options.key_value_separator();

    let mut entries = HashMap::new();
    for segment in connection_string.split(entity_separator) {
        let (key, value) = match segment.split_once(key_value_separator) {
            Some(pair) => pair,
            None => {
                trace!("Connection string segment without a key/value separator");
                (segment, "")
            }
        };
        if entries.insert(key.to_owned(), value.to_owned()).is_some() {
            debug!(key, "Duplicate key in connection string, keeping the last value");
        }
    }
    Ok(ParsedConfiguration(entries))
}
