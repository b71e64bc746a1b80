//! The connection string model: parsing, typed accessors, and serialization.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use smol_str::SmolStr;
use tracing::debug;

use crate::error::{ConnStringError, ConnStringResult};
use crate::transport::TransportType;

const ENDPOINT: &str = "Endpoint";
const SHARED_ACCESS_KEY_NAME: &str = "SharedAccessKeyName";
const SHARED_ACCESS_KEY: &str = "SharedAccessKey";
const ENTITY_PATH: &str = "EntityPath";
const TRANSPORT_TYPE: &str = "TransportType";
const USE_DEVELOPMENT_EMULATOR: &str = "UseDevelopmentEmulator";

/// How [`ConnectionString::contains`] compares field names and values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Exact, case-sensitive comparison.
    Exact,
    /// ASCII case-insensitive comparison.
    IgnoreAsciiCase,
}

impl Comparison {
    fn matches(self, a: &str, b: &str) -> bool {
        match self {
            Self::Exact => a == b,
            Self::IgnoreAsciiCase => a.eq_ignore_ascii_case(b),
        }
    }
}

/// An immutable, order-preserving model of a messaging connection string.
///
/// Built either from discrete fields ([`ConnectionString::from_parts`]) or by
/// tokenizing a raw `key=value;key=value` string ([`ConnectionString::parse`]).
/// Unknown field names are preserved verbatim through re-serialization but
/// never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionString {
    /// Field name to field value, in insertion order. Never mutated after
    /// construction.
    fields: IndexMap<SmolStr, String>,
    /// The raw source string, retained only when constructed by `parse`.
    raw: Option<String>,
}

impl ConnectionString {
    /// Build a connection string from its discrete parts.
    ///
    /// Values are taken verbatim; nothing is trimmed or validated here.
    /// `entity_path = None` means "no sub-resource" and leaves the
    /// `EntityPath` field absent from the mapping.
    pub fn from_parts(
        endpoint: impl Into<String>,
        shared_access_key_name: impl Into<String>,
        shared_access_key: impl Into<String>,
        entity_path: Option<String>,
    ) -> Self {
        let mut fields = IndexMap::new();
        fields.insert(SmolStr::new(ENDPOINT), endpoint.into());
        fields.insert(
            SmolStr::new(SHARED_ACCESS_KEY_NAME),
            shared_access_key_name.into(),
        );
        fields.insert(SmolStr::new(SHARED_ACCESS_KEY), shared_access_key.into());
        if let Some(path) = entity_path {
            fields.insert(SmolStr::new(ENTITY_PATH), path);
        }
        Self { fields, raw: None }
    }

    /// Parse a raw connection string into a field mapping.
    ///
    /// Tokens are separated by `;`; each token is trimmed as a whole and
    /// blank tokens are dropped, so trailing or doubled separators are
    /// tolerated. A token splits at its *first* `=` only — values may contain
    /// further `=` characters (base64 secrets do). Key and value sub-parts
    /// are kept verbatim. A duplicate key keeps its first-seen position and
    /// takes the last value written.
    ///
    /// Field values are not validated here; a required field that is absent
    /// only errors when its typed accessor is read.
    ///
    /// # Errors
    ///
    /// [`ConnStringError::MalformedToken`] when a non-blank token has no `=`.
    pub fn parse(raw: &str) -> ConnStringResult<Self> {
        let mut fields = IndexMap::new();

        for token in raw.split(';') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }

            let Some(index) = token.find('=') else {
                return Err(ConnStringError::MalformedToken {
                    token: token.to_string(),
                });
            };

            fields.insert(
                SmolStr::new(&token[..index]),
                token[index + 1..].to_string(),
            );
        }

        debug!(fields = fields.len(), "parsed connection string");

        Ok(Self {
            fields,
            raw: Some(raw.to_string()),
        })
    }

    /// The raw source string, if this model was constructed by [`parse`].
    ///
    /// [`parse`]: ConnectionString::parse
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Read any field by exact-case name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    fn required(&self, name: &'static str) -> ConnStringResult<&str> {
        self.field(name)
            .ok_or(ConnStringError::MissingField { name })
    }

    /// Whether the string opts in to the local development emulator.
    ///
    /// True only for the exact value `"true"`; any other value, or an absent
    /// field, reads as false.
    pub fn use_development_emulator(&self) -> bool {
        self.field(USE_DEVELOPMENT_EMULATOR)
            .is_some_and(|value| value == "true")
    }

    /// The endpoint authority, with trailing `/` characters stripped.
    ///
    /// # Errors
    ///
    /// [`ConnStringError::MissingField`] when the `Endpoint` field is absent.
    pub fn endpoint(&self) -> ConnStringResult<&str> {
        Ok(self.required(ENDPOINT)?.trim_end_matches('/'))
    }

    /// The shared access key name (identity).
    ///
    /// # Errors
    ///
    /// [`ConnStringError::MissingField`] when the field is absent.
    pub fn shared_access_key_name(&self) -> ConnStringResult<&str> {
        self.required(SHARED_ACCESS_KEY_NAME)
    }

    /// The shared access key (secret), verbatim.
    ///
    /// # Errors
    ///
    /// [`ConnStringError::MissingField`] when the field is absent.
    pub fn shared_access_key(&self) -> ConnStringResult<&str> {
        self.required(SHARED_ACCESS_KEY)
    }

    /// The optional entity path, or `None` when the string is
    /// namespace-level.
    pub fn entity_path(&self) -> Option<&str> {
        self.field(ENTITY_PATH)
    }

    /// The transport mode, defaulting to [`TransportType::AmqpTcp`] when the
    /// `TransportType` field is absent.
    ///
    /// # Errors
    ///
    /// [`ConnStringError::UnknownTransport`] when the field is present but
    /// does not name a known transport.
    pub fn transport(&self) -> ConnStringResult<TransportType> {
        match self.field(TRANSPORT_TYPE) {
            None => Ok(TransportType::default()),
            Some(value) => {
                TransportType::from_str(value).ok_or_else(|| ConnStringError::UnknownTransport {
                    value: value.to_string(),
                })
            }
        }
    }

    /// Check whether any field has the given name and value under the given
    /// comparison mode.
    pub fn contains(&self, name: &str, value: &str, comparison: Comparison) -> bool {
        self.fields
            .iter()
            .any(|(k, v)| comparison.matches(k.as_str(), name) && comparison.matches(v, value))
    }

    /// Serialize every field back to `key=value;key=value` form, in
    /// insertion order.
    pub fn to_connection_string(&self) -> String {
        self.join_fields(|_| true)
    }

    /// Serialize every field except `EntityPath`, for APIs that only accept a
    /// namespace-level connection string. Identical to
    /// [`to_connection_string`] when the field is absent.
    ///
    /// [`to_connection_string`]: ConnectionString::to_connection_string
    pub fn to_connection_string_without_entity_path(&self) -> String {
        self.join_fields(|key| key != ENTITY_PATH)
    }

    fn join_fields(&self, keep: impl Fn(&str) -> bool) -> String {
        self.fields
            .iter()
            .filter(|(key, _)| keep(key.as_str()))
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl FromStr for ConnectionString {
    type Err = ConnStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Human-readable rendering for logs and debugging: the raw source string
/// (blank when built from discrete parts), then the principal fields
/// right-aligned under fixed labels. Missing fields render empty rather than
/// erroring.
impl fmt::Display for ConnectionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let endpoint = self.field(ENDPOINT).unwrap_or_default().trim_end_matches('/');
        let key_name = self.field(SHARED_ACCESS_KEY_NAME).unwrap_or_default();
        let key = self.field(SHARED_ACCESS_KEY).unwrap_or_default();

        writeln!(f, "{}", self.raw.as_deref().unwrap_or_default())?;
        writeln!(f, "           Endpoint: {endpoint}")?;
        writeln!(f, "SharedAccessKeyName: {key_name}")?;
        write!(f, "    SharedAccessKey: {key}")
    }
}
