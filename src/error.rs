//! Error types for connection string parsing and field access.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for connection string operations.
pub type ConnStringResult<T> = Result<T, ConnStringError>;

/// Errors that can occur while parsing a connection string or reading its
/// typed fields.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ConnStringError {
    /// A non-blank token between `;` separators has no `=` in it.
    #[error("could not interpret '{token}' as a key-value pair")]
    #[diagnostic(code(sbconn::malformed_token))]
    MalformedToken { token: String },

    /// A required field was read but is absent from the mapping.
    #[error("connection string has no `{name}` field")]
    #[diagnostic(code(sbconn::missing_field))]
    MissingField { name: &'static str },

    /// The `TransportType` field does not name a known transport.
    #[error("unrecognized transport type `{value}`")]
    #[diagnostic(code(sbconn::unknown_transport))]
    UnknownTransport { value: String },
}
