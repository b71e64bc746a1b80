//! # sbconn
//!
//! Parser and immutable model for Service Bus style connection strings.
//!
//! This crate provides:
//! - A tolerant tokenizer for `key=value;key=value` connection strings
//! - Typed, defaulted accessors over the parsed fields
//! - Lossless re-serialization, with or without the `EntityPath` field
//! - A case-insensitive field presence/value query
//!
//! ## Example
//!
//! ```rust
//! use sbconn::ConnectionString;
//!
//! # fn main() -> Result<(), sbconn::ConnStringError> {
//! let conn = ConnectionString::parse(
//!     "Endpoint=sb://ns.example.com/;SharedAccessKeyName=root;SharedAccessKey=abc=",
//! )?;
//!
//! assert_eq!(conn.endpoint()?, "sb://ns.example.com");
//! assert_eq!(conn.shared_access_key()?, "abc=");
//! assert!(conn.entity_path().is_none());
//! # Ok(())
//! # }
//! ```

pub mod connection_string;
pub mod error;
pub mod transport;

pub use connection_string::{Comparison, ConnectionString};
pub use error::{ConnStringError, ConnStringResult};
pub use transport::TransportType;
