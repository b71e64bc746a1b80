//! Integration tests for connection string parsing and re-serialization.
//!
//! These tests exercise the public API end to end: parse a raw string, read
//! the typed fields, and serialize back out.

use pretty_assertions::assert_eq;
use sbconn::{Comparison, ConnStringError, ConnectionString, TransportType};

/// Test a complete entity-level connection string end to end
#[test]
fn test_entity_connection_string() {
    let raw = "Endpoint=sb://ns.example.com/;\
               SharedAccessKeyName=RootManageSharedAccessKey;\
               SharedAccessKey=gO5JVhys=;\
               EntityPath=orders;\
               TransportType=AmqpWebSockets";

    let conn = ConnectionString::parse(raw).expect("Failed to parse connection string");

    assert_eq!(conn.endpoint().unwrap(), "sb://ns.example.com");
    assert_eq!(
        conn.shared_access_key_name().unwrap(),
        "RootManageSharedAccessKey"
    );
    assert_eq!(conn.shared_access_key().unwrap(), "gO5JVhys=");
    assert_eq!(conn.entity_path(), Some("orders"));
    assert_eq!(conn.transport().unwrap(), TransportType::AmqpWebSockets);
    assert!(!conn.use_development_emulator());
    assert_eq!(conn.raw(), Some(raw));
}

/// Test a namespace-level string: optional fields fall back to their defaults
#[test]
fn test_namespace_connection_string_defaults() {
    let conn =
        ConnectionString::parse("Endpoint=sb://ns.example.com;SharedAccessKeyName=n;SharedAccessKey=k")
            .expect("Failed to parse connection string");

    assert_eq!(conn.entity_path(), None);
    assert_eq!(conn.transport().unwrap(), TransportType::AmqpTcp);
    assert!(!conn.use_development_emulator());
}

/// Test the emulator flag against an emulator-style string
#[test]
fn test_emulator_connection_string() {
    let conn = ConnectionString::parse(
        "Endpoint=sb://127.0.0.1;SharedAccessKeyName=n;SharedAccessKey=k;UseDevelopmentEmulator=true",
    )
    .expect("Failed to parse connection string");

    assert!(conn.use_development_emulator());
    assert!(conn.contains("UseDevelopmentEmulator", "true", Comparison::Exact));
    assert!(conn.contains("usedevelopmentemulator", "TRUE", Comparison::IgnoreAsciiCase));
}

/// Test that serialization round-trips through a re-parse
#[test]
fn test_round_trip() {
    let raw = "Endpoint=sb://ns.example.com/;SharedAccessKeyName=n;SharedAccessKey=abc=123=;EntityPath=orders";
    let conn = ConnectionString::parse(raw).expect("Failed to parse connection string");
    let reparsed = ConnectionString::parse(&conn.to_connection_string())
        .expect("Failed to re-parse serialized string");

    assert_eq!(reparsed, ConnectionString::parse(raw).unwrap());
    assert_eq!(reparsed.to_connection_string(), raw);
}

/// Test that blank tokens are normalized away but fields survive
#[test]
fn test_round_trip_normalizes_blank_tokens() {
    let conn = ConnectionString::parse("Endpoint=e;;SharedAccessKeyName=n; ;SharedAccessKey=k;")
        .expect("Failed to parse connection string");

    assert_eq!(
        conn.to_connection_string(),
        "Endpoint=e;SharedAccessKeyName=n;SharedAccessKey=k"
    );
}

/// Test stripping the entity path for namespace-level consumers
#[test]
fn test_without_entity_path() {
    let conn = ConnectionString::parse("Endpoint=e;EntityPath=orders;SharedAccessKey=k")
        .expect("Failed to parse connection string");

    assert_eq!(
        conn.to_connection_string_without_entity_path(),
        "Endpoint=e;SharedAccessKey=k"
    );

    // Idempotent once the field is gone.
    let stripped = ConnectionString::parse(&conn.to_connection_string_without_entity_path())
        .expect("Failed to re-parse stripped string");
    assert_eq!(
        stripped.to_connection_string_without_entity_path(),
        stripped.to_connection_string()
    );
}

/// Test the discrete-parts constructor against the parse path
#[test]
fn test_from_parts_matches_parsed_equivalent() {
    let built = ConnectionString::from_parts(
        "sb://ns.example.com",
        "root",
        "secret",
        Some("orders".to_string()),
    );
    let parsed = ConnectionString::parse(
        "Endpoint=sb://ns.example.com;SharedAccessKeyName=root;SharedAccessKey=secret;EntityPath=orders",
    )
    .expect("Failed to parse connection string");

    assert_eq!(built.to_connection_string(), parsed.to_connection_string());
    assert_eq!(built.raw(), None);
}

/// Test that errors carry the offending text
#[test]
fn test_error_messages() {
    let err = ConnectionString::parse("Endpoint=e;garbage").unwrap_err();
    assert_eq!(
        err.to_string(),
        "could not interpret 'garbage' as a key-value pair"
    );

    let conn = ConnectionString::parse("Endpoint=e;TransportType=Udp").unwrap();
    assert_eq!(
        conn.transport().unwrap_err(),
        ConnStringError::UnknownTransport {
            value: "Udp".to_string()
        }
    );

    let empty = ConnectionString::parse("EntityPath=orders").unwrap();
    assert_eq!(
        empty.endpoint().unwrap_err().to_string(),
        "connection string has no `Endpoint` field"
    );
}
