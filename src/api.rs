//! Boundary operations: parse, extended parse, serialize, merge, trim and validate.
//!
//! The typed operations work on [`Document`] values. `merge_json` and
//! `trim_json` accept arbitrary JSON, as documents are usually exchanged with
//! other tools, and reject anything that is not a sequence of nodes.

use crate::ast::Document;
use crate::error::WppError;
use crate::parser::Parser;
use crate::serialization::{json_kind, serialize, Mode};
use serde_json::Value;

pub use crate::merge::{merge, trim};
pub use crate::parser::{parse, parse_extended};

/// Parses `source`, naming it `file_name` in diagnostics.
///
/// # Errors
/// Fails with any parser error kind.
pub fn parse_named(source: &str, file_name: &str) -> Result<Document, WppError> {
    Parser::new_with_name(source, file_name).parse_document()
}

/// Re-derives the canonical form of `document` by rendering it in
/// [`Mode::Normal`] and parsing the result.
///
/// # Errors
/// Propagates any parser error, which means the document cannot be
/// expressed in the notation (for example a value containing `)`).
pub fn validate(document: &Document) -> Result<Document, WppError> {
    parse(&serialize(document, Mode::Normal))
}

/// [`merge`] over JSON documents. `null` and `[]` count as empty, and an
/// empty side yields a copy of the other without further checks.
///
/// # Errors
/// Returns [`WppError::NotWpp`] when either operand is not a node sequence.
pub fn merge_json(acceptor: &Value, donor: &Value) -> Result<Value, WppError> {
    match (is_empty_json(acceptor), is_empty_json(donor)) {
        (true, true) => return Ok(Value::Array(Vec::new())),
        (true, false) => return Ok(donor.clone()),
        (false, true) => return Ok(acceptor.clone()),
        (false, false) => {}
    }

    let acceptor = Document::from_json_value(acceptor)?;
    let donor = Document::from_json_value(donor)?;
    to_json_value(&merge(&acceptor, &donor))
}

/// [`trim`] over a JSON document.
///
/// # Errors
/// Returns [`WppError::NotWpp`] when `document` is not an array of nodes.
pub fn trim_json(document: &Value) -> Result<Value, WppError> {
    if !document.is_array() {
        return Err(WppError::NotWpp {
            found: json_kind(document).to_string(),
        });
    }
    let document = Document::from_json_value(document)?;
    to_json_value(&trim(&document))
}

fn is_empty_json(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn to_json_value(document: &Document) -> Result<Value, WppError> {
    serde_json::to_value(document).map_err(|err| WppError::NotWpp {
        found: format!("a document that cannot be encoded ({err})"),
    })
}
