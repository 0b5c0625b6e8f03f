//! Structural interchange: the IR itself as pretty-printed JSON.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;
use crate::ir::TableSchema;

pub fn generate_interchange(tables: &[TableSchema]) -> String {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    // The IR has only string map keys and the sink is a Vec.
    tables
        .serialize(&mut ser)
        .expect("table schemas serialize to JSON");
    String::from_utf8(buf).expect("serde_json emits UTF-8")
}

/// Read back a document produced by [`generate_interchange`].
pub fn parse_interchange(text: &str) -> Result<Vec<TableSchema>> {
    Ok(serde_json::from_str(text)?)
}
