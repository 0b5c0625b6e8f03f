use std::collections::HashSet;

use super::resolved_relations;
use crate::ir::{ColumnSchema, KeyKind, TableSchema};

/// Mermaid `erDiagram` with one relation line per pair of related tables.
pub fn generate_erd(tables: &[TableSchema]) -> String {
    let mut lines = vec!["erDiagram".to_string()];

    for table in tables {
        lines.push(format!("    {} {{", table.name));
        for col in &table.columns {
            let mut line = format!("        {} {}", attribute_type(col), col.name);
            let pk = col.key == KeyKind::Primary;
            let fk = col.key == KeyKind::Multi || table.is_relation_source(&col.name);
            match (pk, fk) {
                (true, true) => line.push_str(" PK, FK"),
                (true, false) => line.push_str(" PK"),
                (false, true) => line.push_str(" FK"),
                (false, false) => {}
            }
            lines.push(line);
        }
        lines.push("    }".to_string());
    }

    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    for table in tables {
        for rel in resolved_relations(table, tables) {
            let (a, b) = (table.name.as_str(), rel.referenced_table.as_str());
            let pair = if a <= b { (a, b) } else { (b, a) };
            if seen.insert(pair) {
                lines.push(format!(
                    "    {} ||--o{{ {} : \"{}\"",
                    rel.referenced_table, table.name, rel.source_column
                ));
            }
        }
    }

    lines.join("\n")
}

/// Bare type name without arguments; Mermaid attribute types cannot contain spaces.
fn attribute_type(col: &ColumnSchema) -> String {
    if !col.parsed_type.token.is_empty() {
        return col.parsed_type.token.clone();
    }
    let stripped = col.raw_type.split('(').next().unwrap_or_default().trim();
    if stripped.is_empty() {
        "unknown".to_string()
    } else {
        stripped.split_whitespace().collect::<Vec<_>>().join("_")
    }
}
