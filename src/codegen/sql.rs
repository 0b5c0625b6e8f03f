use super::is_numeric_literal;
use crate::ir::{BaseType, ColumnSchema, KeyKind, TableSchema};

/// MySQL `CREATE TABLE` statements for every table.
pub fn generate_ddl(tables: &[TableSchema]) -> String {
    tables
        .iter()
        .map(create_table)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn create_table(table: &TableSchema) -> String {
    let mut lines: Vec<String> = table.columns.iter().map(column_definition).collect();

    // Every foreign key cascades on delete, whatever the live constraint says.
    for rel in &table.relations {
        lines.push(format!(
            "  CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {}({}) ON DELETE CASCADE",
            quote_ident(&format!("fk_{}_{}", table.name, rel.source_column)),
            quote_ident(&rel.source_column),
            quote_ident(&rel.referenced_table),
            quote_ident(&rel.referenced_column),
        ));
    }

    let mut out = format!("CREATE TABLE {} (\n", quote_ident(&table.name));
    out.push_str(&lines.join(",\n"));
    out.push_str("\n);");
    out
}

fn column_definition(col: &ColumnSchema) -> String {
    let mut line = format!("  {} {}", quote_ident(&col.name), native_type(col));
    line.push_str(if col.nullable { " NULL" } else { " NOT NULL" });
    if let Some(default) = &col.default_value {
        line.push_str(&format!(" DEFAULT {}", default_literal(default)));
    }
    if col.auto_increment {
        line.push_str(" AUTO_INCREMENT");
    }
    for flag in &col.extra_flags {
        if flag.to_ascii_lowercase().starts_with("on update") {
            line.push(' ');
            line.push_str(&flag.to_ascii_uppercase());
        }
    }
    match col.key {
        KeyKind::Primary => line.push_str(" PRIMARY KEY"),
        KeyKind::Unique => line.push_str(" UNIQUE"),
        KeyKind::Multi | KeyKind::None => {}
    }
    line
}

fn native_type(col: &ColumnSchema) -> String {
    if col.base() == BaseType::Unknown || col.parsed_type.is_enumerated() {
        col.raw_type.trim().to_string()
    } else {
        col.parsed_type.native()
    }
}

fn quote_ident(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Keywords and numbers are emitted as-is, other function calls as a
/// parenthesised expression default; anything else is a quoted string literal.
fn default_literal(value: &str) -> String {
    let trimmed = value.trim();
    let upper = trimmed.to_ascii_uppercase();
    let is_keyword = matches!(
        upper.as_str(),
        "NULL" | "TRUE" | "FALSE" | "CURRENT_TIMESTAMP" | "CURRENT_DATE" | "CURRENT_TIME" | "NOW()"
    ) || upper.starts_with("CURRENT_TIMESTAMP(");
    let is_call = trimmed.ends_with(')') && trimmed.contains('(') && !trimmed.contains(' ');
    if is_keyword || is_numeric_literal(trimmed) {
        trimmed.to_string()
    } else if is_call {
        format!("({})", trimmed)
    } else {
        format!("'{}'", value.replace('\'', "''"))
    }
}
