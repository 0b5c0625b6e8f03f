use super::{is_numeric_literal, max_width, resolved_relations};
use crate::ir::{BaseType, ColumnSchema, KeyKind, TableSchema};
use crate::naming::{to_camel_case, to_pascal_case};
use crate::typemap;

pub fn generate_prisma_schema(tables: &[TableSchema]) -> String {
    tables
        .iter()
        .map(|t| generate_model(t, tables))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn scalar_type(col: &ColumnSchema) -> &'static str {
    let p = &col.parsed_type;
    match col.base() {
        BaseType::Integer if matches!(p.token.as_str(), "bigint" | "bigserial") => "BigInt",
        BaseType::Float if p.is_decimal() => "Decimal",
        base => typemap::PRISMA.lookup(base),
    }
}

fn attributes(col: &ColumnSchema) -> Vec<String> {
    let mut attrs = Vec::new();
    if col.key == KeyKind::Primary {
        attrs.push("@id".to_string());
    }
    if col.key == KeyKind::Unique {
        attrs.push("@unique".to_string());
    }
    if col.auto_increment {
        attrs.push("@default(autoincrement())".to_string());
    } else if col.defaults_to_current_timestamp() {
        attrs.push("@default(now())".to_string());
    } else if let Some(default) = &col.default_value {
        let value = default.trim();
        match col.base() {
            BaseType::Integer | BaseType::Float if is_numeric_literal(value) => {
                attrs.push(format!("@default({})", value));
            }
            BaseType::Boolean => match value.to_ascii_lowercase().as_str() {
                "1" | "true" => attrs.push("@default(true)".to_string()),
                "0" | "false" => attrs.push("@default(false)".to_string()),
                _ => {}
            },
            BaseType::Text => attrs.push(format!(
                "@default(\"{}\")",
                default.replace('\\', "\\\\").replace('"', "\\\"")
            )),
            _ => {}
        }
    }
    if col.parsed_type.token == "varchar" {
        if let Some(len) = col.parsed_type.length {
            attrs.push(format!("@db.VarChar({})", len));
        }
    }
    attrs
}

fn generate_model(table: &TableSchema, tables: &[TableSchema]) -> String {
    // (name, type, attributes)
    let mut fields: Vec<(String, String, String)> = table
        .columns
        .iter()
        .map(|col| {
            let ty = format!("{}{}", scalar_type(col), if col.nullable { "?" } else { "" });
            (col.name.clone(), ty, attributes(col).join(" "))
        })
        .collect();

    for rel in resolved_relations(table, tables) {
        let base = rel
            .source_column
            .strip_suffix("_id")
            .filter(|s| !s.is_empty())
            .unwrap_or(rel.referenced_table.as_str());
        let mut field = to_camel_case(base);
        while fields.iter().any(|(name, _, _)| *name == field) {
            field.push_str("Rel");
        }
        let optional = table
            .column(&rel.source_column)
            .map(|c| c.nullable)
            .unwrap_or(false);
        let ty = format!(
            "{}{}",
            to_pascal_case(&rel.referenced_table),
            if optional { "?" } else { "" }
        );
        let attr = format!(
            "@relation(fields: [{}], references: [{}], onDelete: Cascade)",
            rel.source_column, rel.referenced_column
        );
        fields.push((field, ty, attr));
    }

    let name_width = max_width(fields.iter().map(|(n, _, _)| n.as_str()));
    let type_width = max_width(fields.iter().map(|(_, t, _)| t.as_str()));

    let model_name = to_pascal_case(&table.name);
    let mut out = format!("model {} {{\n", model_name);
    for (name, ty, attrs) in &fields {
        let line = if attrs.is_empty() {
            format!("  {:<nw$} {}", name, ty, nw = name_width)
        } else {
            format!(
                "  {:<nw$} {:<tw$} {}",
                name,
                ty,
                attrs,
                nw = name_width,
                tw = type_width
            )
        };
        out.push_str(line.trim_end());
        out.push('\n');
    }
    if model_name != table.name {
        out.push_str(&format!("\n  @@map(\"{}\")\n", table.name));
    }
    out.push('}');
    out
}
