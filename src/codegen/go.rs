use std::collections::BTreeSet;

use super::max_width;
use crate::ir::{BaseType, ColumnSchema, TableSchema};
use crate::naming::to_pascal_case;
use crate::typemap;

/// Go type for a column: wrapped in a `database/sql` null type when nullable.
pub fn go_type(col: &ColumnSchema) -> String {
    let plain = match col.base() {
        BaseType::Integer if col.parsed_type.unsigned => "uint64",
        base => typemap::GO.lookup(base),
    };
    if !col.nullable {
        return plain.to_string();
    }
    match typemap::GO_NULLABLE.lookup(col.base()) {
        "" => format!("*{}", plain),
        wrapper => wrapper.to_string(),
    }
}

pub fn generate_structs(tables: &[TableSchema], package: &str) -> String {
    let structs: Vec<(String, Vec<String>)> = tables
        .iter()
        .map(|t| {
            let types = t.columns.iter().map(go_type).collect::<Vec<_>>();
            (generate_struct(t, &types), types)
        })
        .collect();

    let mut imports = BTreeSet::new();
    for ty in structs.iter().flat_map(|(_, types)| types) {
        if ty.contains("sql.") {
            imports.insert("database/sql");
        }
        if ty.contains("time.") {
            imports.insert("time");
        }
        if ty.contains("json.") {
            imports.insert("encoding/json");
        }
    }

    let mut out = format!("package {}\n\n", package);
    let imports: Vec<&str> = imports.into_iter().collect();
    match imports.as_slice() {
        [] => {}
        [only] => out.push_str(&format!("import \"{}\"\n\n", only)),
        many => {
            out.push_str("import (\n");
            for import in many {
                out.push_str(&format!("\t\"{}\"\n", import));
            }
            out.push_str(")\n\n");
        }
    }
    out.push_str(
        &structs
            .into_iter()
            .map(|(s, _)| s)
            .collect::<Vec<_>>()
            .join("\n\n"),
    );
    out.push('\n');
    out
}

fn generate_struct(table: &TableSchema, types: &[String]) -> String {
    let names: Vec<String> = table.columns.iter().map(|c| to_pascal_case(&c.name)).collect();
    let name_width = max_width(names.iter().map(String::as_str));
    let type_width = max_width(types.iter().map(String::as_str));

    let mut out = format!("type {} struct {{\n", to_pascal_case(&table.name));
    for ((col, name), ty) in table.columns.iter().zip(&names).zip(types) {
        out.push_str(&format!(
            "\t{:<nw$} {:<tw$} `db:\"{}\" json:\"{}\"`\n",
            name,
            ty,
            col.name,
            col.name,
            nw = name_width,
            tw = type_width
        ));
    }
    out.push('}');
    out
}
