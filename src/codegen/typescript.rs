use crate::ir::TableSchema;
use crate::naming::to_pascal_case;
use crate::typemap;

pub fn generate_interfaces(tables: &[TableSchema]) -> String {
    tables
        .iter()
        .map(generate_interface)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn generate_interface(table: &TableSchema) -> String {
    let mut out = format!("export interface {} {{\n", to_pascal_case(&table.name));
    for col in &table.columns {
        let ty = typemap::TYPESCRIPT.lookup(col.base());
        if col.nullable {
            out.push_str(&format!("    {}: {} | null;\n", property_name(&col.name), ty));
        } else {
            out.push_str(&format!("    {}: {};\n", property_name(&col.name), ty));
        }
    }
    out.push('}');
    out
}

/// Column names that are not valid identifiers are emitted as string keys.
pub(crate) fn property_name(name: &str) -> String {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    };
    if valid {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}
