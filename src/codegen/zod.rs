use super::typescript::property_name;
use crate::ir::TableSchema;
use crate::naming::to_pascal_case;
use crate::typemap;

pub fn generate_zod_schemas(tables: &[TableSchema]) -> String {
    let mut out = String::from("import { z } from 'zod';\n\n");
    out.push_str(
        &tables
            .iter()
            .map(generate_schema)
            .collect::<Vec<_>>()
            .join("\n\n"),
    );
    out
}

pub fn generate_schema(table: &TableSchema) -> String {
    let type_name = to_pascal_case(&table.name);
    let schema_name = format!("{}Schema", type_name);

    let mut out = format!("export const {} = z.object({{\n", schema_name);
    for col in &table.columns {
        let mut expr = typemap::ZOD.lookup(col.base()).to_string();
        if col.nullable {
            expr.push_str(".nullable()");
        }
        out.push_str(&format!("  {}: {},\n", property_name(&col.name), expr));
    }
    out.push_str("});\n\n");
    out.push_str(&format!(
        "export type {} = z.infer<typeof {}>;",
        type_name, schema_name
    ));
    out
}
