//! Laravel schema-builder migrations and Eloquent models.

use super::is_numeric_literal;
use crate::ir::{
    is_timestamp_column, BaseType, ColumnSchema, KeyKind, TableSchema, CREATED_AT, DELETED_AT,
    UPDATED_AT,
};
use crate::naming::{to_camel_case, to_pascal_case};

const INDENT: &str = "            ";

pub fn generate_migrations(tables: &[TableSchema]) -> String {
    tables
        .iter()
        .map(generate_migration)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn generate_migration(table: &TableSchema) -> String {
    let has_timestamps = table.has_column(CREATED_AT) && table.has_column(UPDATED_AT);
    let has_soft_deletes = table.has_column(DELETED_AT);

    let mut body: Vec<String> = table
        .columns
        .iter()
        .filter(|c| !is_timestamp_column(&c.name))
        .map(|c| format!("{}$table->{};", INDENT, column_definition(c)))
        .collect();
    for rel in &table.relations {
        body.push(format!(
            "{}$table->foreign('{}')->references('{}')->on('{}')->onDelete('cascade');",
            INDENT,
            php_escape(&rel.source_column),
            php_escape(&rel.referenced_column),
            php_escape(&rel.referenced_table),
        ));
    }
    if has_timestamps {
        body.push(format!("{}$table->timestamps();", INDENT));
    }
    if has_soft_deletes {
        body.push(format!("{}$table->softDeletes();", INDENT));
    }

    let name = php_escape(&table.name);
    let mut lines = vec![
        "<?php".to_string(),
        String::new(),
        "use Illuminate\\Database\\Migrations\\Migration;".to_string(),
        "use Illuminate\\Database\\Schema\\Blueprint;".to_string(),
        "use Illuminate\\Support\\Facades\\Schema;".to_string(),
        String::new(),
        "return new class extends Migration".to_string(),
        "{".to_string(),
        "    /**".to_string(),
        "     * Run the migrations.".to_string(),
        "     */".to_string(),
        "    public function up(): void".to_string(),
        "    {".to_string(),
        format!("        Schema::create('{}', function (Blueprint $table) {{", name),
    ];
    lines.extend(body);
    lines.extend([
        "        });".to_string(),
        "    }".to_string(),
        String::new(),
        "    /**".to_string(),
        "     * Reverse the migrations.".to_string(),
        "     */".to_string(),
        "    public function down(): void".to_string(),
        "    {".to_string(),
        format!("        Schema::dropIfExists('{}');", name),
        "    }".to_string(),
        "};".to_string(),
    ]);
    lines.join("\n")
}

/// Column method plus modifiers, e.g. `string('email', 255)->unique()`.
fn column_definition(col: &ColumnSchema) -> String {
    let mut out = column_method(col);
    if col.auto_increment && !col.is_primary() {
        out.push_str("->autoIncrement()");
    }
    if col.nullable {
        out.push_str("->nullable()");
    }
    if let Some(default) = &col.default_value {
        if col.defaults_to_current_timestamp() {
            out.push_str("->useCurrent()");
        } else if (col.base().is_numeric() || col.base() == BaseType::Boolean)
            && is_numeric_literal(default.trim())
        {
            out.push_str(&format!("->default({})", default.trim()));
        } else {
            out.push_str(&format!("->default('{}')", php_escape(default)));
        }
    }
    if col.key == KeyKind::Unique {
        out.push_str("->unique()");
    }
    out
}

fn column_method(col: &ColumnSchema) -> String {
    let name = php_escape(&col.name);
    let p = &col.parsed_type;

    if col.auto_increment && col.is_primary() {
        return if col.name == "id" {
            "id()".to_string()
        } else {
            format!("id('{}')", name)
        };
    }

    let sized = |method: &str, size: Option<u32>| match size {
        Some(n) => format!("{}('{}', {})", method, name, n),
        None => format!("{}('{}')", method, name),
    };
    let integer = |method: &str| {
        if p.unsigned {
            format!("unsigned{}('{}')", to_pascal_case(method), name)
        } else {
            format!("{}('{}')", method, name)
        }
    };

    match (p.base, p.token.as_str()) {
        (BaseType::Boolean, _) => format!("boolean('{}')", name),
        (BaseType::Integer, "bigint" | "bigserial") => integer("bigInteger"),
        (BaseType::Integer, "smallint" | "smallserial") => integer("smallInteger"),
        (BaseType::Integer, "tinyint") => integer("tinyInteger"),
        (BaseType::Integer, "mediumint") => integer("mediumInteger"),
        (BaseType::Integer, _) => integer("integer"),
        (BaseType::Float, _) if p.is_decimal() => match (p.precision, p.scale) {
            (Some(precision), Some(scale)) => {
                format!("decimal('{}', {}, {})", name, precision, scale)
            }
            (Some(precision), None) => format!("decimal('{}', {})", name, precision),
            _ => format!("decimal('{}')", name),
        },
        (BaseType::Float, "double") => format!("double('{}')", name),
        (BaseType::Float, _) => format!("float('{}')", name),
        (BaseType::Text, "char" | "nchar") => sized("char", p.length),
        (BaseType::Text, "varchar" | "nvarchar" | "character") => {
            sized("string", Some(p.length.unwrap_or(255)))
        }
        (BaseType::Text, "tinytext") => format!("tinyText('{}')", name),
        (BaseType::Text, "mediumtext") => format!("mediumText('{}')", name),
        (BaseType::Text, "longtext") => format!("longText('{}')", name),
        (BaseType::Text, "text" | "citext") => format!("text('{}')", name),
        (BaseType::Text, "uuid") => format!("uuid('{}')", name),
        (BaseType::Temporal, "datetime" | "timestamp" | "timestamptz") => {
            format!("timestamp('{}')", name)
        }
        (BaseType::Temporal, "date") => format!("date('{}')", name),
        (BaseType::Temporal, "time" | "timetz") => format!("time('{}')", name),
        (BaseType::Temporal, "year") => format!("year('{}')", name),
        (BaseType::Json, _) => format!("json('{}')", name),
        (BaseType::Binary, _) => format!("binary('{}')", name),
        _ => format!("string('{}') /* {} */", name, col.raw_type.replace("*/", "* /")),
    }
}

pub fn generate_models(tables: &[TableSchema], namespace: &str) -> String {
    tables
        .iter()
        .map(|t| generate_model(t, namespace))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Columns that belong in `$fillable`.
pub fn fillable_columns(table: &TableSchema) -> Vec<&ColumnSchema> {
    table
        .columns
        .iter()
        .filter(|c| !c.auto_increment && !is_timestamp_column(&c.name))
        .collect()
}

/// `(column, cast)` pairs for JSON and boolean columns.
pub fn casts(table: &TableSchema) -> Vec<(&str, &'static str)> {
    table
        .columns
        .iter()
        .filter_map(|c| match c.base() {
            BaseType::Json => Some((c.name.as_str(), "array")),
            BaseType::Boolean => Some((c.name.as_str(), "boolean")),
            _ => None,
        })
        .collect()
}

pub fn generate_model(table: &TableSchema, namespace: &str) -> String {
    let class_name = to_pascal_case(&table.name);
    let soft_deletes = table.has_column(DELETED_AT);
    let timestamps = table.has_column(CREATED_AT) && table.has_column(UPDATED_AT);
    let primary: Vec<&ColumnSchema> = table.columns.iter().filter(|c| c.is_primary()).collect();

    let mut out = String::new();
    out.push_str("<?php\n\n");
    out.push_str(&format!("namespace {};\n\n", namespace));
    out.push_str("use Illuminate\\Database\\Eloquent\\Factories\\HasFactory;\n");
    out.push_str("use Illuminate\\Database\\Eloquent\\Model;\n");
    if !table.relations.is_empty() {
        out.push_str("use Illuminate\\Database\\Eloquent\\Relations\\BelongsTo;\n");
    }
    if soft_deletes {
        out.push_str("use Illuminate\\Database\\Eloquent\\SoftDeletes;\n");
    }
    out.push('\n');

    out.push_str(&format!("class {} extends Model\n{{\n", class_name));
    out.push_str(&format!(
        "    /** @use HasFactory<\\Database\\Factories\\{}Factory> */\n",
        class_name
    ));
    if soft_deletes {
        out.push_str("    use HasFactory, SoftDeletes;\n\n");
    } else {
        out.push_str("    use HasFactory;\n\n");
    }
    out.push_str(&format!("    protected $table = '{}';\n", php_escape(&table.name)));
    if let [pk] = primary.as_slice() {
        if pk.name != "id" {
            out.push_str(&format!("\n    protected $primaryKey = '{}';\n", php_escape(&pk.name)));
        }
        if !pk.auto_increment {
            out.push_str("\n    public $incrementing = false;\n");
        }
    }
    if !timestamps {
        out.push_str("\n    public $timestamps = false;\n");
    }

    let fillable = fillable_columns(table);
    if fillable.is_empty() {
        out.push_str("\n    protected $fillable = [];\n");
    } else {
        out.push_str("\n    protected $fillable = [\n");
        for col in fillable {
            out.push_str(&format!("        '{}',\n", php_escape(&col.name)));
        }
        out.push_str("    ];\n");
    }

    out.push_str("\n    /**\n     * @return array<string, string>\n     */\n");
    out.push_str("    protected function casts(): array\n    {\n");
    let casts = casts(table);
    if casts.is_empty() {
        out.push_str("        return [];\n");
    } else {
        out.push_str("        return [\n");
        for (column, cast) in casts {
            out.push_str(&format!("            '{}' => '{}',\n", php_escape(column), cast));
        }
        out.push_str("        ];\n");
    }
    out.push_str("    }\n");

    let mut methods: Vec<String> = Vec::new();
    for rel in &table.relations {
        let mut method = to_camel_case(&rel.referenced_table);
        if methods.contains(&method) {
            method = format!("{}By{}", method, to_pascal_case(&rel.source_column));
        }
        out.push_str(&format!(
            "\n    public function {}(): BelongsTo\n    {{\n        return $this->belongsTo({}::class, '{}');\n    }}\n",
            method,
            to_pascal_case(&rel.referenced_table),
            php_escape(&rel.source_column),
        ));
        methods.push(method);
    }

    out.push('}');
    out
}

/// Escape for a single-quoted PHP string.
fn php_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}
