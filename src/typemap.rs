//! Per-dialect lookup tables from [`BaseType`] to a target type name.
//!
//! Each table lists the families it knows and one fallback used for every
//! other family, so unrecognised database types degrade to the same
//! string-like type everywhere.

use crate::ir::BaseType;

#[derive(Debug, Clone, Copy)]
pub struct TypeTable {
    entries: &'static [(BaseType, &'static str)],
    fallback: &'static str,
}

impl TypeTable {
    pub const fn new(entries: &'static [(BaseType, &'static str)], fallback: &'static str) -> Self {
        TypeTable { entries, fallback }
    }

    pub fn lookup(&self, base: BaseType) -> &'static str {
        self.entries
            .iter()
            .find(|(b, _)| *b == base)
            .map(|(_, name)| *name)
            .unwrap_or(self.fallback)
    }
}

pub const TYPESCRIPT: TypeTable = TypeTable::new(
    &[
        (BaseType::Integer, "number"),
        (BaseType::Float, "number"),
        (BaseType::Boolean, "boolean"),
        (BaseType::Temporal, "Date"),
        (BaseType::Text, "string"),
        (BaseType::Json, "unknown"),
        (BaseType::Binary, "Uint8Array"),
    ],
    "string",
);

pub const ZOD: TypeTable = TypeTable::new(
    &[
        (BaseType::Integer, "z.number().int()"),
        (BaseType::Float, "z.number()"),
        (BaseType::Boolean, "z.boolean()"),
        (BaseType::Temporal, "z.date()"),
        (BaseType::Text, "z.string()"),
        (BaseType::Json, "z.unknown()"),
        (BaseType::Binary, "z.instanceof(Uint8Array)"),
    ],
    "z.string()",
);

pub const GO: TypeTable = TypeTable::new(
    &[
        (BaseType::Integer, "int64"),
        (BaseType::Float, "float64"),
        (BaseType::Boolean, "bool"),
        (BaseType::Temporal, "time.Time"),
        (BaseType::Text, "string"),
        (BaseType::Json, "json.RawMessage"),
        (BaseType::Binary, "[]byte"),
    ],
    "string",
);

/// `database/sql` wrappers for nullable Go scalars. Families without a wrapper
/// fall back to a pointer in the generator.
pub const GO_NULLABLE: TypeTable = TypeTable::new(
    &[
        (BaseType::Integer, "sql.NullInt64"),
        (BaseType::Float, "sql.NullFloat64"),
        (BaseType::Boolean, "sql.NullBool"),
        (BaseType::Temporal, "sql.NullTime"),
        (BaseType::Text, "sql.NullString"),
        (BaseType::Unknown, "sql.NullString"),
    ],
    "",
);

pub const PRISMA: TypeTable = TypeTable::new(
    &[
        (BaseType::Integer, "Int"),
        (BaseType::Float, "Float"),
        (BaseType::Boolean, "Boolean"),
        (BaseType::Temporal, "DateTime"),
        (BaseType::Text, "String"),
        (BaseType::Json, "Json"),
        (BaseType::Binary, "Bytes"),
    ],
    "String",
);
