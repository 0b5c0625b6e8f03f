use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::dialect::{Dialect, RenderOptions};
pub use crate::types::{BaseType, ParsedType};

/// Column names handled by timestamp/soft-delete conventions.
pub const CREATED_AT: &str = "created_at";
pub const UPDATED_AT: &str = "updated_at";
pub const DELETED_AT: &str = "deleted_at";

pub fn is_timestamp_column(name: &str) -> bool {
    matches!(name, CREATED_AT | UPDATED_AT | DELETED_AT)
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    #[default]
    None,
    Primary,
    Unique,
    Multi,
}

impl KeyKind {
    /// Map an introspection key flag (`PRI`, `UNI`, `MUL`) to a key kind.
    pub fn from_flag(flag: &str) -> KeyKind {
        match flag.trim().to_ascii_uppercase().as_str() {
            "PRI" => KeyKind::Primary,
            "UNI" => KeyKind::Unique,
            "MUL" => KeyKind::Multi,
            _ => KeyKind::None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSchema {
    pub name: String,
    pub raw_type: String,
    pub parsed_type: ParsedType,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub key: KeyKind,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub auto_increment: bool,
    #[serde(default)]
    pub extra_flags: BTreeSet<String>,
}

impl ColumnSchema {
    /// A non-nullable, unkeyed column with its type parsed from `raw_type`.
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        let raw_type = raw_type.into();
        ColumnSchema {
            name: name.into(),
            parsed_type: ParsedType::parse(&raw_type),
            raw_type,
            nullable: false,
            key: KeyKind::None,
            default_value: None,
            auto_increment: false,
            extra_flags: BTreeSet::new(),
        }
    }

    pub fn base(&self) -> BaseType {
        self.parsed_type.base
    }

    pub fn is_primary(&self) -> bool {
        self.key == KeyKind::Primary
    }

    /// Default is the literal `CURRENT_TIMESTAMP` (optionally with precision).
    pub fn defaults_to_current_timestamp(&self) -> bool {
        self.default_value
            .as_deref()
            .map(|d| {
                let d = d.trim().to_ascii_lowercase();
                d == "current_timestamp" || d.starts_with("current_timestamp(")
            })
            .unwrap_or(false)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RelationSchema {
    pub source_column: String,
    pub referenced_table: String,
    pub referenced_column: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnSchema>,
    #[serde(default)]
    pub relations: Vec<RelationSchema>,
}

impl TableSchema {
    pub fn new(name: impl Into<String>) -> Self {
        TableSchema {
            name: name.into(),
            columns: Vec::new(),
            relations: Vec::new(),
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Whether any relation of this table starts at `column`.
    pub fn is_relation_source(&self, column: &str) -> bool {
        self.relations.iter().any(|r| r.source_column == column)
    }
}

/// A fully assembled schema together with the dialect it should be rendered to.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub target: Dialect,
    pub tables: Vec<TableSchema>,
}

impl GenerationRequest {
    pub fn render(&self) -> String {
        self.target.render(&self.tables)
    }

    pub fn render_with(&self, options: &RenderOptions) -> String {
        self.target.render_with(&self.tables, options)
    }
}
