#![allow(dead_code)]

use async_trait::async_trait;
use schemagen::{
    ColumnSchema, Introspector, KeyKind, RawColumn, RawRelation, RelationSchema, TableSchema,
};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

pub fn raw_column(field: &str, data_type: &str, null: &str, key: &str, extra: &str) -> RawColumn {
    RawColumn {
        field: field.into(),
        data_type: data_type.into(),
        null: null.into(),
        key: key.into(),
        default: None,
        extra: extra.into(),
    }
}

pub fn raw_relation(table: &str, column: &str, ref_table: &str, ref_column: &str) -> RawRelation {
    RawRelation {
        table: table.into(),
        column: column.into(),
        referenced_table: ref_table.into(),
        referenced_column: ref_column.into(),
    }
}

/// In-memory introspection source with optional per-table latency and failures.
#[derive(Default)]
pub struct FakeIntrospector {
    pub columns: HashMap<String, Vec<RawColumn>>,
    pub relations: Vec<RawRelation>,
    pub delays: HashMap<String, Duration>,
    pub failing: HashSet<String>,
    pub fail_relations: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeIntrospector {
    pub fn shop() -> Self {
        let mut columns = HashMap::new();
        columns.insert(
            "users".to_string(),
            vec![
                raw_column("id", "int(11)", "NO", "PRI", "auto_increment"),
                raw_column("name", "varchar(255)", "NO", "", ""),
                raw_column("email", "varchar(255)", "NO", "UNI", ""),
                raw_column("created_at", "datetime", "YES", "", ""),
                raw_column("updated_at", "datetime", "YES", "", ""),
            ],
        );
        columns.insert(
            "orders".to_string(),
            vec![
                raw_column("id", "bigint(20) unsigned", "NO", "PRI", "auto_increment"),
                raw_column("user_id", "int(11)", "NO", "MUL", ""),
                raw_column("total", "decimal(10,2)", "NO", "", ""),
                raw_column(
                    "updated_at",
                    "timestamp",
                    "YES",
                    "",
                    "DEFAULT_GENERATED on update CURRENT_TIMESTAMP",
                ),
            ],
        );
        columns.insert(
            "order_items".to_string(),
            vec![
                raw_column("order_id", "bigint(20) unsigned", "NO", "PRI", ""),
                raw_column("sku", "varchar(64)", "NO", "PRI", ""),
                raw_column("quantity", "int(11)", "NO", "", ""),
            ],
        );
        FakeIntrospector {
            columns,
            relations: vec![
                raw_relation("orders", "user_id", "users", "id"),
                raw_relation("order_items", "order_id", "orders", "id"),
            ],
            ..Default::default()
        }
    }
}

#[async_trait]
impl Introspector for FakeIntrospector {
    async fn columns(&self, _database: &str, table: &str) -> anyhow::Result<Vec<RawColumn>> {
        self.calls.lock().unwrap().push(format!("columns:{}", table));
        if let Some(delay) = self.delays.get(table) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(table) {
            anyhow::bail!("Table '{}' doesn't exist", table);
        }
        self.columns
            .get(table)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("unknown table {}", table))
    }

    async fn relations(&self, database: &str) -> anyhow::Result<Vec<RawRelation>> {
        self.calls.lock().unwrap().push(format!("relations:{}", database));
        if self.fail_relations {
            anyhow::bail!("Access denied for information_schema");
        }
        Ok(self.relations.clone())
    }
}

pub fn column(name: &str, raw_type: &str) -> ColumnSchema {
    ColumnSchema::new(name, raw_type)
}

pub fn relation(source: &str, table: &str, column: &str) -> RelationSchema {
    RelationSchema {
        source_column: source.into(),
        referenced_table: table.into(),
        referenced_column: column.into(),
    }
}

/// `users` from the reference scenario: id, name, unique email and timestamps.
pub fn users_table() -> TableSchema {
    let mut id = column("id", "INT");
    id.key = KeyKind::Primary;
    id.auto_increment = true;
    let name = column("name", "VARCHAR(255)");
    let mut email = column("email", "VARCHAR(255)");
    email.key = KeyKind::Unique;
    let mut created_at = column("created_at", "DATETIME");
    created_at.nullable = true;
    let mut updated_at = column("updated_at", "DATETIME");
    updated_at.nullable = true;

    TableSchema {
        name: "users".into(),
        columns: vec![id, name, email, created_at, updated_at],
        relations: Vec::new(),
    }
}

/// `orders` referencing `users` through `user_id`.
pub fn orders_table() -> TableSchema {
    let mut id = column("id", "BIGINT UNSIGNED");
    id.key = KeyKind::Primary;
    id.auto_increment = true;
    let mut user_id = column("user_id", "INT");
    user_id.key = KeyKind::Multi;
    let total = column("total", "DECIMAL(10,2)");
    let mut paid = column("paid", "TINYINT(1)");
    paid.default_value = Some("0".into());
    let mut meta = column("meta", "JSON");
    meta.nullable = true;
    let mut shipped_at = column("shipped_at", "TIMESTAMP");
    shipped_at.nullable = true;
    let mut deleted_at = column("deleted_at", "TIMESTAMP");
    deleted_at.nullable = true;

    TableSchema {
        name: "orders".into(),
        columns: vec![id, user_id, total, paid, meta, shipped_at, deleted_at],
        relations: vec![relation("user_id", "users", "id")],
    }
}
