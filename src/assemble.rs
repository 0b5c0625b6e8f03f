//! Builds the canonical IR from raw introspection records.

use futures::future::try_join_all;
use std::collections::{BTreeSet, HashMap};
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::error::{ExportError, Result};
use crate::introspect::{Introspector, RawColumn, RawRelation};
use crate::ir::{ColumnSchema, KeyKind, ParsedType, RelationSchema, TableSchema};

/// Fetch and assemble `table_names` from `database`.
///
/// The relation fetch and every column fetch run concurrently. The result is
/// in `table_names` order no matter which fetch finishes first, and the first
/// failing fetch fails the whole assembly.
pub async fn assemble(
    introspector: &dyn Introspector,
    database: &str,
    table_names: &[String],
) -> Result<Vec<TableSchema>> {
    let relations = async {
        introspector
            .relations(database)
            .await
            .map_err(|e| ExportError::relation_fetch(database, e))
    };
    let columns = try_join_all(table_names.iter().map(|table| async move {
        introspector
            .columns(database, table)
            .await
            .map_err(|e| ExportError::column_fetch(database, table.as_str(), e))
    }));

    let (relations, columns) = futures::try_join!(relations, columns)?;
    debug!(
        database,
        tables = table_names.len(),
        relations = relations.len(),
        "introspection complete"
    );

    let by_table = partition_relations(relations);
    Ok(table_names
        .iter()
        .zip(columns)
        .map(|(name, raw)| TableSchema {
            name: name.clone(),
            columns: raw.iter().map(column_from_raw).collect(),
            relations: by_table.get(name).cloned().unwrap_or_default(),
        })
        .collect())
}

/// Group relations by owning table, keeping introspection order within a table.
pub fn partition_relations(relations: Vec<RawRelation>) -> HashMap<String, Vec<RelationSchema>> {
    let mut by_table: HashMap<String, Vec<RelationSchema>> = HashMap::new();
    for rel in relations {
        by_table.entry(rel.table).or_default().push(RelationSchema {
            source_column: rel.column,
            referenced_table: rel.referenced_table,
            referenced_column: rel.referenced_column,
        });
    }
    by_table
}

pub fn column_from_raw(raw: &RawColumn) -> ColumnSchema {
    let (auto_increment, extra_flags) = parse_extra(&raw.extra);
    ColumnSchema {
        name: raw.field.clone(),
        raw_type: raw.data_type.clone(),
        parsed_type: ParsedType::parse(&raw.data_type),
        nullable: raw.null.trim().eq_ignore_ascii_case("yes"),
        key: KeyKind::from_flag(&raw.key),
        default_value: raw.default.clone(),
        auto_increment,
        extra_flags,
    }
}

fn extra_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)on\s+update\s+\S+|virtual\s+generated|stored\s+generated|\S+")
            .expect("valid extra regex")
    })
}

/// Split an `EXTRA` string into the auto-increment marker and remaining flags.
pub fn parse_extra(extra: &str) -> (bool, BTreeSet<String>) {
    let mut auto_increment = false;
    let mut flags = BTreeSet::new();
    for m in extra_re().find_iter(extra) {
        let flag = m.as_str().split_whitespace().collect::<Vec<_>>().join(" ");
        if flag.eq_ignore_ascii_case("auto_increment") {
            auto_increment = true;
        } else {
            flags.insert(flag);
        }
    }
    (auto_increment, flags)
}
