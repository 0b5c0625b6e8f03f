pub mod go;
pub mod json;
pub mod laravel;
pub mod mermaid;
pub mod prisma;
pub mod sql;
pub mod typescript;
pub mod zod;

use std::collections::HashSet;

use tracing::debug;

use crate::ir::{RelationSchema, TableSchema};

/// `-12`, `3.5`, `0`: a plain decimal number literal.
pub(crate) fn is_numeric_literal(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty()
        && digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.matches('.').count() <= 1
}

/// Relations of `table` whose referenced table is part of `tables`.
///
/// Dialects that need the related entity to exist drop the rest and keep
/// rendering.
pub(crate) fn resolved_relations<'a>(
    table: &'a TableSchema,
    tables: &[TableSchema],
) -> Vec<&'a RelationSchema> {
    let known: HashSet<&str> = tables.iter().map(|t| t.name.as_str()).collect();
    table
        .relations
        .iter()
        .filter(|rel| {
            let found = known.contains(rel.referenced_table.as_str());
            if !found {
                debug!(
                    table = %table.name,
                    column = %rel.source_column,
                    referenced = %rel.referenced_table,
                    "skipping relation to a table outside the export"
                );
            }
            found
        })
        .collect()
}

/// Width of the widest string, for column alignment.
pub(crate) fn max_width<'a>(items: impl IntoIterator<Item = &'a str>) -> usize {
    items.into_iter().map(|s| s.chars().count()).max().unwrap_or(0)
}
