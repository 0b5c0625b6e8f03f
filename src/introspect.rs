//! Access to live database metadata.
//!
//! [`Introspector`] is the seam between the pipeline and whatever knows how to
//! ask a database about its own structure. Records are returned the way the
//! server reports them; normalisation happens in [`crate::assemble`].

use anyhow::Context;
use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use tracing::debug;

/// One row of `SHOW COLUMNS` style output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawColumn {
    pub field: String,
    pub data_type: String,
    /// `YES` when the column accepts NULL.
    pub null: String,
    /// `PRI`, `UNI`, `MUL` or empty.
    pub key: String,
    pub default: Option<String>,
    /// Free-form extra attributes such as `auto_increment`.
    pub extra: String,
}

/// One foreign-key column link as reported by `KEY_COLUMN_USAGE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRelation {
    pub table: String,
    pub column: String,
    pub referenced_table: String,
    pub referenced_column: String,
}

#[async_trait]
pub trait Introspector: Send + Sync {
    /// Columns of `table` in their defined order.
    async fn columns(&self, database: &str, table: &str) -> anyhow::Result<Vec<RawColumn>>;

    /// Every foreign-key link in `database`.
    async fn relations(&self, database: &str) -> anyhow::Result<Vec<RawRelation>>;
}

/// Reads metadata from a MySQL or MariaDB server's `information_schema`.
#[derive(Debug, Clone)]
pub struct MySqlIntrospector {
    pool: MySqlPool,
}

impl MySqlIntrospector {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlIntrospector { pool }
    }

    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        let pool = MySqlPool::connect(url)
            .await
            .with_context(|| format!("failed to connect to {}", redact_url(url)))?;
        Ok(MySqlIntrospector { pool })
    }
}

#[async_trait]
impl Introspector for MySqlIntrospector {
    async fn columns(&self, database: &str, table: &str) -> anyhow::Result<Vec<RawColumn>> {
        debug!(database, table, "fetching columns");
        let rows = sqlx::query(
            "SELECT CAST(COLUMN_NAME AS CHAR) AS field, \
                    CAST(COLUMN_TYPE AS CHAR) AS data_type, \
                    CAST(IS_NULLABLE AS CHAR) AS nullable, \
                    CAST(COLUMN_KEY AS CHAR) AS column_key, \
                    CAST(COLUMN_DEFAULT AS CHAR) AS column_default, \
                    CAST(EXTRA AS CHAR) AS extra \
             FROM information_schema.COLUMNS \
             WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ? \
             ORDER BY ORDINAL_POSITION",
        )
        .bind(database)
        .bind(table)
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            anyhow::bail!("table `{}` not found in `{}`", table, database);
        }

        let mut columns = Vec::with_capacity(rows.len());
        for r in rows {
            columns.push(RawColumn {
                field: r.try_get("field")?,
                data_type: r.try_get("data_type")?,
                null: r.try_get("nullable")?,
                key: r.try_get("column_key")?,
                default: r.try_get("column_default")?,
                extra: r.try_get("extra")?,
            });
        }
        Ok(columns)
    }

    async fn relations(&self, database: &str) -> anyhow::Result<Vec<RawRelation>> {
        debug!(database, "fetching relations");
        let rows = sqlx::query(
            "SELECT CAST(TABLE_NAME AS CHAR) AS table_name, \
                    CAST(COLUMN_NAME AS CHAR) AS column_name, \
                    CAST(REFERENCED_TABLE_NAME AS CHAR) AS referenced_table, \
                    CAST(REFERENCED_COLUMN_NAME AS CHAR) AS referenced_column \
             FROM information_schema.KEY_COLUMN_USAGE \
             WHERE TABLE_SCHEMA = ? AND REFERENCED_TABLE_NAME IS NOT NULL \
             ORDER BY TABLE_NAME, CONSTRAINT_NAME, ORDINAL_POSITION",
        )
        .bind(database)
        .fetch_all(&self.pool)
        .await?;

        let mut relations = Vec::with_capacity(rows.len());
        for r in rows {
            relations.push(RawRelation {
                table: r.try_get("table_name")?,
                column: r.try_get("column_name")?,
                referenced_table: r.try_get("referenced_table")?,
                referenced_column: r.try_get("referenced_column")?,
            });
        }
        Ok(relations)
    }
}

/// Hide the password component of a connection URL for log and error output.
pub fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    match rest.rsplit_once('@') {
        Some((credentials, host)) => {
            let user = credentials.split(':').next().unwrap_or_default();
            if credentials.contains(':') {
                format!("{}://{}:***@{}", scheme, user, host)
            } else {
                format!("{}://{}@{}", scheme, user, host)
            }
        }
        None => url.to_string(),
    }
}
