//! Error types for schema assembly and export.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    /// Column introspection failed for one table; the whole assembly is abandoned.
    #[error("failed to fetch columns for `{database}`.`{table}`: {source:#}")]
    ColumnFetch {
        database: String,
        table: String,
        source: anyhow::Error,
    },

    /// Relation introspection failed for the database.
    #[error("failed to fetch relations for `{database}`: {source:#}")]
    RelationFetch {
        database: String,
        source: anyhow::Error,
    },

    #[error("no tables selected for export")]
    EmptySelection,

    /// A newer export request replaced this one before it finished.
    #[error("export superseded by a newer request")]
    Superseded,

    #[error("unknown export target `{0}`")]
    UnknownDialect(String),

    #[error("invalid interchange document: {0}")]
    Interchange(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    pub fn column_fetch(
        database: impl Into<String>,
        table: impl Into<String>,
        source: anyhow::Error,
    ) -> Self {
        ExportError::ColumnFetch {
            database: database.into(),
            table: table.into(),
            source,
        }
    }

    pub fn relation_fetch(database: impl Into<String>, source: anyhow::Error) -> Self {
        ExportError::RelationFetch {
            database: database.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
