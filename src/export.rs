//! Drives one export: assemble the selected tables, then render them.

use std::sync::{Arc, Mutex};

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::assemble::assemble;
use crate::dialect::{Dialect, RenderOptions};
use crate::error::{ExportError, Result};
use crate::introspect::Introspector;
use crate::ir::GenerationRequest;

/// What the user picked: a database, an ordered list of tables and a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub database: String,
    pub tables: Vec<String>,
    pub target: Dialect,
}

impl ExportRequest {
    pub fn new(database: impl Into<String>, tables: Vec<String>, target: Dialect) -> Self {
        ExportRequest {
            database: database.into(),
            tables,
            target,
        }
    }
}

/// Runs export requests against one introspection source.
///
/// Only the most recent call to [`Exporter::export`] may produce output: a
/// newer call cancels any assembly still in flight, and the older call
/// resolves to [`ExportError::Superseded`].
pub struct Exporter {
    introspector: Arc<dyn Introspector>,
    options: RenderOptions,
    current: Mutex<Option<CancellationToken>>,
}

impl Exporter {
    pub fn new(introspector: Arc<dyn Introspector>) -> Self {
        Exporter {
            introspector,
            options: RenderOptions::default(),
            current: Mutex::new(None),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Cancel the previous request and register a fresh token for this one.
    fn begin(&self) -> CancellationToken {
        let token = CancellationToken::new();
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = current.replace(token.clone()) {
            previous.cancel();
        }
        token
    }

    pub async fn export(&self, request: &ExportRequest) -> Result<String> {
        // An empty selection still replaces whatever was in flight.
        let token = self.begin();
        if request.tables.is_empty() {
            return Err(ExportError::EmptySelection);
        }

        info!(
            database = %request.database,
            tables = request.tables.len(),
            dialect = %request.target,
            "assembling schema"
        );
        let tables = tokio::select! {
            biased;
            _ = token.cancelled() => {
                warn!(database = %request.database, "export superseded during assembly");
                return Err(ExportError::Superseded);
            }
            tables = assemble(self.introspector.as_ref(), &request.database, &request.tables) => tables?,
        };

        let generation = GenerationRequest {
            target: request.target,
            tables,
        };
        let text = generation.render_with(&self.options);
        if token.is_cancelled() {
            return Err(ExportError::Superseded);
        }
        info!(dialect = %request.target, bytes = text.len(), "export rendered");
        Ok(text)
    }
}
