//! The closed set of output dialects and the dispatch from dialect to generator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::codegen;
use crate::error::ExportError;
use crate::ir::TableSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Sql,
    LaravelMigration,
    LaravelModel,
    Prisma,
    TypeScript,
    Go,
    Zod,
    Mermaid,
    Json,
}

impl Dialect {
    pub const ALL: [Dialect; 9] = [
        Dialect::Sql,
        Dialect::LaravelMigration,
        Dialect::LaravelModel,
        Dialect::Prisma,
        Dialect::TypeScript,
        Dialect::Go,
        Dialect::Zod,
        Dialect::Mermaid,
        Dialect::Json,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dialect::Sql => "sql",
            Dialect::LaravelMigration => "laravel-migration",
            Dialect::LaravelModel => "laravel-model",
            Dialect::Prisma => "prisma",
            Dialect::TypeScript => "typescript",
            Dialect::Go => "go",
            Dialect::Zod => "zod",
            Dialect::Mermaid => "mermaid",
            Dialect::Json => "json",
        }
    }

    /// File extension conventionally used for this dialect's output.
    pub fn extension(self) -> &'static str {
        match self {
            Dialect::Sql => "sql",
            Dialect::LaravelMigration | Dialect::LaravelModel => "php",
            Dialect::Prisma => "prisma",
            Dialect::TypeScript | Dialect::Zod => "ts",
            Dialect::Go => "go",
            Dialect::Mermaid => "mmd",
            Dialect::Json => "json",
        }
    }

    pub fn render(self, tables: &[TableSchema]) -> String {
        self.render_with(tables, &RenderOptions::default())
    }

    pub fn render_with(self, tables: &[TableSchema], options: &RenderOptions) -> String {
        match self {
            Dialect::Sql => codegen::sql::generate_ddl(tables),
            Dialect::LaravelMigration => codegen::laravel::generate_migrations(tables),
            Dialect::LaravelModel => {
                codegen::laravel::generate_models(tables, &options.model_namespace)
            }
            Dialect::Prisma => codegen::prisma::generate_prisma_schema(tables),
            Dialect::TypeScript => codegen::typescript::generate_interfaces(tables),
            Dialect::Go => codegen::go::generate_structs(tables, &options.go_package),
            Dialect::Zod => codegen::zod::generate_zod_schemas(tables),
            Dialect::Mermaid => codegen::mermaid::generate_erd(tables),
            Dialect::Json => codegen::json::generate_interchange(tables),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "sql" | "ddl" => Ok(Dialect::Sql),
            "laravel-migration" => Ok(Dialect::LaravelMigration),
            "laravel-model" => Ok(Dialect::LaravelModel),
            "prisma" => Ok(Dialect::Prisma),
            "typescript" | "ts" => Ok(Dialect::TypeScript),
            "go" | "golang" => Ok(Dialect::Go),
            "zod" => Ok(Dialect::Zod),
            "mermaid" | "erd" => Ok(Dialect::Mermaid),
            "json" => Ok(Dialect::Json),
            _ => Err(ExportError::UnknownDialect(s.to_string())),
        }
    }
}

/// Knobs for dialects whose output embeds a project-specific name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// PHP namespace of generated Eloquent models.
    #[serde(default = "default_model_namespace")]
    pub model_namespace: String,
    /// Go package clause of generated structs.
    #[serde(default = "default_go_package")]
    pub go_package: String,
}

fn default_model_namespace() -> String {
    "App\\Models".to_string()
}

fn default_go_package() -> String {
    "models".to_string()
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            model_namespace: default_model_namespace(),
            go_package: default_go_package(),
        }
    }
}
