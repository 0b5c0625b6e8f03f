//! Schema export pipeline: introspection records in, canonical IR in the
//! middle, one of nine code dialects out.

pub mod assemble;
pub mod codegen;
pub mod config;
pub mod dialect;
pub mod error;
pub mod export;
pub mod introspect;
pub mod ir;
pub mod naming;
pub mod typemap;
pub mod types;

pub use assemble::assemble;
pub use codegen::json::parse_interchange;
pub use config::Config;
pub use dialect::{Dialect, RenderOptions};
pub use error::{ExportError, Result};
pub use export::{ExportRequest, Exporter};
pub use introspect::{Introspector, MySqlIntrospector, RawColumn, RawRelation};
pub use ir::{ColumnSchema, GenerationRequest, KeyKind, RelationSchema, TableSchema};
pub use naming::{to_camel_case, to_pascal_case};
pub use types::{BaseType, ParsedType};
