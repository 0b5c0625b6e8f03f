use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Type family a raw column type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseType {
    Integer,
    Float,
    Boolean,
    Temporal,
    Text,
    Json,
    Binary,
    Unknown,
}

impl BaseType {
    pub fn as_str(self) -> &'static str {
        match self {
            BaseType::Integer => "integer",
            BaseType::Float => "float",
            BaseType::Boolean => "boolean",
            BaseType::Temporal => "temporal",
            BaseType::Text => "text",
            BaseType::Json => "json",
            BaseType::Binary => "binary",
            BaseType::Unknown => "unknown",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, BaseType::Integer | BaseType::Float)
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const FAMILIES: &[(BaseType, &[&str])] = &[
    (
        BaseType::Integer,
        &[
            "tinyint", "smallint", "mediumint", "int", "integer", "bigint", "serial", "bigserial",
            "smallserial",
        ],
    ),
    (
        BaseType::Float,
        &["float", "double", "real", "decimal", "numeric", "dec", "fixed", "money"],
    ),
    (BaseType::Boolean, &["bool", "boolean"]),
    (
        BaseType::Temporal,
        &["date", "datetime", "timestamp", "timestamptz", "time", "timetz", "year"],
    ),
    (
        BaseType::Text,
        &[
            "char", "varchar", "character", "nchar", "nvarchar", "text", "tinytext", "mediumtext",
            "longtext", "citext", "uuid", "enum", "set",
        ],
    ),
    (BaseType::Json, &["json", "jsonb"]),
    (
        BaseType::Binary,
        &["binary", "varbinary", "blob", "tinyblob", "mediumblob", "longblob", "bytea", "bit"],
    ),
];

/// Tokens whose argument list is `(precision[, scale])` rather than a length.
const DECIMAL_TOKENS: &[&str] = &["decimal", "numeric", "dec", "fixed", "float", "double", "real"];

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*([A-Za-z_]+)").expect("valid token regex"))
}

fn args_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(([^)]*)\)").expect("valid argument regex"))
}

/// Canonical form of a raw column type such as `decimal(10,2) unsigned`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedType {
    pub base: BaseType,
    /// Lower-cased leading token, e.g. `varchar`. Empty when the raw type has none.
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
    #[serde(default)]
    pub unsigned: bool,
}

impl ParsedType {
    /// Parse a raw type string. Never fails: anything unrecognised becomes
    /// [`BaseType::Unknown`].
    pub fn parse(raw: &str) -> ParsedType {
        let token = token_re()
            .captures(raw)
            .map(|c| c[1].to_ascii_lowercase())
            .unwrap_or_default();

        let args: Option<Vec<u32>> = args_re().captures(raw).and_then(|c| {
            c[1].split(',')
                .map(|a| a.trim().parse::<u32>().ok())
                .collect::<Option<Vec<_>>>()
        });

        let mut length = None;
        let mut precision = None;
        let mut scale = None;
        if let Some(args) = args {
            if DECIMAL_TOKENS.contains(&token.as_str()) {
                precision = args.first().copied();
                scale = args.get(1).copied();
            } else {
                length = args.first().copied();
            }
        }

        let mut base = FAMILIES
            .iter()
            .find(|(_, tokens)| tokens.contains(&token.as_str()))
            .map(|(base, _)| *base)
            .unwrap_or(BaseType::Unknown);
        if matches!(token.as_str(), "tinyint" | "bit") && length == Some(1) {
            base = BaseType::Boolean;
        }

        ParsedType {
            base,
            token,
            length,
            precision,
            scale,
            unsigned: raw.to_ascii_lowercase().contains("unsigned"),
        }
    }

    pub fn is_decimal(&self) -> bool {
        matches!(self.token.as_str(), "decimal" | "numeric" | "dec" | "fixed" | "money")
    }

    /// True for `enum(...)` and `set(...)`, whose member lists are not kept.
    pub fn is_enumerated(&self) -> bool {
        matches!(self.token.as_str(), "enum" | "set")
    }

    /// Upper-case native spelling with arguments, e.g. `DECIMAL(10,2) UNSIGNED`.
    pub fn native(&self) -> String {
        let mut out = self.token.to_ascii_uppercase();
        match (self.precision, self.scale, self.length) {
            (Some(p), Some(s), _) => out.push_str(&format!("({},{})", p, s)),
            (Some(p), None, _) => out.push_str(&format!("({})", p)),
            (None, _, Some(l)) => out.push_str(&format!("({})", l)),
            _ => {}
        }
        if self.unsigned {
            out.push_str(" UNSIGNED");
        }
        out
    }
}
