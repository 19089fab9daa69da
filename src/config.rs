//! Per-source YAML configuration (§6): `data` (how to read the source
//! layer) and `conform` (the declarative field-mapping document, §4.1).

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::conform::FunctionCall;

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub data: DataConfig,
    pub conform: ConformDoc,
}

impl SourceConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading source config {}", path.display()))?;
        let cfg: SourceConfig = serde_yaml::from_str(&text)
            .with_context(|| format!("parsing source config {}", path.display()))?;
        Ok(cfg)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub filename: String,
    pub layer: Option<String>,
    #[serde(default)]
    pub driver: Option<String>,
    /// EPSG code of the source CRS.
    pub crs: i32,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub spatial: bool,
}

/// `conform[target_table][target_field] -> MappingEntry`. A field with no
/// entry at all is left at its schema default — the "unmapped" case.
pub type ConformDoc = HashMap<String, HashMap<String, MappingEntry>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Int(i64),
    Real(f64),
    Str(String),
}

impl LiteralValue {
    pub fn into_scalar(self) -> crate::value::Scalar {
        match self {
            LiteralValue::Int(v) => crate::value::Scalar::Int(v),
            LiteralValue::Real(v) => crate::value::Scalar::Real(v),
            LiteralValue::Str(v) => crate::value::Scalar::Str(v),
        }
    }
}

/// One target field's mapping. Variant order matters for `untagged`
/// deserialization: `Direct` and `Chain` are distinguished by their
/// required keys (`field` vs `fields`+`functions`), so more specific
/// shapes must be tried before the catch-all `Literal`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MappingEntry {
    Chain {
        fields: Vec<String>,
        #[serde(default)]
        process_separately: bool,
        functions: Vec<FunctionCall>,
    },
    Direct {
        field: String,
        #[serde(default)]
        cast_type: Option<String>,
    },
    Literal(LiteralValue),
}
