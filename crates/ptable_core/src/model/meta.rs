//! Property metadata records.
//!
//! Metadata is display/documentation material (units, citations,
//! annotations). It is never consumed by the derived-property engine.

use serde::Serialize;

/// Whether a documented property is stored in the database or computed by
/// the derived-property engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueOrigin {
    Stored,
    Computed,
}

impl ValueOrigin {
    pub fn as_db(self) -> &'static str {
        match self {
            Self::Stored => "stored",
            Self::Computed => "computed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "stored" => Some(Self::Stored),
            "computed" => Some(Self::Computed),
            _ => None,
        }
    }
}

/// Documentation for one stored column or computed attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyMetadata {
    pub attribute_name: String,
    pub class_name: String,
    pub column_name: Option<String>,
    pub table_name: Option<String>,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub description: String,
    pub citation_keys: Option<String>,
    pub annotations: Option<String>,
    pub value_origin: ValueOrigin,
}
