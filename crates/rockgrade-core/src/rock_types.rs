//! Rock type records from the rock type service.
//!
//! The service returns a flat list of rock types tagged with a family code.
//! These are partitioned into the three exclusive classification groups.

use std::fmt;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::model::{Choice, Group};

/// Record identifiers arrive as either numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A single rock type as served by the rock type service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RockTypeRecord {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub foreign_name: String,
    pub type_code: String,
}

impl RockTypeRecord {
    /// Display label, e.g. `"玄武岩 (Basalt)"`.
    pub fn label(&self) -> String {
        if self.foreign_name.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.foreign_name)
        }
    }
}

/// Rock family, one per classification group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RockFamily {
    Igneous,
    Sedimentary,
    Metamorphic,
}

impl RockFamily {
    /// Families in the order their groups are presented.
    pub const ALL: [RockFamily; 3] = [
        RockFamily::Igneous,
        RockFamily::Sedimentary,
        RockFamily::Metamorphic,
    ];

    pub fn type_code(self) -> &'static str {
        match self {
            RockFamily::Sedimentary => "002001",
            RockFamily::Igneous => "002002",
            RockFamily::Metamorphic => "002003",
        }
    }

    pub fn from_type_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.type_code() == code)
    }

    /// Group id used by the selector.
    pub fn group_id(self) -> &'static str {
        match self {
            RockFamily::Igneous => "igneous",
            RockFamily::Sedimentary => "sedimentary",
            RockFamily::Metamorphic => "metamorphic",
        }
    }
}

impl fmt::Display for RockFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.group_id())
    }
}

/// Response envelope of the rock type service.
#[derive(Debug, Deserialize)]
struct RockTypeResponse {
    code: i64,
    #[serde(default)]
    data: Option<Vec<RockTypeRecord>>,
}

/// Parse a rock type service response (`{"code": 1, "data": [...]}`) or a
/// bare JSON array of records.
pub fn parse_rock_records_json(content: &str) -> Result<Vec<RockTypeRecord>> {
    let value: serde_json::Value =
        serde_json::from_str(content).context("failed to parse rock type JSON")?;

    if value.is_array() {
        return serde_json::from_value(value).context("invalid rock type record list");
    }

    let response: RockTypeResponse =
        serde_json::from_value(value).context("invalid rock type response")?;
    if response.code != 1 {
        anyhow::bail!("rock type service returned code {}", response.code);
    }
    response
        .data
        .context("rock type response has no data")
}

/// Partition records into one group per family, in igneous, sedimentary,
/// metamorphic order. Records with an unknown type code are skipped.
pub fn rock_groups_from_records(records: &[RockTypeRecord]) -> Result<Vec<Group>, CatalogError> {
    for record in records {
        if RockFamily::from_type_code(&record.type_code).is_none() {
            tracing::warn!(
                id = %record.id,
                type_code = %record.type_code,
                "skipping rock type with unknown type code"
            );
        }
    }

    RockFamily::ALL
        .into_iter()
        .map(|family| {
            let options = records
                .iter()
                .filter(|r| r.type_code == family.type_code())
                .map(|r| Choice::new(r.id.to_string(), r.label()))
                .collect();
            Group::new(family.group_id(), options)
        })
        .collect()
}
