//! Derived datapoint overview.
//!
//! The absolute address of a datapoint is `group.baseId + datapoint.id`.
//! It is computed here, lazily, and never stored on the datapoint; this
//! is also the only place where a `baseId` token is read as a number.

use std::fmt;

use smol_str::SmolStr;
use thiserror::Error;

use crate::model::{ValidatedModel, Version};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OverviewError {
    #[error("Group '{group}' has baseId '{base_id}' which is not a number")]
    InvalidBaseId { group: SmolStr, base_id: SmolStr },

    #[error("Datapoint '{datapoint}' references undeclared group '{group}'")]
    UnknownGroup { datapoint: SmolStr, group: SmolStr },

    #[error("Address of datapoint '{datapoint}' overflows")]
    AddressOverflow { datapoint: SmolStr },
}

/// Read a `baseId` token as `0x`-prefixed hex or decimal.
pub fn parse_base_id(token: &str) -> Option<u64> {
    let token = token.trim();
    match token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => token.parse().ok(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverviewRow {
    pub name: SmolStr,
    pub qualified_name: SmolStr,
    pub group: SmolStr,
    pub address: u64,
    pub namespace: SmolStr,
    pub ty: SmolStr,
    pub version: Option<Version>,
    pub description: Option<String>,
}

/// One row per datapoint, in datapoint order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overview {
    rows: Vec<OverviewRow>,
}

impl Overview {
    pub const HEADER: &'static str = "Name;Group;Id;Namespace;Type;Version;Description";

    pub fn build(model: &ValidatedModel) -> Result<Self, OverviewError> {
        let mut rows = Vec::with_capacity(model.datapoints.len());
        for dp in &model.datapoints {
            let group = model
                .group(&dp.group)
                .ok_or_else(|| OverviewError::UnknownGroup {
                    datapoint: dp.qualified_name.clone(),
                    group: dp.group.clone(),
                })?;
            let base = parse_base_id(&group.base_id).ok_or_else(|| OverviewError::InvalidBaseId {
                group: group.name.clone(),
                base_id: group.base_id.clone(),
            })?;
            let address = base
                .checked_add(u64::from(dp.id))
                .ok_or_else(|| OverviewError::AddressOverflow {
                    datapoint: dp.qualified_name.clone(),
                })?;

            rows.push(OverviewRow {
                name: dp.name.clone(),
                qualified_name: dp.qualified_name.clone(),
                group: dp.group.clone(),
                address,
                namespace: dp.namespace.clone(),
                ty: dp.ty.clone(),
                version: dp.version.clone(),
                description: dp.description.clone(),
            });
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[OverviewRow] {
        &self.rows
    }

    pub fn address_of(&self, qualified_name: &str) -> Option<u64> {
        self.rows
            .iter()
            .find(|row| row.qualified_name == qualified_name)
            .map(|row| row.address)
    }
}

impl fmt::Display for Overview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::HEADER)?;
        for row in &self.rows {
            write!(
                f,
                "\n{};{};{:#x};{};{};",
                row.name, row.group, row.address, row.namespace, row.ty
            )?;
            if let Some(version) = &row.version {
                write!(f, "{version}")?;
            }
            write!(f, ";{}", row.description.as_deref().unwrap_or(""))?;
        }
        Ok(())
    }
}
