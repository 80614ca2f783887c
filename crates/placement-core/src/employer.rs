//! Employer records: organisations that host student placements.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Parse an employer identifier from a path segment.
///
/// Accepts anything `i64::from_str` accepts, including a leading sign.
pub fn parse_employer_id(raw: &str) -> Result<i64> {
  raw
    .parse()
    .map_err(|_| Error::InvalidEmployerId(raw.to_owned()))
}

/// A persisted employer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employer {
  /// Assigned by the store at creation; never reused.
  pub id:             i64,
  pub name:           String,
  pub contact_number: String,
  pub address_line_1: String,
  pub address_line_2: String,
  pub address_line_3: String,
  #[serde(rename = "addr_long")]
  pub longitude:      f64,
  #[serde(rename = "addr_lat")]
  pub latitude:       f64,
}

impl Employer {
  /// Attach a store-assigned identifier to an input payload.
  pub fn from_input(id: i64, input: EmployerInput) -> Self {
    Self {
      id,
      name: input.name,
      contact_number: input.contact_number,
      address_line_1: input.address_line_1,
      address_line_2: input.address_line_2,
      address_line_3: input.address_line_3,
      longitude: input.longitude,
      latitude: input.latitude,
    }
  }
}

/// Every mutable employer field, as accepted by both create and update.
///
/// Absent fields decode to their zero value, so an update always replaces
/// the whole record. The unseparated `address_line1` spelling is accepted
/// as an alias.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployerInput {
  pub name:           String,
  pub contact_number: String,
  #[serde(alias = "address_line1")]
  pub address_line_1: String,
  #[serde(alias = "address_line2")]
  pub address_line_2: String,
  #[serde(alias = "address_line3")]
  pub address_line_3: String,
  #[serde(rename = "addr_long")]
  pub longitude:      f64,
  #[serde(rename = "addr_lat")]
  pub latitude:       f64,
}

/// The lightweight listing projection: identifier and name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerSummary {
  pub id:   i64,
  pub name: String,
}
