// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core data types for the listing formatter.
//!
//! This module contains the editable field records: Mode, FieldValues,
//! PartEntry, and OilSpec.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of listing the editor produces.
///
/// Modes are mutually exclusive; a result line never mixes both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Automotive parts: free-text name/brand plus car brand/model/year entries.
    Parts,
    /// Motor oils: the fixed five-field oil specification.
    Oils,
}

impl Mode {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Parts => "parts",
            Mode::Oils => "oils",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The two free-text fields shared by the parts form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValues {
    /// Product name, e.g. "Подшипник ступицы ЗАДНЕЙ".
    #[serde(default)]
    pub name: String,
    /// Manufacturer brand, rendered in quotes in the result.
    #[serde(default)]
    pub brand: String,
}

/// One car brand/model/year-range record in the ordered entry list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartEntry {
    /// Stable identifier, unique within one editor state.
    pub id: String,
    #[serde(default)]
    pub car_brand: String,
    #[serde(default)]
    pub model: String,
    /// First production year: 2 or 4 ASCII digits, or empty.
    #[serde(default)]
    pub year_from: String,
    /// Last production year: 2 or 4 ASCII digits, or empty.
    #[serde(default)]
    pub year_to: String,
    /// When set, brand/model text keeps its casing; only whitespace is
    /// normalized.
    #[serde(default)]
    pub keep_uppercase: bool,
}

impl PartEntry {
    /// Creates an empty entry with the given identifier.
    pub fn new(id: String) -> Self {
        PartEntry {
            id,
            car_brand: String::new(),
            model: String::new(),
            year_from: String::new(),
            year_to: String::new(),
            keep_uppercase: false,
        }
    }
}

/// The fixed oil-specification record. Always exactly one per editor state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OilSpec {
    /// Oil kind, e.g. "Моторное"; rendered lowercased.
    #[serde(rename = "type", default)]
    pub oil_type: String,
    /// Oil brand, rendered in quotes.
    #[serde(default)]
    pub brand: String,
    /// Viscosity grade, e.g. "15w40".
    #[serde(default)]
    pub viscosity: String,
    /// Manufacturer specification, e.g. "HD 7000 CI-4".
    #[serde(default)]
    pub specification: String,
    /// Package volume, e.g. "1л".
    #[serde(default)]
    pub volume: String,
}

impl OilSpec {
    /// True when every field is empty.
    pub fn is_empty(&self) -> bool {
        self.oil_type.is_empty()
            && self.brand.is_empty()
            && self.viscosity.is_empty()
            && self.specification.is_empty()
            && self.volume.is_empty()
    }
}

/// Addresses one field of the oil specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OilField {
    Type,
    Brand,
    Viscosity,
    Specification,
    Volume,
}

impl OilField {
    /// Returns the string representation used in validation keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            OilField::Type => "type",
            OilField::Brand => "brand",
            OilField::Viscosity => "viscosity",
            OilField::Specification => "specification",
            OilField::Volume => "volume",
        }
    }

    /// All fields in render order.
    pub fn all() -> [OilField; 5] {
        [
            OilField::Type,
            OilField::Brand,
            OilField::Viscosity,
            OilField::Specification,
            OilField::Volume,
        ]
    }
}

impl fmt::Display for OilField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
