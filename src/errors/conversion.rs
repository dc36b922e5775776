// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the unit conversion engine.
//!
//! Note that the keystroke-level [`recompute`](crate::UnitTable::recompute)
//! path never produces these errors; malformed input there is treated as
//! in-progress typing. Only the direct [`convert`](crate::UnitTable::convert)
//! API and custom table construction are fallible.

/// Errors that can occur during unit conversion and table construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The value is not a plain non-negative decimal string.
    ///
    /// Accepted values are digits with at most one decimal point, no sign,
    /// no exponent notation.
    #[error("Not a decimal value: {value:?}")]
    InvalidValue {
        /// The rejected input string
        value: String,
    },

    /// The named unit is not part of the table.
    #[error("Unknown unit: {name:?}")]
    UnknownUnit {
        /// The unit name that wasn't found
        name: String,
    },

    /// A custom unit table violates a table invariant.
    ///
    /// Valid tables have distinct positive integer scales and exactly one
    /// base unit with scale 1.
    #[error("Invalid unit table: {reason}")]
    InvalidTable {
        /// Description of the violated invariant
        reason: String,
    },
}

impl ConversionError {
    /// Create an `InvalidValue` error for a rejected input string.
    pub fn invalid_value(value: impl Into<String>) -> Self {
        ConversionError::InvalidValue {
            value: value.into(),
        }
    }

    /// Create an `UnknownUnit` error for an unrecognized unit name.
    pub fn unknown_unit(name: impl Into<String>) -> Self {
        ConversionError::UnknownUnit { name: name.into() }
    }

    /// Create an `InvalidTable` error with a description of the violation.
    pub fn invalid_table(reason: impl Into<String>) -> Self {
        ConversionError::InvalidTable {
            reason: reason.into(),
        }
    }
}
