// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Denomination conversion between wei-based units
//!
//! This module is the arithmetic core of the crate: an immutable table of
//! named units, each defined by an integer scale in wei, and a pure
//! conversion function over decimal strings.
//!
//! All arithmetic runs on [`BigDecimal`]; native floats never touch the
//! conversion path, so 27-digit wei amounts (total ether supply territory)
//! convert without precision loss.
//!
//! # Conversion semantics
//!
//! Converting value `v` from unit `from` (scale `Sf`) to unit `to` (scale
//! `St`) computes `trunc(v * Sf) / St`: the intermediate wei amount is
//! truncated toward zero before dividing, and the quotient is formatted with
//! at most [`MAX_DECIMAL_PLACES`] fractional digits, truncated, trailing
//! zeros stripped.
//!
//! # Example
//!
//! ```
//! use ethcast::UnitTable;
//!
//! let units = UnitTable::mainnet();
//! assert_eq!(units.convert("ether", "wei", "1").unwrap(), "1000000000000000000");
//! assert_eq!(units.convert("wei", "gwei", "1000000000").unwrap(), "1");
//! ```

use std::collections::HashMap;
use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};

use crate::errors::ConversionError;

/// Maximum number of fractional digits retained when formatting a quotient.
///
/// Repeating fractions (e.g. dividing by a non-power-of-ten scale) would
/// otherwise expand without bound; everything past this ceiling is truncated,
/// never rounded.
pub const MAX_DECIMAL_PLACES: i64 = 30;

/// Per-screen field state: unit name mapped to its current decimal string.
///
/// Owned by the caller and passed into [`UnitTable::recompute`] by reference
/// on every change; the engine itself holds no mutable state.
pub type FieldValues = HashMap<String, String>;

/// A named denomination, defined by its scale in wei.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    name: String,
    scale: BigDecimal,
}

impl Unit {
    /// Create a new unit. The scale is the number of wei per 1 of this unit.
    pub fn new(name: impl Into<String>, scale: BigDecimal) -> Self {
        Self {
            name: name.into(),
            scale,
        }
    }

    /// The unit's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unit's scale in wei.
    pub fn scale(&self) -> &BigDecimal {
        &self.scale
    }
}

/// An immutable, validated set of units sharing a wei base.
///
/// Units are held in ascending scale order (display order); exactly one unit
/// has scale 1 (the base unit) and all scales are distinct positive integers.
#[derive(Debug, Clone)]
pub struct UnitTable {
    units: Vec<Unit>,
}

impl UnitTable {
    /// The standard mainnet table: wei, gwei, satoshi, micro and ether.
    pub fn mainnet() -> Self {
        Self {
            units: vec![
                Unit::new("wei", BigDecimal::from(1u64)),
                Unit::new("gwei", BigDecimal::from(1_000_000_000u64)),
                Unit::new("satoshi", BigDecimal::from(10_000_000_000u64)),
                Unit::new("micro", BigDecimal::from(1_000_000_000_000u64)),
                Unit::new("ether", BigDecimal::from(1_000_000_000_000_000_000u64)),
            ],
        }
    }

    /// Build a custom table, validating the table invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::InvalidTable`] when the table is empty, a
    /// scale is not a positive integer, two units share a scale or a name,
    /// or no unit has scale 1.
    pub fn new(mut units: Vec<Unit>) -> Result<Self, ConversionError> {
        if units.is_empty() {
            return Err(ConversionError::invalid_table("table has no units"));
        }

        for unit in &units {
            if unit.scale <= BigDecimal::from(0) {
                return Err(ConversionError::invalid_table(format!(
                    "unit {:?} has a non-positive scale",
                    unit.name
                )));
            }
            if unit.scale.with_scale_round(0, RoundingMode::Down) != unit.scale {
                return Err(ConversionError::invalid_table(format!(
                    "unit {:?} has a non-integer scale",
                    unit.name
                )));
            }
        }

        units.sort_by(|a, b| a.scale.cmp(&b.scale));

        for pair in units.windows(2) {
            if pair[0].scale == pair[1].scale {
                return Err(ConversionError::invalid_table(format!(
                    "units {:?} and {:?} share a scale",
                    pair[0].name, pair[1].name
                )));
            }
        }

        let mut names: Vec<&str> = units.iter().map(|u| u.name.as_str()).collect();
        names.sort_unstable();
        if names.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(ConversionError::invalid_table("duplicate unit name"));
        }

        let one = BigDecimal::from(1u64);
        if units.iter().filter(|u| u.scale == one).count() != 1 {
            return Err(ConversionError::invalid_table(
                "exactly one unit must have scale 1",
            ));
        }

        Ok(Self { units })
    }

    /// All units, in ascending scale order.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Look up a unit by name.
    pub fn get(&self, name: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.name == name)
    }

    /// The base unit (scale 1; wei for the mainnet table).
    pub fn base_unit(&self) -> &Unit {
        // Scales are distinct positive integers with exactly one equal to 1,
        // and the table is sorted ascending.
        &self.units[0]
    }

    /// Convert a decimal string between two units of this table.
    ///
    /// The identity case (`from == to`) returns the input unchanged, so a
    /// value never round-trips through the formatter needlessly.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::UnknownUnit`] for a name outside the table
    /// and [`ConversionError::InvalidValue`] when `value` is not a plain
    /// non-negative decimal string. Well-formed input never fails, including
    /// zero and very large magnitudes.
    pub fn convert(&self, from: &str, to: &str, value: &str) -> Result<String, ConversionError> {
        let from_unit = self
            .get(from)
            .ok_or_else(|| ConversionError::unknown_unit(from))?;
        let to_unit = self
            .get(to)
            .ok_or_else(|| ConversionError::unknown_unit(to))?;

        if !is_decimal_string(value) {
            return Err(ConversionError::invalid_value(value));
        }
        let parsed = BigDecimal::from_str(value)
            .map_err(|_| ConversionError::invalid_value(value))?;

        Ok(self.convert_between(from_unit, to_unit, value, &parsed))
    }

    /// Recompute the full field mapping after one unit's field changed.
    ///
    /// This is the keystroke-level contract and it never fails:
    ///
    /// - a valid decimal string recomputes every unit's field;
    /// - an empty string resets every field to `""`;
    /// - anything else (in-progress input like `"12."`, or garbage like
    ///   `"abc"`) echoes the raw string into the source field and leaves all
    ///   sibling fields at their previous values, so partially-typed input
    ///   does not wipe the screen.
    ///
    /// An unknown `source` name returns `current` unchanged.
    pub fn recompute(&self, source: &str, raw: &str, current: &FieldValues) -> FieldValues {
        let Some(source_unit) = self.get(source) else {
            return current.clone();
        };

        if raw.is_empty() {
            return self
                .units
                .iter()
                .map(|u| (u.name.clone(), String::new()))
                .collect();
        }

        let parsed = if is_decimal_string(raw) {
            BigDecimal::from_str(raw).ok()
        } else {
            None
        };
        let Some(parsed) = parsed else {
            return self.echo_source(source_unit, raw, current);
        };

        self.units
            .iter()
            .map(|u| {
                (
                    u.name.clone(),
                    self.convert_between(source_unit, u, raw, &parsed),
                )
            })
            .collect()
    }

    /// In-progress input: keep siblings, echo the raw string into the source
    /// field only.
    fn echo_source(&self, source: &Unit, raw: &str, current: &FieldValues) -> FieldValues {
        let mut next = current.clone();
        next.insert(source.name.clone(), raw.to_owned());
        next
    }

    fn convert_between(&self, from: &Unit, to: &Unit, raw: &str, parsed: &BigDecimal) -> String {
        if from.name == to.name {
            return raw.to_owned();
        }

        // trunc(v * Sf) / St, truncated to the display precision ceiling.
        let base_amount = (parsed * &from.scale).with_scale_round(0, RoundingMode::Down);
        let quotient = base_amount / &to.scale;
        quotient
            .with_scale_round(MAX_DECIMAL_PLACES, RoundingMode::Down)
            .normalized()
            // Always decimal notation; Display switches to exponential form
            // for large magnitudes
            .to_plain_string()
    }
}

/// Strict decimal-string check: digits, at most one decimal point, at least
/// one digit on each side of the point, no sign, no exponent.
///
/// A trailing point (`"12."`) is rejected so that mid-keystroke input is
/// treated as in-progress rather than recomputed.
fn is_decimal_string(s: &str) -> bool {
    let mut seen_point = false;
    let mut digits_before = 0usize;
    let mut digits_after = 0usize;

    for c in s.chars() {
        match c {
            '0'..='9' => {
                if seen_point {
                    digits_after += 1;
                } else {
                    digits_before += 1;
                }
            }
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }

    digits_before > 0 && (!seen_point || digits_after > 0)
}
