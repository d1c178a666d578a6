//! # Severity & Punishment Bands
//!
//! Band primitives shared by the offense catalog and the discipline engine.
//! Both scales run from 1 (lightest) to 5 (heaviest); the concrete meaning
//! of each band (warning, salary deduction, demotion, dismissal, ...) lives
//! in tenant configuration, not in code.
//!
//! ## Validation
//!
//! Bands are validated once at construction. [`SeverityLevel::MIN`],
//! [`SeverityLevel::MID`], and [`SeverityLevel::MAX`] (and the
//! [`PunishmentBand`] equivalents) exist so that policy defaults can be
//! written without a fallible constructor.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The severity band of an offense, 1..=5.
///
/// Severity drives authority routing: offenses at or above the configured
/// committee threshold cannot be settled by a direct superior, and offenses
/// at the maximum band force HQ escalation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeverityLevel(u8);

impl SeverityLevel {
    /// The lightest severity band.
    pub const MIN: Self = Self(1);
    /// The mid-scale severity band.
    pub const MID: Self = Self(3);
    /// The heaviest severity band.
    pub const MAX: Self = Self(5);

    /// Create a severity level, validating the 1..=5 range.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSeverityLevel`] for values outside
    /// the band scale.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(ValidationError::InvalidSeverityLevel(value));
        }
        Ok(Self(value))
    }

    /// The band as a plain number.
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Whether this is the maximum severity band.
    pub fn is_max_band(&self) -> bool {
        *self == Self::MAX
    }
}

impl std::fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The punishment band recommended or imposed in a case, 1..=5.
///
/// Committee recommendations are compared against the configured center
/// committee authority ceiling; a recommendation above the ceiling forces
/// HQ escalation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PunishmentBand(u8);

impl PunishmentBand {
    /// The lightest punishment band.
    pub const MIN: Self = Self(1);
    /// The mid-scale punishment band.
    pub const MID: Self = Self(3);
    /// The heaviest punishment band.
    pub const MAX: Self = Self(5);

    /// Create a punishment band, validating the 1..=5 range.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPunishmentBand`] for values outside
    /// the band scale.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(ValidationError::InvalidPunishmentBand(value));
        }
        Ok(Self(value))
    }

    /// The band as a plain number.
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for PunishmentBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_accepts_band_scale() {
        for value in 1..=5u8 {
            assert_eq!(SeverityLevel::new(value).unwrap().as_u8(), value);
        }
    }

    #[test]
    fn severity_rejects_out_of_band() {
        assert!(SeverityLevel::new(0).is_err());
        assert!(SeverityLevel::new(6).is_err());
        assert!(SeverityLevel::new(255).is_err());
    }

    #[test]
    fn severity_consts_are_valid() {
        assert_eq!(SeverityLevel::MIN.as_u8(), 1);
        assert_eq!(SeverityLevel::MID.as_u8(), 3);
        assert_eq!(SeverityLevel::MAX.as_u8(), 5);
    }

    #[test]
    fn severity_max_band_detection() {
        assert!(SeverityLevel::MAX.is_max_band());
        assert!(!SeverityLevel::new(4).unwrap().is_max_band());
    }

    #[test]
    fn severity_ordering() {
        assert!(SeverityLevel::new(2).unwrap() < SeverityLevel::new(4).unwrap());
        assert!(SeverityLevel::MAX > SeverityLevel::MID);
    }

    #[test]
    fn punishment_band_validation() {
        assert!(PunishmentBand::new(3).is_ok());
        assert!(PunishmentBand::new(0).is_err());
        assert!(PunishmentBand::new(9).is_err());
    }

    #[test]
    fn punishment_band_ordering() {
        assert!(PunishmentBand::new(4).unwrap() > PunishmentBand::MID);
    }

    #[test]
    fn band_display() {
        assert_eq!(format!("{}", SeverityLevel::MID), "3");
        assert_eq!(format!("{}", PunishmentBand::MAX), "5");
    }

    #[test]
    fn band_serde_roundtrip() {
        let level = SeverityLevel::new(4).unwrap();
        let json = serde_json::to_string(&level).unwrap();
        assert_eq!(json, "4");
        let back: SeverityLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, level);
    }
}
