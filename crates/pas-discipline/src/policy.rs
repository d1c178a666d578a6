//! # Discipline Policy Configuration
//!
//! Deployment-configured values the engine consults at apply time: rebuttal
//! window lengths, the committee severity threshold, the HQ escalation band,
//! the center committee punishment ceiling, and the appeal window.
//!
//! Thresholds are configuration, never code: the punishment ceiling in
//! particular is owned by the committee service and fed into the policy file
//! per deployment. The engine validates the policy once, at engine
//! construction, so apply-time code can trust every value.
//!
//! Policies load from YAML:
//!
//! ```yaml
//! center_rebuttal_days: 7
//! committee_rebuttal_days: 10
//! committee_severity_threshold: 3
//! hq_severity_band: 5
//! committee_punishment_ceiling: 3
//! appeal_window_days: 30
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pas_core::{PunishmentBand, SeverityLevel};

/// Configured policy values for the complaint lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisciplinePolicy {
    /// Calendar days of the rebuttal window after a center-level notification.
    pub center_rebuttal_days: u32,
    /// Calendar days of the rebuttal window after a committee-level
    /// re-notification.
    pub committee_rebuttal_days: u32,
    /// Severity band at or above which an Article 30 first offense is routed
    /// to a discipline committee instead of the direct superior.
    pub committee_severity_threshold: SeverityLevel,
    /// Severity band at or above which a committee case must be forwarded
    /// to HQ.
    pub hq_severity_band: SeverityLevel,
    /// Heaviest punishment band the center committee may impose itself; a
    /// committee recommendation above this forces HQ escalation. Sourced
    /// from the committee service per deployment.
    pub committee_punishment_ceiling: PunishmentBand,
    /// Calendar days after the decision date during which an appeal is
    /// admissible.
    pub appeal_window_days: u32,
}

impl Default for DisciplinePolicy {
    fn default() -> Self {
        Self {
            center_rebuttal_days: 7,
            committee_rebuttal_days: 10,
            committee_severity_threshold: SeverityLevel::MID,
            hq_severity_band: SeverityLevel::MAX,
            committee_punishment_ceiling: PunishmentBand::MID,
            appeal_window_days: 30,
        }
    }
}

impl DisciplinePolicy {
    /// Validate the policy values.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError`] when a window is zero days or the committee
    /// threshold exceeds the HQ band (which would route cases to a committee
    /// that must immediately escalate everything).
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.center_rebuttal_days == 0 {
            return Err(PolicyError::ZeroWindow {
                field: "center_rebuttal_days",
            });
        }
        if self.committee_rebuttal_days == 0 {
            return Err(PolicyError::ZeroWindow {
                field: "committee_rebuttal_days",
            });
        }
        if self.appeal_window_days == 0 {
            return Err(PolicyError::ZeroWindow {
                field: "appeal_window_days",
            });
        }
        // Serde deserializes band newtypes transparently, so loaded
        // policies must be range-checked here.
        let bands = [
            ("committee_severity_threshold", self.committee_severity_threshold.as_u8()),
            ("hq_severity_band", self.hq_severity_band.as_u8()),
            ("committee_punishment_ceiling", self.committee_punishment_ceiling.as_u8()),
        ];
        for (field, value) in bands {
            if !(SeverityLevel::MIN.as_u8()..=SeverityLevel::MAX.as_u8()).contains(&value) {
                return Err(PolicyError::BandOutOfRange { field, value });
            }
        }
        if self.committee_severity_threshold > self.hq_severity_band {
            return Err(PolicyError::ThresholdOrder {
                committee: self.committee_severity_threshold,
                hq: self.hq_severity_band,
            });
        }
        Ok(())
    }

    /// Load and validate a policy from a YAML document.
    ///
    /// Missing fields take their defaults, so a deployment only overrides
    /// what differs.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::Parse`] for malformed YAML and the
    /// [`DisciplinePolicy::validate`] errors for invalid values.
    pub fn from_yaml_str(input: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_yaml::from_str(input)?;
        policy.validate()?;
        Ok(policy)
    }
}

/// Errors constructing or loading a discipline policy.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// A time window is configured as zero days.
    #[error("policy field {field} must be at least 1 day")]
    ZeroWindow {
        /// The offending field name.
        field: &'static str,
    },

    /// The committee threshold is above the HQ band.
    #[error(
        "committee severity threshold {committee} exceeds HQ escalation band {hq}"
    )]
    ThresholdOrder {
        /// The configured committee threshold.
        committee: SeverityLevel,
        /// The configured HQ band.
        hq: SeverityLevel,
    },

    /// A band value outside the 1..=5 scale reached the policy, typically
    /// from a hand-edited policy file.
    #[error("policy field {field} is {value}, outside the 1..=5 band scale")]
    BandOutOfRange {
        /// The offending field name.
        field: &'static str,
        /// The out-of-range value.
        value: u8,
    },

    /// The YAML document could not be parsed.
    #[error("policy parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}
