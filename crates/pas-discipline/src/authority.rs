//! # Authority Resolver
//!
//! Decides which body has the power to settle a case, and whether a
//! committee case must escalate to HQ. Both functions are pure: same inputs
//! always produce the same answer, independent of call order or any engine
//! state.
//!
//! The resolver is invoked exactly once per complaint, at the first
//! `finding` action; the engine freezes the result into
//! `decision_authority` and never recomputes it, even when later facts
//! would change the outcome. An auditor reading the case years later must
//! see the routing that was actually in force.

use pas_core::{PunishmentBand, SeverityLevel};

use crate::complaint::{Article, DecisionAuthority};
use crate::policy::DisciplinePolicy;

/// Resolve which body decides a case.
///
/// An Article 30 first offense below the configured committee severity
/// threshold is settled by the direct superior. Article 31, any repeat
/// offense, or severity at/above the threshold routes to a discipline
/// committee.
pub fn resolve_authority(
    article: Article,
    severity_level: SeverityLevel,
    offense_occurrence: u32,
    policy: &DisciplinePolicy,
) -> DecisionAuthority {
    if matches!(article, Article::Article31) {
        return DecisionAuthority::DisciplineCommittee;
    }
    if offense_occurrence > 1 {
        return DecisionAuthority::DisciplineCommittee;
    }
    if severity_level >= policy.committee_severity_threshold {
        return DecisionAuthority::DisciplineCommittee;
    }
    DecisionAuthority::DirectSuperior
}

/// Whether a committee case must be forwarded to HQ.
///
/// True when the severity reaches the configured HQ band, or when the
/// committee's recommended punishment exceeds the center committee's
/// authority ceiling.
pub fn requires_hq_escalation(
    severity_level: SeverityLevel,
    recommended_punishment: Option<PunishmentBand>,
    policy: &DisciplinePolicy,
) -> bool {
    if severity_level >= policy.hq_severity_band {
        return true;
    }
    matches!(recommended_punishment, Some(band) if band > policy.committee_punishment_ceiling)
}
