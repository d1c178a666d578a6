//! # Appeal Sub-Workflow
//!
//! A decided complaint can be appealed once per round: `Open → Upheld |
//! Modified | Overturned`. The appeal is owned by its parent complaint and
//! closes back into the parent's status through the engine's `close` action.
//!
//! At most one appeal may be open at a time; the engine enforces this with
//! [`GuardViolation::AppealAlreadyOpen`](crate::error::GuardViolation).

use serde::{Deserialize, Serialize};

use pas_core::{ComplaintId, EmployeeId, Timestamp};

/// The outcome of an appeal review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppealDecision {
    /// The original decision stands unchanged.
    Upheld,
    /// The original decision stands, with a revised punishment.
    Modified,
    /// The original decision is vacated; the case closes without liability.
    Overturned,
}

impl AppealDecision {
    /// The canonical string name of this decision.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upheld => "UPHELD",
            Self::Modified => "MODIFIED",
            Self::Overturned => "OVERTURNED",
        }
    }
}

impl std::fmt::Display for AppealDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An appeal raised against a decided complaint.
///
/// Created open (no decision) by the `submitAppeal` action and closed by
/// `appealDecision`, which also records the reviewer. The reviewer must be
/// distinct from every employee who participated in the original decision;
/// that guard lives in the engine, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintAppeal {
    /// The parent complaint.
    pub complaint_id: ComplaintId,
    /// When the appeal was submitted (UTC).
    pub appeal_date: Timestamp,
    /// The appellant's stated grounds.
    pub appeal_reason: String,
    /// The employee who decided the appeal. `None` while the appeal is open.
    pub reviewer_employee_id: Option<EmployeeId>,
    /// The review outcome. `None` while the appeal is open.
    pub decision: Option<AppealDecision>,
    /// The reviewer's reasoning.
    pub decision_reason: Option<String>,
    /// Revised punishment, set when the decision is [`AppealDecision::Modified`].
    pub new_punishment: Option<String>,
}

impl ComplaintAppeal {
    /// Open a new appeal against the given complaint.
    pub fn open(
        complaint_id: ComplaintId,
        appeal_reason: impl Into<String>,
        appeal_date: Timestamp,
    ) -> Self {
        Self {
            complaint_id,
            appeal_date,
            appeal_reason: appeal_reason.into(),
            reviewer_employee_id: None,
            decision: None,
            decision_reason: None,
            new_punishment: None,
        }
    }

    /// Whether this appeal is still awaiting review.
    pub fn is_open(&self) -> bool {
        self.decision.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_appeal_has_no_decision() {
        let appeal = ComplaintAppeal::open(ComplaintId::new(), "excessive", Timestamp::now());
        assert!(appeal.is_open());
        assert!(appeal.reviewer_employee_id.is_none());
        assert!(appeal.decision_reason.is_none());
    }

    #[test]
    fn decided_appeal_is_closed() {
        let mut appeal = ComplaintAppeal::open(ComplaintId::new(), "excessive", Timestamp::now());
        appeal.decision = Some(AppealDecision::Upheld);
        assert!(!appeal.is_open());
    }

    #[test]
    fn appeal_decision_names() {
        assert_eq!(AppealDecision::Upheld.as_str(), "UPHELD");
        assert_eq!(AppealDecision::Modified.as_str(), "MODIFIED");
        assert_eq!(AppealDecision::Overturned.as_str(), "OVERTURNED");
    }

    #[test]
    fn appeal_decision_display_matches_as_str() {
        assert_eq!(format!("{}", AppealDecision::Overturned), "OVERTURNED");
    }

    #[test]
    fn appeal_serde_roundtrip() {
        let appeal = ComplaintAppeal::open(ComplaintId::new(), "wrong finding", Timestamp::now());
        let json = serde_json::to_string(&appeal).unwrap();
        let back: ComplaintAppeal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, appeal);
    }
}
