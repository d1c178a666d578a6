//! # Transition Table
//!
//! The static map of which actions are legal from which statuses. This is
//! the single source of truth consulted by the engine before any guard or
//! side effect runs: an action whose kind is not listed for the current
//! status fails with `InvalidTransition` and mutates nothing.
//!
//! Targets are not recorded here because several depend on guard outcomes
//! (the finding forks by resolved authority, decisions fork by verdict);
//! the engine computes the target after the guards pass.

use crate::action::ActionKind;
use crate::complaint::ComplaintStatus;

impl ActionKind {
    /// The statuses this action may be applied from.
    pub fn allowed_from(&self) -> &'static [ComplaintStatus] {
        match self {
            Self::Notification => &[ComplaintStatus::UnderHrReview],
            Self::Rebuttal | Self::RebuttalDeadlineLapsed => &[
                ComplaintStatus::WaitingForRebuttal,
                ComplaintStatus::CommitteeWaitingRebuttal,
            ],
            Self::Finding => &[
                ComplaintStatus::UnderHrAnalysis,
                ComplaintStatus::CommitteeAnalysis,
            ],
            Self::AssignCommittee => &[
                ComplaintStatus::UnderHrReview,
                ComplaintStatus::AwaitingSuperiorDecision,
            ],
            Self::ForwardToCommittee => &[ComplaintStatus::WithDisciplineCommittee],
            Self::Decision => &[
                ComplaintStatus::AwaitingSuperiorDecision,
                ComplaintStatus::InvestigationComplete,
            ],
            Self::ForwardToHq => &[ComplaintStatus::InvestigationComplete],
            Self::HqDecision => &[ComplaintStatus::AwaitingHqDecision],
            Self::SubmitAppeal => &[ComplaintStatus::Decided, ComplaintStatus::DecidedByHq],
            Self::AppealDecision => &[ComplaintStatus::OnAppeal],
            Self::Close => &[
                ComplaintStatus::Decided,
                ComplaintStatus::DecidedByHq,
                ComplaintStatus::AppealDecided,
            ],
        }
    }
}

/// Whether the table permits `kind` from `status`.
pub fn is_allowed(status: ComplaintStatus, kind: ActionKind) -> bool {
    kind.allowed_from().contains(&status)
}

/// The actions the table permits from `status`.
pub fn valid_actions(status: ComplaintStatus) -> Vec<ActionKind> {
    ActionKind::all()
        .iter()
        .copied()
        .filter(|kind| is_allowed(status, *kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses_accept_nothing() {
        assert!(valid_actions(ComplaintStatus::ClosedNoLiability).is_empty());
        assert!(valid_actions(ComplaintStatus::ClosedFinal).is_empty());
    }

    #[test]
    fn every_non_terminal_status_has_an_exit() {
        for status in [
            ComplaintStatus::UnderHrReview,
            ComplaintStatus::WaitingForRebuttal,
            ComplaintStatus::UnderHrAnalysis,
            ComplaintStatus::AwaitingSuperiorDecision,
            ComplaintStatus::WithDisciplineCommittee,
            ComplaintStatus::CommitteeWaitingRebuttal,
            ComplaintStatus::CommitteeAnalysis,
            ComplaintStatus::InvestigationComplete,
            ComplaintStatus::AwaitingHqDecision,
            ComplaintStatus::Decided,
            ComplaintStatus::DecidedByHq,
            ComplaintStatus::OnAppeal,
            ComplaintStatus::AppealDecided,
        ] {
            assert!(
                !valid_actions(status).is_empty(),
                "status {status} has no valid actions"
            );
        }
    }

    #[test]
    fn registration_status_accepts_notification_and_committee_assignment() {
        let actions = valid_actions(ComplaintStatus::UnderHrReview);
        assert!(actions.contains(&ActionKind::Notification));
        assert!(actions.contains(&ActionKind::AssignCommittee));
        assert_eq!(actions.len(), 2);
    }

    #[test]
    fn rebuttal_and_forced_lapse_share_sources() {
        assert_eq!(
            ActionKind::Rebuttal.allowed_from(),
            ActionKind::RebuttalDeadlineLapsed.allowed_from()
        );
    }

    #[test]
    fn decision_valid_from_superior_and_committee_tracks() {
        assert!(is_allowed(
            ComplaintStatus::AwaitingSuperiorDecision,
            ActionKind::Decision
        ));
        assert!(is_allowed(
            ComplaintStatus::InvestigationComplete,
            ActionKind::Decision
        ));
        assert!(!is_allowed(ComplaintStatus::Decided, ActionKind::Decision));
    }

    #[test]
    fn hq_forwarding_only_after_investigation() {
        assert!(is_allowed(
            ComplaintStatus::InvestigationComplete,
            ActionKind::ForwardToHq
        ));
        assert!(!is_allowed(
            ComplaintStatus::WithDisciplineCommittee,
            ActionKind::ForwardToHq
        ));
    }

    #[test]
    fn appeal_only_from_decided_states() {
        assert!(is_allowed(ComplaintStatus::Decided, ActionKind::SubmitAppeal));
        assert!(is_allowed(
            ComplaintStatus::DecidedByHq,
            ActionKind::SubmitAppeal
        ));
        assert!(!is_allowed(
            ComplaintStatus::ClosedFinal,
            ActionKind::SubmitAppeal
        ));
        assert!(!is_allowed(
            ComplaintStatus::AppealDecided,
            ActionKind::SubmitAppeal
        ));
    }

    #[test]
    fn close_sources() {
        assert!(is_allowed(ComplaintStatus::Decided, ActionKind::Close));
        assert!(is_allowed(ComplaintStatus::DecidedByHq, ActionKind::Close));
        assert!(is_allowed(ComplaintStatus::AppealDecided, ActionKind::Close));
        assert!(!is_allowed(ComplaintStatus::OnAppeal, ActionKind::Close));
    }

    #[test]
    fn forwarded_to_hq_is_transient() {
        // The hop through FORWARDED_TO_HQ happens inside one apply; nothing
        // is ever parked there waiting for a caller action.
        assert!(valid_actions(ComplaintStatus::ForwardedToHq).is_empty());
    }
}
