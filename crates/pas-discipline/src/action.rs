//! # Workflow Actions
//!
//! The closed set of actions that can be applied to a complaint, with one
//! payload shape per variant. There is no string dispatch anywhere: every
//! action arrives as a variant of [`Action`], so an unmatched action is a
//! compile error, not a runtime fallthrough.
//!
//! [`ActionKind`] is the payload-free mirror used by the transition table
//! and the audit timeline.

use serde::{Deserialize, Serialize};

use pas_core::{CommitteeId, PunishmentBand};

use crate::appeal::AppealDecision;

/// The investigator's conclusion as submitted with the `finding` action.
///
/// The engine stores [`Finding::GuiltyNoRebuttal`](crate::complaint::Finding)
/// instead of `Guilty` when the rebuttal window lapsed unanswered; callers
/// never submit the by-default value themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingInput {
    /// The accused is found responsible.
    Guilty,
    /// The accused is cleared.
    NotGuilty,
}

/// The deciding body's verdict, for both center-level and HQ decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Liability confirmed; a punishment is imposed.
    Guilty {
        /// Description of the imposed punishment.
        punishment: String,
    },
    /// No liability; the case closes immediately.
    NotGuilty,
}

/// An action applied to a complaint, with its payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Notify the accused employee and open the rebuttal window.
    Notification,
    /// Record the accused employee's rebuttal.
    Rebuttal {
        /// Optional summary of the rebuttal content for the audit trail.
        notes: Option<String>,
    },
    /// Forced transition when the rebuttal window lapses unanswered.
    /// Invoked by the deadline sweep as a system actor.
    RebuttalDeadlineLapsed,
    /// Record the investigative finding; resolves the decision authority
    /// on first invocation.
    Finding {
        /// The investigator's conclusion.
        finding: FindingInput,
        /// Punishment band recommended by a committee investigation, used
        /// by the HQ escalation rule.
        recommended_punishment: Option<PunishmentBand>,
    },
    /// Assign the case to a center discipline committee.
    AssignCommittee {
        /// The committee taking the case.
        committee_id: CommitteeId,
    },
    /// Restart the rebuttal cycle under the committee.
    ForwardToCommittee {
        /// Committee to assign when none is assigned yet (a case that
        /// forked to the committee track at the finding has no committee).
        committee_id: Option<CommitteeId>,
    },
    /// Decide the case at center level (direct superior, or the committee
    /// when no HQ escalation is required).
    Decision {
        /// The verdict.
        verdict: Verdict,
    },
    /// Forward a committee case to the HQ committee.
    ForwardToHq {
        /// The HQ committee receiving the case.
        hq_committee_id: CommitteeId,
    },
    /// Decide the case at HQ level.
    HqDecision {
        /// The verdict.
        verdict: Verdict,
    },
    /// Open an appeal against the decision.
    SubmitAppeal {
        /// The appellant's stated grounds.
        reason: String,
    },
    /// Decide the open appeal.
    AppealDecision {
        /// The review outcome.
        decision: AppealDecision,
        /// The reviewer's reasoning.
        reason: String,
        /// Revised punishment, required when the outcome is
        /// [`AppealDecision::Modified`].
        new_punishment: Option<String>,
    },
    /// Close the case.
    Close {
        /// Closure reason, required when no appeal preceded the close.
        reason: Option<String>,
    },
}

impl Action {
    /// The payload-free kind of this action.
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Notification => ActionKind::Notification,
            Self::Rebuttal { .. } => ActionKind::Rebuttal,
            Self::RebuttalDeadlineLapsed => ActionKind::RebuttalDeadlineLapsed,
            Self::Finding { .. } => ActionKind::Finding,
            Self::AssignCommittee { .. } => ActionKind::AssignCommittee,
            Self::ForwardToCommittee { .. } => ActionKind::ForwardToCommittee,
            Self::Decision { .. } => ActionKind::Decision,
            Self::ForwardToHq { .. } => ActionKind::ForwardToHq,
            Self::HqDecision { .. } => ActionKind::HqDecision,
            Self::SubmitAppeal { .. } => ActionKind::SubmitAppeal,
            Self::AppealDecision { .. } => ActionKind::AppealDecision,
            Self::Close { .. } => ActionKind::Close,
        }
    }
}

/// The kind of a workflow action, without its payload.
///
/// Used as the key of the transition table and as the action column of
/// timeline events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// `notification`
    Notification,
    /// `rebuttal`
    Rebuttal,
    /// `rebuttalDeadline`
    RebuttalDeadlineLapsed,
    /// `finding`
    Finding,
    /// `assignCommittee`
    AssignCommittee,
    /// `forwardToCommittee`
    ForwardToCommittee,
    /// `decision`
    Decision,
    /// `forwardToHq`
    ForwardToHq,
    /// `hqDecision`
    HqDecision,
    /// `submitAppeal`
    SubmitAppeal,
    /// `appealDecision`
    AppealDecision,
    /// `close`
    Close,
}

impl ActionKind {
    /// All action kinds as a slice.
    pub fn all() -> &'static [ActionKind] {
        &[
            Self::Notification,
            Self::Rebuttal,
            Self::RebuttalDeadlineLapsed,
            Self::Finding,
            Self::AssignCommittee,
            Self::ForwardToCommittee,
            Self::Decision,
            Self::ForwardToHq,
            Self::HqDecision,
            Self::SubmitAppeal,
            Self::AppealDecision,
            Self::Close,
        ]
    }

    /// The canonical action name as it appears in the audit trail.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Notification => "notification",
            Self::Rebuttal => "rebuttal",
            Self::RebuttalDeadlineLapsed => "rebuttalDeadline",
            Self::Finding => "finding",
            Self::AssignCommittee => "assignCommittee",
            Self::ForwardToCommittee => "forwardToCommittee",
            Self::Decision => "decision",
            Self::ForwardToHq => "forwardToHq",
            Self::HqDecision => "hqDecision",
            Self::SubmitAppeal => "submitAppeal",
            Self::AppealDecision => "appealDecision",
            Self::Close => "close",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Action::Notification.kind(), ActionKind::Notification);
        assert_eq!(
            Action::Rebuttal { notes: None }.kind(),
            ActionKind::Rebuttal
        );
        assert_eq!(
            Action::Finding {
                finding: FindingInput::Guilty,
                recommended_punishment: None,
            }
            .kind(),
            ActionKind::Finding
        );
        assert_eq!(Action::Close { reason: None }.kind(), ActionKind::Close);
    }

    #[test]
    fn all_kinds_has_twelve_entries() {
        assert_eq!(ActionKind::all().len(), 12);
    }

    #[test]
    fn action_names_are_unique() {
        let mut names: Vec<&str> = ActionKind::all().iter().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ActionKind::all().len());
    }

    #[test]
    fn forced_deadline_action_name() {
        assert_eq!(
            ActionKind::RebuttalDeadlineLapsed.as_str(),
            "rebuttalDeadline"
        );
    }

    #[test]
    fn action_serde_roundtrip() {
        let action = Action::Decision {
            verdict: Verdict::Guilty {
                punishment: "written reprimand".to_string(),
            },
        };
        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }
}
