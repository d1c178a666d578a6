//! # Discipline Error Types
//!
//! Structured error hierarchy for the complaint lifecycle engine. Every
//! variant carries diagnostic context: the complaint, the state at the time
//! of failure, and actionable information for operators.
//!
//! The taxonomy separates four classes with different handling:
//!
//! - [`DisciplineError::InvalidTransition`] — the action is not allowed from
//!   the current status. Recoverable; surfaced to the caller as a
//!   4xx-equivalent.
//! - [`DisciplineError::Guard`] — the transition exists but a precondition
//!   failed (open appeal, reviewer conflict, missing payload field, ...).
//!   Recoverable.
//! - [`DisciplineError::ConcurrencyConflict`] — stale optimistic-lock
//!   version; the caller reloads and retries. The engine never retries.
//! - [`DisciplineError::Invariant`] — a defensive check caught corrupted
//!   aggregate state. Not recoverable; abort the request.

use thiserror::Error;

use pas_core::{ComplaintId, EmployeeId, Timestamp};

use crate::action::ActionKind;
use crate::complaint::{ComplaintStatus, DecisionAuthority, Finding};

/// Errors arising from complaint lifecycle operations.
#[derive(Error, Debug)]
pub enum DisciplineError {
    /// The action is not allowed from the complaint's current status.
    #[error("action {action} is not allowed from status {status} for complaint {complaint_id}")]
    InvalidTransition {
        /// The complaint identifier.
        complaint_id: ComplaintId,
        /// The status at the time of the attempt.
        status: ComplaintStatus,
        /// The attempted action.
        action: ActionKind,
    },

    /// A transition precondition failed.
    #[error(transparent)]
    Guard(#[from] GuardViolation),

    /// The aggregate was modified since it was loaded.
    #[error(
        "stale write on complaint {complaint_id}: expected version {expected}, found {actual}"
    )]
    ConcurrencyConflict {
        /// The complaint identifier.
        complaint_id: ComplaintId,
        /// The version the caller loaded.
        expected: u64,
        /// The version actually found.
        actual: u64,
    },

    /// A defensive consistency check failed. Programming error, never
    /// expected from well-formed callers.
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl DisciplineError {
    /// Whether the caller can recover by correcting its request (or, for
    /// concurrency conflicts, by reloading and retrying).
    ///
    /// Only [`DisciplineError::Invariant`] is unrecoverable — it means the
    /// aggregate itself is inconsistent and the request must be aborted.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Invariant(_))
    }
}

/// Guard failures: the transition exists but a precondition does not hold.
#[derive(Error, Debug)]
pub enum GuardViolation {
    /// An appeal is already open; only one may be open at a time.
    #[error("complaint {complaint_id} already has an open appeal")]
    AppealAlreadyOpen {
        /// The complaint identifier.
        complaint_id: ComplaintId,
    },

    /// The appeal window has expired.
    #[error("appeal window for complaint {complaint_id} expired at {window_end}")]
    AppealWindowExpired {
        /// The complaint identifier.
        complaint_id: ComplaintId,
        /// The last instant at which an appeal was admissible.
        window_end: Timestamp,
    },

    /// The appeal reviewer participated in the original decision.
    #[error("reviewer {reviewer} participated in the original decision")]
    ReviewerConflict {
        /// The conflicted reviewer.
        reviewer: EmployeeId,
    },

    /// Appeal decisions must be made by a named employee, not a system actor.
    #[error("appeal decisions require an employee reviewer")]
    ReviewerRequired,

    /// The action is reserved for a different decision authority.
    #[error("decision authority is {actual}, action requires {required}")]
    WrongAuthority {
        /// The authority the action requires.
        required: DecisionAuthority,
        /// The authority frozen on the complaint.
        actual: DecisionAuthority,
    },

    /// The case must be forwarded to HQ before it can be decided.
    #[error("complaint {complaint_id} requires HQ escalation and cannot be decided locally")]
    HqEscalationRequired {
        /// The complaint identifier.
        complaint_id: ComplaintId,
    },

    /// HQ forwarding was attempted for a case the center committee can
    /// decide itself.
    #[error("complaint {complaint_id} does not meet the HQ escalation rule")]
    HqEscalationNotRequired {
        /// The complaint identifier.
        complaint_id: ComplaintId,
    },

    /// The forced deadline action fired before the deadline passed.
    #[error("rebuttal deadline {deadline} has not lapsed yet")]
    DeadlineNotLapsed {
        /// The deadline that is still running.
        deadline: Timestamp,
    },

    /// No committee is assigned and none was supplied.
    #[error("complaint {complaint_id} has no assigned committee")]
    MissingCommitteeAssignment {
        /// The complaint identifier.
        complaint_id: ComplaintId,
    },

    /// Closing without a preceding appeal requires a stated reason.
    #[error("closing complaint {complaint_id} without an appeal requires a closure reason")]
    MissingClosureReason {
        /// The complaint identifier.
        complaint_id: ComplaintId,
    },

    /// A modified appeal outcome must state the revised punishment.
    #[error("appeal outcome MODIFIED requires a revised punishment")]
    MissingRevisedPunishment,

    /// A finding is already recorded and the new submission contradicts it.
    #[error("finding already recorded as {recorded}, cannot restate as {submitted}")]
    FindingConflict {
        /// The finding frozen on the complaint.
        recorded: Finding,
        /// The conflicting submission.
        submitted: Finding,
    },
}

/// Defensive consistency checks. These fire only when the aggregate has been
/// corrupted outside the engine; they are logged as fatal assertions and
/// must abort the caller's request.
#[derive(Error, Debug)]
pub enum InvariantViolation {
    /// The decision authority was already resolved; it is set exactly once.
    #[error("decision authority already resolved for complaint {complaint_id}")]
    AuthorityAlreadyResolved {
        /// The complaint identifier.
        complaint_id: ComplaintId,
    },

    /// A decision-stage action found no resolved authority.
    #[error("decision authority not resolved for complaint {complaint_id}")]
    AuthorityNotResolved {
        /// The complaint identifier.
        complaint_id: ComplaintId,
    },

    /// A rebuttal deadline would be overwritten; deadlines are immutable.
    #[error("rebuttal deadline already set for complaint {complaint_id}")]
    DeadlineAlreadySet {
        /// The complaint identifier.
        complaint_id: ComplaintId,
    },

    /// A waiting status has no deadline recorded.
    #[error("no rebuttal deadline recorded for complaint {complaint_id} in status {status}")]
    DeadlineNotSet {
        /// The complaint identifier.
        complaint_id: ComplaintId,
        /// The waiting status missing its deadline.
        status: ComplaintStatus,
    },

    /// A computed transition would depart a terminal status.
    #[error("complaint {complaint_id} is terminal in status {status}")]
    TerminalStateDeparture {
        /// The complaint identifier.
        complaint_id: ComplaintId,
        /// The terminal status.
        status: ComplaintStatus,
    },

    /// The complaint is on appeal but no open appeal exists.
    #[error("no open appeal found for complaint {complaint_id}")]
    NoOpenAppeal {
        /// The complaint identifier.
        complaint_id: ComplaintId,
    },

    /// The appeal stage concluded without a recorded appeal decision.
    #[error("no decided appeal found for complaint {complaint_id}")]
    MissingAppealDecision {
        /// The complaint identifier.
        complaint_id: ComplaintId,
    },

    /// A decided status carries no decision date.
    #[error("no decision date recorded for complaint {complaint_id}")]
    MissingDecisionDate {
        /// The complaint identifier.
        complaint_id: ComplaintId,
    },
}
