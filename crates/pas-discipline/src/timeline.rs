//! # Timeline Events
//!
//! The append-only audit stream of the complaint lifecycle. One event is
//! emitted per successful transition hop; events are value objects and are
//! never mutated or deleted. Durable storage belongs to the audit-log
//! collaborator — the engine only produces the values.

use serde::{Deserialize, Serialize};

use pas_core::{ComplaintId, EmployeeId, Timestamp};

use crate::action::ActionKind;
use crate::complaint::ComplaintStatus;

/// The identity performing an action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    /// A named employee (HR officer, superior, committee member, reviewer).
    Employee(EmployeeId),
    /// A platform process acting without a human in the loop.
    System(SystemActor),
}

impl Actor {
    /// The employee behind this actor, if it is one.
    pub fn as_employee(&self) -> Option<&EmployeeId> {
        match self {
            Self::Employee(id) => Some(id),
            Self::System(_) => None,
        }
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Employee(id) => write!(f, "employee:{id}"),
            Self::System(actor) => write!(f, "system:{actor}"),
        }
    }
}

/// System identities that can drive forced transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemActor {
    /// The periodic sweep that fires lapsed rebuttal deadlines.
    DeadlineSweep,
}

impl SystemActor {
    /// The canonical name of this system identity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeadlineSweep => "deadline-sweep",
        }
    }
}

impl std::fmt::Display for SystemActor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single entry in a complaint's audit timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// The complaint the event belongs to.
    pub complaint_id: ComplaintId,
    /// The action that caused the transition.
    pub action: ActionKind,
    /// Status before the transition.
    pub from_status: ComplaintStatus,
    /// Status after the transition.
    pub to_status: ComplaintStatus,
    /// Who performed the action.
    pub performed_by: Actor,
    /// When the action was performed (UTC).
    pub performed_at: Timestamp,
    /// Denormalized summary of computed side effects, for audit readability
    /// (e.g., "authority resolved: DISCIPLINE_COMMITTEE; occurrence #2").
    pub notes: Option<String>,
}

/// Build a timeline event. Pure — no clock, no persistence.
pub fn emit(
    complaint_id: ComplaintId,
    action: ActionKind,
    from_status: ComplaintStatus,
    to_status: ComplaintStatus,
    performed_by: Actor,
    performed_at: Timestamp,
    notes: Option<String>,
) -> TimelineEvent {
    TimelineEvent {
        complaint_id,
        action,
        from_status,
        to_status,
        performed_by,
        performed_at,
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_preserves_all_fields() {
        let complaint_id = ComplaintId::new();
        let actor = Actor::Employee(EmployeeId::new());
        let at = Timestamp::now();
        let event = emit(
            complaint_id.clone(),
            ActionKind::Notification,
            ComplaintStatus::UnderHrReview,
            ComplaintStatus::WaitingForRebuttal,
            actor.clone(),
            at.clone(),
            Some("rebuttal deadline 2026-03-08T09:00:00Z".to_string()),
        );
        assert_eq!(event.complaint_id, complaint_id);
        assert_eq!(event.action, ActionKind::Notification);
        assert_eq!(event.from_status, ComplaintStatus::UnderHrReview);
        assert_eq!(event.to_status, ComplaintStatus::WaitingForRebuttal);
        assert_eq!(event.performed_by, actor);
        assert_eq!(event.performed_at, at);
        assert!(event.notes.unwrap().contains("deadline"));
    }

    #[test]
    fn employee_actor_display() {
        let id = EmployeeId::new();
        let actor = Actor::Employee(id.clone());
        assert_eq!(format!("{actor}"), format!("employee:{id}"));
        assert_eq!(actor.as_employee(), Some(&id));
    }

    #[test]
    fn system_actor_display() {
        let actor = Actor::System(SystemActor::DeadlineSweep);
        assert_eq!(format!("{actor}"), "system:deadline-sweep");
        assert!(actor.as_employee().is_none());
    }

    #[test]
    fn event_serde_roundtrip() {
        let event = emit(
            ComplaintId::new(),
            ActionKind::RebuttalDeadlineLapsed,
            ComplaintStatus::WaitingForRebuttal,
            ComplaintStatus::UnderHrAnalysis,
            Actor::System(SystemActor::DeadlineSweep),
            Timestamp::now(),
            None,
        );
        let json = serde_json::to_string(&event).unwrap();
        let back: TimelineEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
