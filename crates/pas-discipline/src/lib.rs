#![deny(missing_docs)]

//! # pas-discipline — Complaint Lifecycle Engine
//!
//! Drives an Article 30/31 disciplinary complaint from registration through
//! notification, rebuttal, investigative finding, authority-routed decision,
//! optional committee and HQ escalation, and appeal — with deadline
//! enforcement and an append-only audit timeline.
//!
//! The engine is a library, not a service: it does no I/O, owns no clock,
//! and holds no locks. Its boundary is one function —
//! [`DisciplineEngine::apply`] — plus the pure helpers
//! [`authority::resolve_authority`] and
//! [`deadline::compute_deadline`]/[`deadline::is_lapsed`]. Persistence,
//! committee routing, scheduling, and audit-log storage are collaborators
//! on the caller's side of the boundary.
//!
//! - **Complaint** ([`complaint`]): The aggregate root and its 16-state
//!   lifecycle enum. All workflow fields mutate only inside `apply`.
//!
//! - **Actions** ([`action`]): The closed action enum, one payload type per
//!   variant. No string dispatch, no unmatched-action fallthrough.
//!
//! - **Transition table** ([`transition`]): The static map of which actions
//!   are legal from which statuses.
//!
//! - **Authority resolver** ([`authority`]): Pure routing between the
//!   direct superior and the discipline committee, plus the HQ escalation
//!   rule. Resolved once per case and frozen.
//!
//! - **Deadline tracker** ([`deadline`]): Pure rebuttal-deadline arithmetic
//!   and the sweep selector for the scheduler collaborator.
//!
//! - **Appeals** ([`appeal`]): The nested `Open → Upheld | Modified |
//!   Overturned` sub-workflow attached to a decided case.
//!
//! - **Timeline** ([`timeline`]): Event value objects for the audit sink,
//!   one per transition hop.
//!
//! - **Policy** ([`policy`]): Deployment configuration for windows and
//!   escalation thresholds, loaded from YAML and validated at engine
//!   construction.

pub mod action;
pub mod appeal;
pub mod authority;
pub mod complaint;
pub mod deadline;
pub mod engine;
pub mod error;
pub mod policy;
pub mod timeline;
pub mod transition;

// Re-export primary types for ergonomic imports.

// Error types
pub use error::{DisciplineError, GuardViolation, InvariantViolation};

// Aggregate and classification
pub use complaint::{
    Article, ComplainantType, Complaint, ComplaintStatus, DecisionAuthority, Finding,
};

// Actions
pub use action::{Action, ActionKind, FindingInput, Verdict};

// Appeals
pub use appeal::{AppealDecision, ComplaintAppeal};

// Engine
pub use engine::{ApplyOutcome, DisciplineEngine};

// Policy
pub use policy::{DisciplinePolicy, PolicyError};

// Timeline
pub use timeline::{Actor, SystemActor, TimelineEvent};
