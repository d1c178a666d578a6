//! # Complaint Aggregate
//!
//! The disciplinary complaint aggregate root and its classification enums.
//! A complaint is created in [`ComplaintStatus::UnderHrReview`] by the
//! registration layer and is owned thereafter exclusively by the engine:
//! every workflow field on [`Complaint`] is mutated only inside
//! [`DisciplineEngine::apply`](crate::engine::DisciplineEngine::apply).
//!
//! ## Design Choice: Validated Enum over Typestate
//!
//! The status is a validated enum (runtime-checked against the transition
//! table) rather than a typestate encoding. Complaints are stored in
//! databases and transmitted via APIs where the state is not known at
//! compile time, and several actions (`rebuttal`, `finding`, `decision`,
//! `close`) are legal from more than one source state; a validated enum
//! serializes directly via serde and keeps each action a single method.

use serde::{Deserialize, Serialize};

use pas_core::{
    CenterId, CommitteeId, ComplaintId, ComplaintNumber, EmployeeId, OffenseCode, PunishmentBand,
    SeverityLevel, TenantId, Timestamp,
};

use crate::appeal::ComplaintAppeal;
use crate::error::DisciplineError;

// ── Classification ─────────────────────────────────────────────────────

/// The statutory article under which an offense is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Article {
    /// Minor misconduct.
    Article30,
    /// Serious misconduct. Always routed to a discipline committee.
    Article31,
}

impl Article {
    /// The canonical string name of this article.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article30 => "ARTICLE_30",
            Self::Article31 => "ARTICLE_31",
        }
    }
}

impl std::fmt::Display for Article {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Who raised the complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplainantType {
    /// The accused employee's direct or indirect superior.
    Superior,
    /// A colleague at the same center.
    Peer,
    /// The HR office itself (e.g., from an attendance audit).
    HumanResources,
    /// A member of the public or another agency.
    External,
    /// An anonymous report.
    Anonymous,
}

impl ComplainantType {
    /// The canonical string identifier for serialization and audit notes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Superior => "superior",
            Self::Peer => "peer",
            Self::HumanResources => "human_resources",
            Self::External => "external",
            Self::Anonymous => "anonymous",
        }
    }
}

impl std::fmt::Display for ComplainantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which body has the power to decide a case.
///
/// Resolved exactly once, at the first `finding` action, from the article,
/// severity level, and offense occurrence. Frozen afterward — later facts
/// never cause recomputation (auditability over recomputation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionAuthority {
    /// The accused employee's direct superior.
    DirectSuperior,
    /// A center-level discipline committee.
    DisciplineCommittee,
}

impl DecisionAuthority {
    /// The canonical string name of this authority.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DirectSuperior => "DIRECT_SUPERIOR",
            Self::DisciplineCommittee => "DISCIPLINE_COMMITTEE",
        }
    }
}

impl std::fmt::Display for DecisionAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The investigative conclusion reached before a decision is made.
///
/// Moves from [`Pending`](Finding::Pending) to one of the terminal finding
/// values exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Finding {
    /// Investigation not yet concluded.
    Pending,
    /// The accused is found responsible.
    Guilty,
    /// The accused is found responsible by default — the rebuttal window
    /// lapsed without a response.
    GuiltyNoRebuttal,
    /// The accused is cleared.
    NotGuilty,
}

impl Finding {
    /// The canonical string name of this finding.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Guilty => "GUILTY",
            Self::GuiltyNoRebuttal => "GUILTY_NO_REBUTTAL",
            Self::NotGuilty => "NOT_GUILTY",
        }
    }

    /// Whether a terminal finding value has been recorded.
    pub fn is_recorded(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Complaint Status ───────────────────────────────────────────────────

/// The lifecycle status of a complaint.
///
/// ## Transition Graph
///
/// ```text
/// UNDER_HR_REVIEW ──notification──▶ WAITING_FOR_REBUTTAL
///       │                               │ rebuttal / rebuttalDeadline
///       │ assignCommittee               ▼
///       │                          UNDER_HR_ANALYSIS ──finding──┬──▶ AWAITING_SUPERIOR_DECISION
///       │                                                       │         │ decision        │
///       ▼                                                       │         ▼                 │ assignCommittee
/// WITH_DISCIPLINE_COMMITTEE ◀───────────────────────────────────┴─────────────────────◀─────┘
///       │ forwardToCommittee
///       ▼
/// COMMITTEE_WAITING_REBUTTAL ──rebuttal / rebuttalDeadline──▶ COMMITTEE_ANALYSIS
///                                                                   │ finding
///                                                                   ▼
///                                                          INVESTIGATION_COMPLETE
///                                                             │              │ decision
///                                                    forwardToHq             ▼
///                                                             │           DECIDED ◀── decision (superior)
///                                                             ▼              │
///                                FORWARDED_TO_HQ ─▶ AWAITING_HQ_DECISION     │ submitAppeal / close
///                                                             │ hqDecision   ▼
///                                                             ▼           ON_APPEAL ──appealDecision──▶ APPEAL_DECIDED
///                                                      DECIDED_BY_HQ                                        │ close
///                                                                                                           ▼
///                        not-guilty decisions ──▶ CLOSED_NO_LIABILITY            CLOSED_FINAL ◀── close
/// ```
///
/// Terminal: [`ClosedNoLiability`](ComplaintStatus::ClosedNoLiability) and
/// [`ClosedFinal`](ComplaintStatus::ClosedFinal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplaintStatus {
    /// Registered; HR is reviewing the report.
    UnderHrReview,
    /// Accused has been notified; the rebuttal window is open.
    WaitingForRebuttal,
    /// Rebuttal window resolved; HR analysis in progress.
    UnderHrAnalysis,
    /// Finding recorded; the direct superior must decide.
    AwaitingSuperiorDecision,
    /// Case is with a center discipline committee.
    WithDisciplineCommittee,
    /// Committee has re-notified the accused; committee rebuttal window open.
    CommitteeWaitingRebuttal,
    /// Committee analysis in progress.
    CommitteeAnalysis,
    /// Committee investigation concluded.
    InvestigationComplete,
    /// Case forwarded to the HQ committee.
    ForwardedToHq,
    /// HQ committee must decide.
    AwaitingHqDecision,
    /// Decided at center level (superior or committee).
    Decided,
    /// Decided by the HQ committee.
    DecidedByHq,
    /// An appeal is under review.
    OnAppeal,
    /// The appeal has been decided; awaiting closure.
    AppealDecided,
    /// Closed without liability. Terminal state.
    ClosedNoLiability,
    /// Closed with the decision standing. Terminal state.
    ClosedFinal,
}

impl ComplaintStatus {
    /// The canonical string name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnderHrReview => "UNDER_HR_REVIEW",
            Self::WaitingForRebuttal => "WAITING_FOR_REBUTTAL",
            Self::UnderHrAnalysis => "UNDER_HR_ANALYSIS",
            Self::AwaitingSuperiorDecision => "AWAITING_SUPERIOR_DECISION",
            Self::WithDisciplineCommittee => "WITH_DISCIPLINE_COMMITTEE",
            Self::CommitteeWaitingRebuttal => "COMMITTEE_WAITING_REBUTTAL",
            Self::CommitteeAnalysis => "COMMITTEE_ANALYSIS",
            Self::InvestigationComplete => "INVESTIGATION_COMPLETE",
            Self::ForwardedToHq => "FORWARDED_TO_HQ",
            Self::AwaitingHqDecision => "AWAITING_HQ_DECISION",
            Self::Decided => "DECIDED",
            Self::DecidedByHq => "DECIDED_BY_HQ",
            Self::OnAppeal => "ON_APPEAL",
            Self::AppealDecided => "APPEAL_DECIDED",
            Self::ClosedNoLiability => "CLOSED_NO_LIABILITY",
            Self::ClosedFinal => "CLOSED_FINAL",
        }
    }

    /// Whether this status is terminal (no further actions allowed).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::ClosedNoLiability | Self::ClosedFinal)
    }
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── The Complaint ──────────────────────────────────────────────────────

/// A disciplinary complaint, managed through the Article 30/31 lifecycle.
///
/// Created via [`Complaint::register`], then advanced exclusively through
/// [`DisciplineEngine::apply`](crate::engine::DisciplineEngine::apply).
///
/// The caller is responsible for serializing concurrent applies on the same
/// complaint (row-level lock or optimistic version check — see
/// [`Complaint::ensure_version`]); the engine itself does no I/O and treats
/// each apply as one critical section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    /// Unique complaint identifier.
    pub id: ComplaintId,
    /// Owning tenant.
    pub tenant_id: TenantId,
    /// Center where the case is administered.
    pub center_id: CenterId,
    /// Human-facing case reference.
    pub complaint_number: ComplaintNumber,

    /// Statutory article of the charged offense.
    pub article: Article,
    /// Offense catalog code.
    pub offense_code: OffenseCode,
    /// Severity band of the offense.
    pub severity_level: SeverityLevel,
    /// Count of offenses of this code by this employee, including this one.
    pub offense_occurrence: u32,

    /// The accused employee.
    pub accused_employee_id: EmployeeId,
    /// Who raised the complaint.
    pub complainant_type: ComplainantType,
    /// Free-text description of the alleged misconduct.
    pub summary: String,
    /// When the incident occurred (UTC).
    pub incident_date: Timestamp,

    /// Current lifecycle status.
    pub status: ComplaintStatus,
    /// Deciding body, resolved once at the first finding and frozen.
    pub decision_authority: Option<DecisionAuthority>,
    /// When the accused was notified at center level.
    pub notification_date: Option<Timestamp>,
    /// Center-level rebuttal deadline. Immutable once set.
    pub rebuttal_deadline: Option<Timestamp>,
    /// When the accused was re-notified at committee level.
    pub committee_notification_date: Option<Timestamp>,
    /// Committee-level rebuttal deadline. Immutable once set.
    pub committee_rebuttal_deadline: Option<Timestamp>,
    /// Whether a rebuttal was received in the most recent rebuttal cycle.
    pub has_rebuttal: bool,
    /// When the rebuttal was received.
    pub rebuttal_received_date: Option<Timestamp>,
    /// Investigative conclusion.
    pub finding: Finding,
    /// Punishment band recommended by the committee investigation, compared
    /// against the configured center committee ceiling for HQ escalation.
    pub recommended_punishment: Option<PunishmentBand>,
    /// Center committee assigned to the case.
    pub assigned_committee_id: Option<CommitteeId>,
    /// HQ committee the case was forwarded to.
    pub hq_committee_id: Option<CommitteeId>,
    /// When the case was forwarded to HQ.
    pub hq_forwarded_date: Option<Timestamp>,
    /// Punishment imposed by the deciding body.
    pub punishment_description: Option<String>,
    /// When the decision was rendered.
    pub decision_date: Option<Timestamp>,
    /// When the case was closed.
    pub closed_date: Option<Timestamp>,
    /// Stated reason for closure, required when no appeal preceded it.
    pub closure_reason: Option<String>,

    /// Employees who participated in the finding or decision. An appeal
    /// reviewer must not appear here.
    pub decision_participants: Vec<EmployeeId>,
    /// Appeals raised against the decision, oldest first. At most one open.
    pub appeals: Vec<ComplaintAppeal>,

    /// Optimistic-lock counter, incremented once per successful apply.
    pub version: u64,
}

impl Complaint {
    /// Register a new complaint, creating it in
    /// [`ComplaintStatus::UnderHrReview`].
    ///
    /// This is the only constructor. The registration layer calls it after
    /// validating the case facts; everything after registration goes through
    /// the engine.
    #[allow(clippy::too_many_arguments)]
    pub fn register(
        tenant_id: TenantId,
        center_id: CenterId,
        complaint_number: ComplaintNumber,
        article: Article,
        offense_code: OffenseCode,
        severity_level: SeverityLevel,
        offense_occurrence: u32,
        accused_employee_id: EmployeeId,
        complainant_type: ComplainantType,
        summary: impl Into<String>,
        incident_date: Timestamp,
    ) -> Self {
        Self {
            id: ComplaintId::new(),
            tenant_id,
            center_id,
            complaint_number,
            article,
            offense_code,
            severity_level,
            offense_occurrence,
            accused_employee_id,
            complainant_type,
            summary: summary.into(),
            incident_date,
            status: ComplaintStatus::UnderHrReview,
            decision_authority: None,
            notification_date: None,
            rebuttal_deadline: None,
            committee_notification_date: None,
            committee_rebuttal_deadline: None,
            has_rebuttal: false,
            rebuttal_received_date: None,
            finding: Finding::Pending,
            recommended_punishment: None,
            assigned_committee_id: None,
            hq_committee_id: None,
            hq_forwarded_date: None,
            punishment_description: None,
            decision_date: None,
            closed_date: None,
            closure_reason: None,
            decision_participants: Vec::new(),
            appeals: Vec::new(),
            version: 0,
        }
    }

    /// Check an optimistic-lock expectation against the current version.
    ///
    /// The persistence layer records the version it loaded; before writing
    /// back it calls this with that value. A mismatch means another apply
    /// won the race — reload and retry.
    ///
    /// # Errors
    ///
    /// Returns [`DisciplineError::ConcurrencyConflict`] on a stale version.
    pub fn ensure_version(&self, expected: u64) -> Result<(), DisciplineError> {
        if self.version != expected {
            return Err(DisciplineError::ConcurrencyConflict {
                complaint_id: self.id.clone(),
                expected,
                actual: self.version,
            });
        }
        Ok(())
    }

    /// The rebuttal deadline governing the current waiting status, if any.
    pub fn active_rebuttal_deadline(&self) -> Option<&Timestamp> {
        match self.status {
            ComplaintStatus::WaitingForRebuttal => self.rebuttal_deadline.as_ref(),
            ComplaintStatus::CommitteeWaitingRebuttal => self.committee_rebuttal_deadline.as_ref(),
            _ => None,
        }
    }

    /// The currently open appeal, if any.
    pub fn open_appeal(&self) -> Option<&ComplaintAppeal> {
        self.appeals.iter().find(|a| a.is_open())
    }

    /// Mutable access to the currently open appeal, if any.
    pub(crate) fn open_appeal_mut(&mut self) -> Option<&mut ComplaintAppeal> {
        self.appeals.iter_mut().find(|a| a.is_open())
    }

    /// The most recently decided appeal, if any.
    pub fn last_decided_appeal(&self) -> Option<&ComplaintAppeal> {
        self.appeals.iter().rev().find(|a| a.decision.is_some())
    }

    /// Whether any appeal is currently open.
    pub fn has_open_appeal(&self) -> bool {
        self.open_appeal().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_minor() -> Complaint {
        Complaint::register(
            TenantId::new(),
            CenterId::new(),
            ComplaintNumber::new("DC-1404-0001").unwrap(),
            Article::Article30,
            OffenseCode::new("A30-07").unwrap(),
            SeverityLevel::MIN,
            1,
            EmployeeId::new(),
            ComplainantType::Superior,
            "Unauthorized absence on two consecutive days",
            Timestamp::now(),
        )
    }

    #[test]
    fn register_creates_case_under_hr_review() {
        let complaint = register_minor();
        assert_eq!(complaint.status, ComplaintStatus::UnderHrReview);
        assert_eq!(complaint.finding, Finding::Pending);
        assert!(complaint.decision_authority.is_none());
        assert!(complaint.appeals.is_empty());
        assert_eq!(complaint.version, 0);
    }

    #[test]
    fn ensure_version_accepts_current() {
        let complaint = register_minor();
        assert!(complaint.ensure_version(0).is_ok());
    }

    #[test]
    fn ensure_version_rejects_stale() {
        let mut complaint = register_minor();
        complaint.version = 3;
        let err = complaint.ensure_version(2).unwrap_err();
        assert!(!format!("{err}").is_empty());
        assert!(err.is_recoverable());
    }

    #[test]
    fn active_deadline_follows_status() {
        let mut complaint = register_minor();
        complaint.rebuttal_deadline = Some(Timestamp::now());
        assert!(complaint.active_rebuttal_deadline().is_none());
        complaint.status = ComplaintStatus::WaitingForRebuttal;
        assert!(complaint.active_rebuttal_deadline().is_some());
        complaint.status = ComplaintStatus::CommitteeWaitingRebuttal;
        assert!(complaint.active_rebuttal_deadline().is_none());
    }

    #[test]
    fn terminal_statuses() {
        assert!(ComplaintStatus::ClosedNoLiability.is_terminal());
        assert!(ComplaintStatus::ClosedFinal.is_terminal());
        assert!(!ComplaintStatus::AppealDecided.is_terminal());
        assert!(!ComplaintStatus::Decided.is_terminal());
    }

    #[test]
    fn status_names_are_screaming_snake() {
        assert_eq!(ComplaintStatus::UnderHrReview.as_str(), "UNDER_HR_REVIEW");
        assert_eq!(
            ComplaintStatus::CommitteeWaitingRebuttal.as_str(),
            "COMMITTEE_WAITING_REBUTTAL"
        );
        assert_eq!(
            ComplaintStatus::ClosedNoLiability.as_str(),
            "CLOSED_NO_LIABILITY"
        );
    }

    #[test]
    fn classification_names() {
        assert_eq!(Article::Article30.as_str(), "ARTICLE_30");
        assert_eq!(Article::Article31.as_str(), "ARTICLE_31");
        assert_eq!(DecisionAuthority::DirectSuperior.as_str(), "DIRECT_SUPERIOR");
        assert_eq!(
            DecisionAuthority::DisciplineCommittee.as_str(),
            "DISCIPLINE_COMMITTEE"
        );
        assert_eq!(Finding::GuiltyNoRebuttal.as_str(), "GUILTY_NO_REBUTTAL");
        assert_eq!(ComplainantType::HumanResources.as_str(), "human_resources");
    }

    #[test]
    fn finding_recorded_query() {
        assert!(!Finding::Pending.is_recorded());
        assert!(Finding::Guilty.is_recorded());
        assert!(Finding::NotGuilty.is_recorded());
    }

    #[test]
    fn open_appeal_queries() {
        let mut complaint = register_minor();
        assert!(!complaint.has_open_appeal());
        complaint.appeals.push(crate::appeal::ComplaintAppeal::open(
            complaint.id.clone(),
            "excessive punishment",
            Timestamp::now(),
        ));
        assert!(complaint.has_open_appeal());
        assert!(complaint.last_decided_appeal().is_none());
    }

    #[test]
    fn complaint_serde_roundtrip() {
        let complaint = register_minor();
        let json = serde_json::to_string(&complaint).unwrap();
        let back: Complaint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, complaint);
    }
}
