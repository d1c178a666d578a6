//! # Complaint State Machine
//!
//! The single entry point through which a complaint's workflow state ever
//! changes. Every caller — CRUD controllers, the deadline sweep — funnels
//! through [`DisciplineEngine::apply`]; no other code writes `status`.
//!
//! `apply` is atomic by construction: it validates against the transition
//! table, runs the guards, mutates a clone of the aggregate, and returns the
//! updated aggregate together with the timeline events for the audit sink.
//! On any error the caller's aggregate is untouched. The engine does no I/O
//! and holds no locks; the caller serializes concurrent applies on the same
//! complaint (see `Complaint::ensure_version`).

use tracing::{debug, warn};

use pas_core::{CommitteeId, PunishmentBand, Timestamp};

use crate::action::{Action, ActionKind, FindingInput, Verdict};
use crate::appeal::{AppealDecision, ComplaintAppeal};
use crate::authority;
use crate::complaint::{Complaint, ComplaintStatus, DecisionAuthority, Finding};
use crate::deadline;
use crate::error::{DisciplineError, GuardViolation, InvariantViolation};
use crate::policy::{DisciplinePolicy, PolicyError};
use crate::timeline::{self, Actor, TimelineEvent};
use crate::transition;

/// The result of a successful apply: the updated aggregate and the timeline
/// events to hand to the audit sink, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplyOutcome {
    /// The aggregate after the transition, version incremented.
    pub complaint: Complaint,
    /// One event per transition hop (`forwardToHq` produces two).
    pub events: Vec<TimelineEvent>,
}

/// One status hop with its audit note. Most actions produce a single hop;
/// `forwardToHq` produces two.
struct Hop {
    to: ComplaintStatus,
    notes: Option<String>,
}

/// The complaint lifecycle engine.
///
/// Holds the validated [`DisciplinePolicy`]; everything else lives on the
/// aggregate. Cheap to construct, free to share.
#[derive(Debug, Clone)]
pub struct DisciplineEngine {
    policy: DisciplinePolicy,
}

impl DisciplineEngine {
    /// Create an engine with the given policy.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError`] when the policy fails validation; apply-time
    /// code trusts every policy value.
    pub fn new(policy: DisciplinePolicy) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// The policy this engine enforces.
    pub fn policy(&self) -> &DisciplinePolicy {
        &self.policy
    }

    /// Apply one action to a complaint.
    ///
    /// Looks the action up in the transition table, runs its guards, and on
    /// success returns the updated aggregate plus the emitted timeline
    /// events. The input aggregate is never mutated; on error nothing has
    /// happened.
    ///
    /// # Errors
    ///
    /// - [`DisciplineError::InvalidTransition`] when the action is not
    ///   listed for the current status.
    /// - [`DisciplineError::Guard`] when a precondition fails.
    /// - [`DisciplineError::Invariant`] when a defensive consistency check
    ///   catches a corrupted aggregate.
    pub fn apply(
        &self,
        complaint: &Complaint,
        action: Action,
        actor: Actor,
        now: Timestamp,
    ) -> Result<ApplyOutcome, DisciplineError> {
        let kind = action.kind();
        if !transition::is_allowed(complaint.status, kind) {
            return Err(DisciplineError::InvalidTransition {
                complaint_id: complaint.id.clone(),
                status: complaint.status,
                action: kind,
            });
        }

        let from = complaint.status;
        let mut next = complaint.clone();
        let hops = match action {
            Action::Notification => self.on_notification(&mut next, &now)?,
            Action::Rebuttal { notes } => on_rebuttal(&mut next, from, notes, &now)?,
            Action::RebuttalDeadlineLapsed => on_deadline_lapsed(&mut next, from, &now)?,
            Action::Finding {
                finding,
                recommended_punishment,
            } => self.on_finding(&mut next, from, finding, recommended_punishment, &actor)?,
            Action::AssignCommittee { committee_id } => on_assign_committee(&mut next, committee_id),
            Action::ForwardToCommittee { committee_id } => {
                self.on_forward_to_committee(&mut next, committee_id, &now)?
            }
            Action::Decision { verdict } => self.on_decision(&mut next, from, verdict, &actor, &now)?,
            Action::ForwardToHq { hq_committee_id } => {
                self.on_forward_to_hq(&mut next, hq_committee_id, &now)?
            }
            Action::HqDecision { verdict } => on_hq_decision(&mut next, verdict, &actor, &now),
            Action::SubmitAppeal { reason } => self.on_submit_appeal(&mut next, reason, &now)?,
            Action::AppealDecision {
                decision,
                reason,
                new_punishment,
            } => on_appeal_decision(&mut next, decision, reason, new_punishment, &actor)?,
            Action::Close { reason } => on_close(&mut next, from, reason, &now)?,
        };

        let mut events = Vec::with_capacity(hops.len());
        let mut hop_from = from;
        for hop in hops {
            if hop_from.is_terminal() {
                warn!(
                    complaint = %next.id,
                    status = %hop_from,
                    "fatal: computed transition departs a terminal status"
                );
                return Err(InvariantViolation::TerminalStateDeparture {
                    complaint_id: next.id.clone(),
                    status: hop_from,
                }
                .into());
            }
            next.status = hop.to;
            events.push(timeline::emit(
                next.id.clone(),
                kind,
                hop_from,
                hop.to,
                actor.clone(),
                now.clone(),
                hop.notes,
            ));
            hop_from = hop.to;
        }
        next.version += 1;

        debug!(
            complaint = %next.id,
            action = %kind,
            from = %from,
            to = %next.status,
            version = next.version,
            "transition applied"
        );
        Ok(ApplyOutcome {
            complaint: next,
            events,
        })
    }

    fn on_notification(
        &self,
        next: &mut Complaint,
        now: &Timestamp,
    ) -> Result<Vec<Hop>, DisciplineError> {
        if next.rebuttal_deadline.is_some() {
            warn!(complaint = %next.id, "fatal: center rebuttal deadline would be overwritten");
            return Err(InvariantViolation::DeadlineAlreadySet {
                complaint_id: next.id.clone(),
            }
            .into());
        }
        let rebuttal_deadline = deadline::compute_deadline(now, self.policy.center_rebuttal_days);
        next.notification_date = Some(now.clone());
        next.rebuttal_deadline = Some(rebuttal_deadline.clone());
        Ok(vec![Hop {
            to: ComplaintStatus::WaitingForRebuttal,
            notes: Some(format!("rebuttal deadline {rebuttal_deadline}")),
        }])
    }

    fn on_finding(
        &self,
        next: &mut Complaint,
        from: ComplaintStatus,
        finding: FindingInput,
        recommended_punishment: Option<PunishmentBand>,
        actor: &Actor,
    ) -> Result<Vec<Hop>, DisciplineError> {
        let first_finding = !next.finding.is_recorded();
        if first_finding {
            if next.decision_authority.is_some() {
                warn!(complaint = %next.id, "fatal: decision authority set before the first finding");
                return Err(InvariantViolation::AuthorityAlreadyResolved {
                    complaint_id: next.id.clone(),
                }
                .into());
            }
            next.finding = match finding {
                FindingInput::Guilty if !next.has_rebuttal => Finding::GuiltyNoRebuttal,
                FindingInput::Guilty => Finding::Guilty,
                FindingInput::NotGuilty => Finding::NotGuilty,
            };
            next.decision_authority = Some(authority::resolve_authority(
                next.article,
                next.severity_level,
                next.offense_occurrence,
                &self.policy,
            ));
        } else {
            // A committee re-examination restates the frozen finding; only a
            // contradiction is rejected.
            let consistent = match finding {
                FindingInput::Guilty => {
                    matches!(next.finding, Finding::Guilty | Finding::GuiltyNoRebuttal)
                }
                FindingInput::NotGuilty => matches!(next.finding, Finding::NotGuilty),
            };
            if !consistent {
                let submitted = match finding {
                    FindingInput::Guilty => Finding::Guilty,
                    FindingInput::NotGuilty => Finding::NotGuilty,
                };
                return Err(GuardViolation::FindingConflict {
                    recorded: next.finding,
                    submitted,
                }
                .into());
            }
        }

        if let Some(band) = recommended_punishment {
            next.recommended_punishment = Some(band);
        }
        record_participant(next, actor);

        // The resolution above guarantees an authority from here on.
        let authority = next.decision_authority.ok_or_else(|| {
            InvariantViolation::AuthorityNotResolved {
                complaint_id: next.id.clone(),
            }
        })?;

        let hop = match from {
            ComplaintStatus::UnderHrAnalysis => {
                let to = match authority {
                    DecisionAuthority::DirectSuperior => ComplaintStatus::AwaitingSuperiorDecision,
                    DecisionAuthority::DisciplineCommittee => {
                        ComplaintStatus::WithDisciplineCommittee
                    }
                };
                Hop {
                    to,
                    notes: Some(format!(
                        "finding {}; authority resolved: {}; occurrence #{}",
                        next.finding, authority, next.offense_occurrence
                    )),
                }
            }
            _ => {
                let mut notes = format!("finding {}; committee investigation complete", next.finding);
                if let Some(band) = next.recommended_punishment {
                    notes.push_str(&format!("; recommended punishment band {band}"));
                }
                Hop {
                    to: ComplaintStatus::InvestigationComplete,
                    notes: Some(notes),
                }
            }
        };
        Ok(vec![hop])
    }

    fn on_forward_to_committee(
        &self,
        next: &mut Complaint,
        committee_id: Option<CommitteeId>,
        now: &Timestamp,
    ) -> Result<Vec<Hop>, DisciplineError> {
        if let Some(id) = committee_id {
            next.assigned_committee_id = Some(id);
        }
        if next.assigned_committee_id.is_none() {
            return Err(GuardViolation::MissingCommitteeAssignment {
                complaint_id: next.id.clone(),
            }
            .into());
        }
        if next.committee_rebuttal_deadline.is_some() {
            warn!(complaint = %next.id, "fatal: committee rebuttal deadline would be overwritten");
            return Err(InvariantViolation::DeadlineAlreadySet {
                complaint_id: next.id.clone(),
            }
            .into());
        }
        let committee_deadline =
            deadline::compute_deadline(now, self.policy.committee_rebuttal_days);
        next.committee_notification_date = Some(now.clone());
        next.committee_rebuttal_deadline = Some(committee_deadline.clone());
        // Fresh window, fresh cycle.
        next.has_rebuttal = false;
        Ok(vec![Hop {
            to: ComplaintStatus::CommitteeWaitingRebuttal,
            notes: Some(format!("committee rebuttal deadline {committee_deadline}")),
        }])
    }

    fn on_decision(
        &self,
        next: &mut Complaint,
        from: ComplaintStatus,
        verdict: Verdict,
        actor: &Actor,
        now: &Timestamp,
    ) -> Result<Vec<Hop>, DisciplineError> {
        let authority = next.decision_authority.ok_or_else(|| {
            warn!(complaint = %next.id, "fatal: decision attempted before authority resolution");
            InvariantViolation::AuthorityNotResolved {
                complaint_id: next.id.clone(),
            }
        })?;
        match from {
            ComplaintStatus::AwaitingSuperiorDecision => {
                if authority != DecisionAuthority::DirectSuperior {
                    return Err(GuardViolation::WrongAuthority {
                        required: DecisionAuthority::DirectSuperior,
                        actual: authority,
                    }
                    .into());
                }
            }
            _ => {
                // Committee track: the case must not be one the escalation
                // rule reserves for HQ.
                if authority::requires_hq_escalation(
                    next.severity_level,
                    next.recommended_punishment,
                    &self.policy,
                ) {
                    return Err(GuardViolation::HqEscalationRequired {
                        complaint_id: next.id.clone(),
                    }
                    .into());
                }
            }
        }
        record_participant(next, actor);
        Ok(vec![settle_verdict(
            next,
            verdict,
            now,
            ComplaintStatus::Decided,
        )])
    }

    fn on_forward_to_hq(
        &self,
        next: &mut Complaint,
        hq_committee_id: CommitteeId,
        now: &Timestamp,
    ) -> Result<Vec<Hop>, DisciplineError> {
        let authority = next.decision_authority.ok_or_else(|| {
            warn!(complaint = %next.id, "fatal: HQ forwarding attempted before authority resolution");
            InvariantViolation::AuthorityNotResolved {
                complaint_id: next.id.clone(),
            }
        })?;
        if authority != DecisionAuthority::DisciplineCommittee {
            return Err(GuardViolation::WrongAuthority {
                required: DecisionAuthority::DisciplineCommittee,
                actual: authority,
            }
            .into());
        }
        if !authority::requires_hq_escalation(
            next.severity_level,
            next.recommended_punishment,
            &self.policy,
        ) {
            return Err(GuardViolation::HqEscalationNotRequired {
                complaint_id: next.id.clone(),
            }
            .into());
        }
        next.hq_forwarded_date = Some(now.clone());
        next.hq_committee_id = Some(hq_committee_id.clone());
        Ok(vec![
            Hop {
                to: ComplaintStatus::ForwardedToHq,
                notes: Some(format!("forwarded to HQ committee {hq_committee_id}")),
            },
            Hop {
                to: ComplaintStatus::AwaitingHqDecision,
                notes: Some("awaiting HQ decision".to_string()),
            },
        ])
    }

    fn on_submit_appeal(
        &self,
        next: &mut Complaint,
        reason: String,
        now: &Timestamp,
    ) -> Result<Vec<Hop>, DisciplineError> {
        if next.has_open_appeal() {
            return Err(GuardViolation::AppealAlreadyOpen {
                complaint_id: next.id.clone(),
            }
            .into());
        }
        let decision_date = next.decision_date.clone().ok_or_else(|| {
            warn!(complaint = %next.id, "fatal: decided complaint has no decision date");
            InvariantViolation::MissingDecisionDate {
                complaint_id: next.id.clone(),
            }
        })?;
        let window_end = decision_date.plus_days(self.policy.appeal_window_days);
        if *now > window_end {
            return Err(GuardViolation::AppealWindowExpired {
                complaint_id: next.id.clone(),
                window_end,
            }
            .into());
        }
        let notes = format!("appeal submitted: {reason}");
        next.appeals
            .push(ComplaintAppeal::open(next.id.clone(), reason, now.clone()));
        Ok(vec![Hop {
            to: ComplaintStatus::OnAppeal,
            notes: Some(notes),
        }])
    }
}

/// Record an employee actor as a decision participant, once.
fn record_participant(next: &mut Complaint, actor: &Actor) {
    if let Some(employee) = actor.as_employee() {
        if !next.decision_participants.contains(employee) {
            next.decision_participants.push(employee.clone());
        }
    }
}

/// Settle a verdict into the aggregate: guilty verdicts park the case in
/// `decided_status`, not-guilty verdicts close it without liability.
fn settle_verdict(
    next: &mut Complaint,
    verdict: Verdict,
    now: &Timestamp,
    decided_status: ComplaintStatus,
) -> Hop {
    next.decision_date = Some(now.clone());
    match verdict {
        Verdict::Guilty { punishment } => {
            let notes = format!("punishment: {punishment}");
            next.punishment_description = Some(punishment);
            Hop {
                to: decided_status,
                notes: Some(notes),
            }
        }
        Verdict::NotGuilty => {
            next.closed_date = Some(now.clone());
            Hop {
                to: ComplaintStatus::ClosedNoLiability,
                notes: Some("no liability".to_string()),
            }
        }
    }
}

fn on_rebuttal(
    next: &mut Complaint,
    from: ComplaintStatus,
    notes: Option<String>,
    now: &Timestamp,
) -> Result<Vec<Hop>, DisciplineError> {
    next.has_rebuttal = true;
    next.rebuttal_received_date = Some(now.clone());
    let to = analysis_target(next, from)?;
    let notes = match notes {
        Some(detail) => format!("rebuttal received; {detail}"),
        None => "rebuttal received".to_string(),
    };
    Ok(vec![Hop {
        to,
        notes: Some(notes),
    }])
}

fn on_deadline_lapsed(
    next: &mut Complaint,
    from: ComplaintStatus,
    now: &Timestamp,
) -> Result<Vec<Hop>, DisciplineError> {
    let deadline = match next.active_rebuttal_deadline() {
        Some(deadline) => deadline.clone(),
        None => {
            warn!(complaint = %next.id, status = %from, "fatal: waiting status has no deadline");
            return Err(InvariantViolation::DeadlineNotSet {
                complaint_id: next.id.clone(),
                status: from,
            }
            .into());
        }
    };
    if !deadline::is_lapsed(now, &deadline) {
        return Err(GuardViolation::DeadlineNotLapsed { deadline }.into());
    }
    next.has_rebuttal = false;
    let to = analysis_target(next, from)?;
    Ok(vec![Hop {
        to,
        notes: Some(format!("rebuttal window lapsed unanswered; deadline {deadline}")),
    }])
}

/// Map a waiting status to its analysis status on the same track.
fn analysis_target(
    next: &Complaint,
    from: ComplaintStatus,
) -> Result<ComplaintStatus, DisciplineError> {
    match from {
        ComplaintStatus::WaitingForRebuttal => Ok(ComplaintStatus::UnderHrAnalysis),
        ComplaintStatus::CommitteeWaitingRebuttal => Ok(ComplaintStatus::CommitteeAnalysis),
        _ => Err(DisciplineError::InvalidTransition {
            complaint_id: next.id.clone(),
            status: from,
            action: ActionKind::Rebuttal,
        }),
    }
}

fn on_assign_committee(next: &mut Complaint, committee_id: CommitteeId) -> Vec<Hop> {
    let notes = format!("assigned to committee {committee_id}");
    next.assigned_committee_id = Some(committee_id);
    vec![Hop {
        to: ComplaintStatus::WithDisciplineCommittee,
        notes: Some(notes),
    }]
}

fn on_hq_decision(
    next: &mut Complaint,
    verdict: Verdict,
    actor: &Actor,
    now: &Timestamp,
) -> Vec<Hop> {
    record_participant(next, actor);
    vec![settle_verdict(next, verdict, now, ComplaintStatus::DecidedByHq)]
}

fn on_appeal_decision(
    next: &mut Complaint,
    decision: AppealDecision,
    reason: String,
    new_punishment: Option<String>,
    actor: &Actor,
) -> Result<Vec<Hop>, DisciplineError> {
    let reviewer = actor
        .as_employee()
        .cloned()
        .ok_or(GuardViolation::ReviewerRequired)?;
    if next.decision_participants.contains(&reviewer) {
        return Err(GuardViolation::ReviewerConflict { reviewer }.into());
    }
    if decision == AppealDecision::Modified && new_punishment.is_none() {
        return Err(GuardViolation::MissingRevisedPunishment.into());
    }
    let complaint_id = next.id.clone();
    let Some(appeal) = next.open_appeal_mut() else {
        warn!(complaint = %complaint_id, "fatal: complaint on appeal has no open appeal");
        return Err(InvariantViolation::NoOpenAppeal { complaint_id }.into());
    };
    appeal.decision = Some(decision);
    appeal.decision_reason = Some(reason);
    appeal.reviewer_employee_id = Some(reviewer.clone());
    appeal.new_punishment = new_punishment.clone();

    let mut notes = format!("appeal {decision}; reviewer {reviewer}");
    if decision == AppealDecision::Modified {
        next.punishment_description = new_punishment;
        notes.push_str("; punishment revised");
    }
    Ok(vec![Hop {
        to: ComplaintStatus::AppealDecided,
        notes: Some(notes),
    }])
}

fn on_close(
    next: &mut Complaint,
    from: ComplaintStatus,
    reason: Option<String>,
    now: &Timestamp,
) -> Result<Vec<Hop>, DisciplineError> {
    let hop = if from == ComplaintStatus::AppealDecided {
        let appeal_decision = next
            .last_decided_appeal()
            .and_then(|appeal| appeal.decision)
            .ok_or_else(|| {
                warn!(complaint = %next.id, "fatal: appeal stage concluded without a decision");
                InvariantViolation::MissingAppealDecision {
                    complaint_id: next.id.clone(),
                }
            })?;
        next.closure_reason = reason;
        // The overturned mapping is asserted here, not left to the caller.
        match appeal_decision {
            AppealDecision::Overturned => Hop {
                to: ComplaintStatus::ClosedNoLiability,
                notes: Some("appeal overturned; closed without liability".to_string()),
            },
            AppealDecision::Upheld | AppealDecision::Modified => Hop {
                to: ComplaintStatus::ClosedFinal,
                notes: Some(format!("appeal {appeal_decision}; decision stands")),
            },
        }
    } else {
        let reason = reason.ok_or(GuardViolation::MissingClosureReason {
            complaint_id: next.id.clone(),
        })?;
        let notes = format!("closed: {reason}");
        next.closure_reason = Some(reason);
        Hop {
            to: ComplaintStatus::ClosedFinal,
            notes: Some(notes),
        }
    };
    next.closed_date = Some(now.clone());
    Ok(vec![hop])
}
