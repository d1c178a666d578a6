//! # Deadline Tracker
//!
//! Pure date arithmetic for rebuttal deadlines. The tracker does not own a
//! clock: the scheduler collaborator passes `now` into [`is_lapsed`] and
//! [`select_lapsed`], then drives the forced `rebuttalDeadline` action
//! through the same `apply` entry point as any human action. There is no
//! side-channel mutation of complaint status anywhere.

use pas_core::{ComplaintId, Timestamp};

use crate::complaint::Complaint;

/// Compute a rebuttal deadline from a notification date and the configured
/// window length in calendar days.
pub fn compute_deadline(notification_date: &Timestamp, policy_days: u32) -> Timestamp {
    notification_date.plus_days(policy_days)
}

/// Whether a deadline has lapsed. The deadline instant itself still counts
/// as within the window.
pub fn is_lapsed(now: &Timestamp, deadline: &Timestamp) -> bool {
    now > deadline
}

/// Select the complaints whose active rebuttal window has lapsed.
///
/// Intended for the periodic sweep: filters complaints sitting in
/// `WAITING_FOR_REBUTTAL`/`COMMITTEE_WAITING_REBUTTAL` whose governing
/// deadline is behind `now`. The sweep then applies
/// `Action::RebuttalDeadlineLapsed` to each, as the system actor, under the
/// same per-complaint locking as any other apply.
pub fn select_lapsed<'a>(
    complaints: impl IntoIterator<Item = &'a Complaint>,
    now: &Timestamp,
) -> Vec<ComplaintId> {
    complaints
        .into_iter()
        .filter(|complaint| {
            complaint
                .active_rebuttal_deadline()
                .is_some_and(|deadline| is_lapsed(now, deadline))
        })
        .map(|complaint| complaint.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use pas_core::{
        CenterId, ComplaintNumber, EmployeeId, OffenseCode, SeverityLevel, TenantId,
    };

    use crate::complaint::{Article, ComplainantType, ComplaintStatus};

    fn ts(day: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 3, day, 9, 0, 0).unwrap())
    }

    fn waiting_complaint(deadline_day: u32) -> Complaint {
        let mut complaint = Complaint::register(
            TenantId::new(),
            CenterId::new(),
            ComplaintNumber::new("DC-1404-0042").unwrap(),
            Article::Article30,
            OffenseCode::new("A30-02").unwrap(),
            SeverityLevel::MIN,
            1,
            EmployeeId::new(),
            ComplainantType::Superior,
            "late arrival",
            ts(1),
        );
        complaint.status = ComplaintStatus::WaitingForRebuttal;
        complaint.notification_date = Some(ts(1));
        complaint.rebuttal_deadline = Some(ts(deadline_day));
        complaint
    }

    #[test]
    fn compute_deadline_adds_policy_days() {
        assert_eq!(compute_deadline(&ts(1), 7), ts(8));
    }

    #[test]
    fn deadline_instant_is_still_within_window() {
        let deadline = ts(8);
        assert!(!is_lapsed(&deadline, &deadline));
    }

    #[test]
    fn after_deadline_is_lapsed() {
        assert!(is_lapsed(&ts(9), &ts(8)));
    }

    #[test]
    fn before_deadline_is_not_lapsed() {
        assert!(!is_lapsed(&ts(7), &ts(8)));
    }

    #[test]
    fn select_lapsed_picks_only_overdue_waiting_cases() {
        let overdue = waiting_complaint(5);
        let running = waiting_complaint(20);
        let mut decided = waiting_complaint(5);
        decided.status = ComplaintStatus::Decided;

        let lapsed = select_lapsed([&overdue, &running, &decided], &ts(10));
        assert_eq!(lapsed, vec![overdue.id.clone()]);
    }

    #[test]
    fn select_lapsed_uses_committee_deadline_on_committee_track() {
        let mut complaint = waiting_complaint(5);
        complaint.status = ComplaintStatus::CommitteeWaitingRebuttal;
        // Center deadline lapsed long ago, but the committee window governs.
        complaint.committee_rebuttal_deadline = Some(ts(25));

        assert!(select_lapsed([&complaint], &ts(10)).is_empty());
        assert_eq!(select_lapsed([&complaint], &ts(28)).len(), 1);
    }

    #[test]
    fn select_lapsed_ignores_cases_without_deadline() {
        let mut complaint = waiting_complaint(5);
        complaint.rebuttal_deadline = None;
        assert!(select_lapsed([&complaint], &ts(10)).is_empty());
    }
}
