use crate::models::{HistoryRecord, WorkDuration};
use crate::utils::date::is_same_date;
use serde::{Deserialize, Serialize};

/// Aggregate root of the tracker: today's quota, the running overwork
/// balance, and the per-day history.
///
/// Invariants:
/// - `history` is append-ordered by calendar date, at most one record per date;
/// - `overwork` equals the sum of the overwork of every record in `history`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub need_work: WorkDuration,
    pub overwork: WorkDuration,
    pub history: Vec<HistoryRecord>,
}

impl Store {
    /// Apply a worked-hours submission.
    ///
    /// A second submission on the same calendar date is a correction: the
    /// previous record is replaced and its overwork backed out of the running
    /// total. A submission on a new date appends a record. Either way the
    /// new record's overwork is added to the total.
    pub fn record_worked(&mut self, record: HistoryRecord) {
        let delta = record.overwork;
        match self.history.last_mut() {
            Some(last) if is_same_date(&last.date, &record.date) => {
                self.overwork -= last.overwork;
                *last = record;
            }
            _ => self.history.push(record),
        }
        self.overwork += delta;
    }

    /// Change today's quota. Applies going forward; past records keep the
    /// quota that was active when they were created.
    pub fn set_need_work(&mut self, quota: WorkDuration) {
        self.need_work = quota;
    }
}
