use crate::models::WorkDuration;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One day's outcome: worked hours against the quota that applied that day.
///
/// `overwork` is computed once at construction (`worked - need_work`) and
/// frozen into the record; later quota changes never touch past records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub date: DateTime<Local>,
    pub worked: WorkDuration,
    pub need_work: WorkDuration,
    pub overwork: WorkDuration,
}

impl HistoryRecord {
    /// Record for the current moment.
    pub fn now(worked: WorkDuration, need_work: WorkDuration) -> Self {
        Self::at(Local::now(), worked, need_work)
    }

    /// Record for an explicit timestamp.
    pub fn at(date: DateTime<Local>, worked: WorkDuration, need_work: WorkDuration) -> Self {
        Self {
            date,
            worked,
            need_work,
            overwork: worked - need_work,
        }
    }
}
