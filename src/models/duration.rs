use crate::utils::time::format_minutes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Signed work-time duration, stored as a whole number of minutes.
///
/// Displayed as `[-]HH:MM` where HH and MM are the absolute value's hour
/// and minute components. This is a magnitude, not a clock time: values
/// beyond 24 hours render as-is (1500 minutes -> "25:00").
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WorkDuration(i64);

impl WorkDuration {
    pub const ZERO: WorkDuration = WorkDuration(0);

    pub fn from_minutes(minutes: i64) -> Self {
        Self(minutes)
    }

    pub fn from_hm(hours: i64, minutes: i64) -> Self {
        Self(hours * 60 + minutes)
    }

    pub fn minutes(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl Add for WorkDuration {
    type Output = WorkDuration;

    fn add(self, rhs: WorkDuration) -> WorkDuration {
        WorkDuration(self.0 + rhs.0)
    }
}

impl Sub for WorkDuration {
    type Output = WorkDuration;

    fn sub(self, rhs: WorkDuration) -> WorkDuration {
        WorkDuration(self.0 - rhs.0)
    }
}

impl AddAssign for WorkDuration {
    fn add_assign(&mut self, rhs: WorkDuration) {
        self.0 += rhs.0;
    }
}

impl SubAssign for WorkDuration {
    fn sub_assign(&mut self, rhs: WorkDuration) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for WorkDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_minutes(self.0))
    }
}
