//! Service-level agreement status derived from a ticket deadline.
//!
//! SLA status is never stored. It is recomputed from the deadline and the
//! current time on every read.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Remaining time below which an unbreached deadline is reported as critical.
pub const CRITICAL_WINDOW_HOURS: i64 = 2;

/// Urgency tier of a ticket relative to its SLA deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlaStatus {
    /// No deadline, or more than the critical window remains.
    #[serde(rename = "Normal")]
    Normal,
    /// The deadline falls within the critical window.
    #[serde(rename = "Crítico")]
    Critical,
    /// The deadline has passed.
    #[serde(rename = "Vencido")]
    Breached,
}

impl SlaStatus {
    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Critical => "Crítico",
            Self::Breached => "Vencido",
        }
    }
}

impl fmt::Display for SlaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SLA status together with the values display code needs to render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlaAssessment {
    status: SlaStatus,
    deadline: Option<DateTime<Utc>>,
    remaining: Option<TimeDelta>,
}

impl SlaAssessment {
    /// Returns the urgency tier.
    #[must_use]
    pub const fn status(&self) -> SlaStatus {
        self.status
    }

    /// Returns the deadline the assessment was computed from.
    #[must_use]
    pub const fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }

    /// Returns the time left until the deadline; negative once breached.
    #[must_use]
    pub const fn remaining(&self) -> Option<TimeDelta> {
        self.remaining
    }

    /// Returns the whole hours left until the deadline, truncated toward zero.
    #[must_use]
    pub fn hours_until_deadline(&self) -> Option<i64> {
        self.remaining.map(|remaining| remaining.num_hours())
    }
}

/// Classifies a deadline into one of the three SLA tiers.
///
/// A missing deadline is [`SlaStatus::Normal`]. A deadline already in the
/// past is [`SlaStatus::Breached`]. A deadline less than
/// [`CRITICAL_WINDOW_HOURS`] away is [`SlaStatus::Critical`].
#[must_use]
pub fn compute_sla_status(deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> SlaAssessment {
    let Some(due) = deadline else {
        return SlaAssessment {
            status: SlaStatus::Normal,
            deadline: None,
            remaining: None,
        };
    };

    let remaining = due - now;
    let status = if remaining < TimeDelta::zero() {
        SlaStatus::Breached
    } else if remaining < TimeDelta::hours(CRITICAL_WINDOW_HOURS) {
        SlaStatus::Critical
    } else {
        SlaStatus::Normal
    };

    SlaAssessment {
        status,
        deadline: Some(due),
        remaining: Some(remaining),
    }
}
