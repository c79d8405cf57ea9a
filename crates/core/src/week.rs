// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Weekly attendance window
//!
//! The store owns exactly one Monday-to-Sunday window: a fixed 7-entry
//! array indexed by day offset, with lookup by date key. Mutations are
//! pure transitions returning the updated snapshot plus effects; audit
//! emission is the caller's concern, gated by the edit policy.

use crate::effect::{Effect, Event};
use crate::error::AttendanceError;
use crate::roster::{Roster, StudentId};
use crate::status::AttendanceStatus;
use chrono::{Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DAYS_IN_WEEK: usize = 7;

/// One of the two daily attendance windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Session {
    Am,
    Pm,
}

impl Session {
    pub fn as_str(&self) -> &'static str {
        match self {
            Session::Am => "am",
            Session::Pm => "pm",
        }
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Session {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "am" => Ok(Session::Am),
            "pm" => Ok(Session::Pm),
            other => Err(format!("unknown session: {} (expected am or pm)", other)),
        }
    }
}

/// Per-session statuses, covering every roster member exactly once.
///
/// Constructed only from a roster, so the no-missing/no-duplicate
/// invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    statuses: BTreeMap<StudentId, AttendanceStatus>,
}

impl SessionRecord {
    fn for_roster(roster: &Roster) -> Self {
        let statuses = roster
            .iter()
            .map(|s| (s.id.clone(), AttendanceStatus::Unrecognized))
            .collect();
        Self { statuses }
    }

    pub fn status(&self, student: &StudentId) -> Option<AttendanceStatus> {
        self.statuses.get(student).copied()
    }

    pub fn contains(&self, student: &StudentId) -> bool {
        self.statuses.contains_key(student)
    }

    pub(crate) fn set(&mut self, student: StudentId, status: AttendanceStatus) {
        self.statuses.insert(student, status);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StudentId, AttendanceStatus)> {
        self.statuses.iter().map(|(id, status)| (id, *status))
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

/// Attendance for one calendar day: both sessions plus an edit marker
/// that drives preservation across window changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub am: SessionRecord,
    pub pm: SessionRecord,
    #[serde(default)]
    pub edited: bool,
}

impl DayRecord {
    pub fn session(&self, session: Session) -> &SessionRecord {
        match session {
            Session::Am => &self.am,
            Session::Pm => &self.pm,
        }
    }

    pub(crate) fn session_mut(&mut self, session: Session) -> &mut SessionRecord {
        match session {
            Session::Am => &mut self.am,
            Session::Pm => &mut self.pm,
        }
    }
}

/// Monday of the ISO week containing `date`
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    date.week(Weekday::Mon).first_day()
}

/// Date-indexed attendance for one 7-day window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekStore {
    week_start: NaiveDate,
    days: [DayRecord; DAYS_IN_WEEK],
}

impl WeekStore {
    /// Produce 7 consecutive day records, every status `unrecognized`.
    ///
    /// Deterministic given the roster and start date; consults no clock.
    /// `week_start` is normalized to the Monday of its week.
    pub fn initialize(roster: &Roster, week_start: NaiveDate) -> WeekStore {
        let start = week_start_of(week_start);
        let days = std::array::from_fn(|offset| DayRecord {
            date: start + Duration::days(offset as i64),
            am: SessionRecord::for_roster(roster),
            pm: SessionRecord::for_roster(roster),
            edited: false,
        });
        WeekStore {
            week_start: start,
            days,
        }
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    /// Offset of `date` inside the window, if loaded
    pub fn day_offset(&self, date: NaiveDate) -> Option<usize> {
        let offset = (date - self.week_start).num_days();
        (0..DAYS_IN_WEEK as i64)
            .contains(&offset)
            .then_some(offset as usize)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.day_offset(date).is_some()
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.day_offset(date).map(|i| &self.days[i])
    }

    pub(crate) fn day_mut(&mut self, date: NaiveDate) -> Option<&mut DayRecord> {
        self.day_offset(date).map(|i| &mut self.days[i])
    }

    /// Session record for a loaded date
    pub fn session(
        &self,
        date: NaiveDate,
        session: Session,
    ) -> Result<&SessionRecord, AttendanceError> {
        self.day(date)
            .map(|d| d.session(session))
            .ok_or_else(|| outside_window(date))
    }

    /// Replace the status for exactly one student in one session.
    ///
    /// Idempotent: writing the current value returns an unchanged
    /// snapshot and no effects, so repeated identical writes can never
    /// produce duplicate audit entries downstream.
    pub fn set_status(
        &self,
        date: NaiveDate,
        session: Session,
        student: &StudentId,
        new_status: AttendanceStatus,
    ) -> Result<(WeekStore, Vec<Effect>), AttendanceError> {
        let current = self
            .session(date, session)?
            .status(student)
            .ok_or_else(|| {
                AttendanceError::NotFound(format!("student {} has no record for {}", student, date))
            })?;

        if current == new_status {
            return Ok((self.clone(), vec![]));
        }

        let mut next = self.clone();
        if let Some(day) = next.day_mut(date) {
            day.session_mut(session).set(student.clone(), new_status);
            day.edited = true;
        }

        let effects = vec![Effect::Emit(Event::StatusChanged {
            date,
            session,
            student_id: student.clone(),
            status: new_status,
        })];
        Ok((next, effects))
    }

    /// Regenerate the window for a new start date.
    ///
    /// The window is rebuilt, not merged; the one exception is that days
    /// already mutated are carried over when they still fall inside the
    /// new window.
    pub fn load_week(&self, roster: &Roster, new_start: NaiveDate) -> (WeekStore, Vec<Effect>) {
        let start = week_start_of(new_start);
        let mut next = WeekStore::initialize(roster, start);
        for day in &self.days {
            if day.edited {
                if let Some(i) = next.day_offset(day.date) {
                    next.days[i] = day.clone();
                }
            }
        }
        let effects = vec![Effect::Emit(Event::WeekLoaded { week_start: start })];
        (next, effects)
    }
}

fn outside_window(date: NaiveDate) -> AttendanceError {
    AttendanceError::NotFound(format!("date {} is outside the loaded week", date))
}

#[cfg(test)]
#[path = "week_tests.rs"]
mod tests;
