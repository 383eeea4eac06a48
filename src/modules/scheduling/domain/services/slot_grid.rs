/// Slot grid: the fixed daily set of bookable hour slots
///
/// Pure calendar arithmetic. Days are partitioned in the configured
/// timezone; the windows handed back for overlap checks are UTC. Working
/// hours are fixed at 09:00 through 17:00 (start of the last slot), one
/// hour per slot, nine slots per day.
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::modules::scheduling::domain::value_objects::TimeWindow;

#[derive(Debug, Clone, Copy)]
pub struct SlotGrid {
    tz: Tz,
}

impl SlotGrid {
    /// First bookable slot start, local hour
    pub const FIRST_SLOT_HOUR: u32 = 9;
    /// Last bookable slot start, local hour (inclusive)
    pub const LAST_SLOT_HOUR: u32 = 17;
    pub const SLOT_MINUTES: i64 = 60;

    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Local start hours of every slot in a working day, in order
    pub fn slot_hours() -> RangeInclusive<u32> {
        Self::FIRST_SLOT_HOUR..=Self::LAST_SLOT_HOUR
    }

    /// "HH:mm" label for a slot start hour
    pub fn slot_label(hour: u32) -> String {
        format!("{:02}:00", hour)
    }

    /// Calendar date of a UTC instant in the grid's timezone
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }

    /// UTC window of the slot starting at `hour` local time on `date`.
    ///
    /// Returns None if the local time does not exist (DST gap); skipped
    /// slots simply never appear in the grid.
    pub fn slot_window(&self, date: NaiveDate, hour: u32) -> Option<TimeWindow> {
        let local = self
            .tz
            .with_ymd_and_hms(date.year(), date.month(), date.day(), hour, 0, 0)
            .earliest()?;
        let start = local.with_timezone(&Utc);
        Some(TimeWindow {
            start,
            end: start + Duration::minutes(Self::SLOT_MINUTES),
        })
    }

    /// Ordered calendar days of `[start_date, end_date]`; empty when the
    /// range spans zero days
    pub fn days(start_date: NaiveDate, end_date: NaiveDate) -> impl Iterator<Item = NaiveDate> {
        start_date.iter_days().take_while(move |d| *d <= end_date)
    }

    /// Candidate slot labels per calendar day across a date range
    pub fn generate_slots(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> BTreeMap<NaiveDate, Vec<String>> {
        Self::days(start_date, end_date)
            .map(|date| {
                let labels = Self::slot_hours()
                    .filter(|hour| self.slot_window(date, *hour).is_some())
                    .map(Self::slot_label)
                    .collect();
                (date, labels)
            })
            .collect()
    }
}
