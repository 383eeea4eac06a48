/// Availability engine
///
/// Classifies every grid slot in a date range as available or unavailable
/// for one job type, against a snapshot of existing bookings. Read-only;
/// the snapshot is whatever the caller fetched, so results are only as
/// fresh as that fetch.
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::collections::BTreeMap;

use crate::modules::scheduling::domain::entities::Booking;
use crate::modules::scheduling::domain::services::slot_grid::SlotGrid;
use crate::modules::scheduling::domain::value_objects::JobType;

#[derive(Debug, Clone, Copy)]
pub struct AvailabilityEngine {
    grid: SlotGrid,
}

impl AvailabilityEngine {
    pub fn new(tz: Tz) -> Self {
        Self {
            grid: SlotGrid::new(tz),
        }
    }

    /// Unavailable "HH:mm" labels per local calendar day.
    ///
    /// Every day in the range appears in the result, mapped to an empty
    /// list when fully open. A slot is unavailable when any booking of the
    /// requested job type strictly overlaps it.
    pub fn compute_unavailability(
        &self,
        job_type: JobType,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
        bookings: &[Booking],
    ) -> BTreeMap<String, Vec<String>> {
        let relevant: Vec<&Booking> = bookings
            .iter()
            .filter(|b| b.job_type == job_type)
            .collect();

        let start_date = self.grid.local_date(range_start);
        let end_date = self.grid.local_date(range_end);

        let mut unavailable_by_date = BTreeMap::new();
        for date in SlotGrid::days(start_date, end_date) {
            let mut taken = Vec::new();
            for hour in SlotGrid::slot_hours() {
                let Some(slot) = self.grid.slot_window(date, hour) else {
                    continue;
                };
                if relevant.iter().any(|b| b.window.overlaps(&slot)) {
                    taken.push(SlotGrid::slot_label(hour));
                }
            }
            unavailable_by_date.insert(date.format("%Y-%m-%d").to_string(), taken);
        }

        unavailable_by_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::scheduling::domain::value_objects::TimeWindow;
    use chrono::TimeZone;

    const TZ: Tz = chrono_tz::America::New_York;

    fn engine() -> AvailabilityEngine {
        AvailabilityEngine::new(TZ)
    }

    /// UTC instant for a local New York wall-clock hour
    fn local(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        TZ.with_ymd_and_hms(y, m, d, h, 0, 0)
            .single()
            .unwrap()
            .with_timezone(&Utc)
    }

    fn booking(job_type: JobType, start: DateTime<Utc>, end: DateTime<Utc>) -> Booking {
        Booking {
            job_type,
            window: TimeWindow::new(start, end).unwrap(),
        }
    }

    #[test]
    fn empty_bookings_leave_every_day_open() {
        let result = engine().compute_unavailability(
            JobType::Hvac,
            local(2025, 6, 16, 0),
            local(2025, 6, 22, 23),
            &[],
        );

        assert_eq!(result.len(), 7);
        for (_, slots) in result {
            assert!(slots.is_empty());
        }
    }

    #[test]
    fn booked_hour_is_reported_for_its_job_type_only() {
        let bookings = vec![booking(
            JobType::Electrical,
            local(2025, 6, 16, 10),
            local(2025, 6, 16, 11),
        )];

        let electrical = engine().compute_unavailability(
            JobType::Electrical,
            local(2025, 6, 16, 0),
            local(2025, 6, 16, 23),
            &bookings,
        );
        assert_eq!(electrical["2025-06-16"], vec!["10:00".to_string()]);

        let hvac = engine().compute_unavailability(
            JobType::Hvac,
            local(2025, 6, 16, 0),
            local(2025, 6, 16, 23),
            &bookings,
        );
        assert!(hvac["2025-06-16"].is_empty());
    }

    #[test]
    fn partial_hour_booking_blocks_both_touched_slots() {
        let bookings = vec![booking(
            JobType::Plumbing,
            local(2025, 6, 16, 10) + chrono::Duration::minutes(30),
            local(2025, 6, 16, 11) + chrono::Duration::minutes(30),
        )];

        let result = engine().compute_unavailability(
            JobType::Plumbing,
            local(2025, 6, 16, 0),
            local(2025, 6, 16, 23),
            &bookings,
        );
        assert_eq!(
            result["2025-06-16"],
            vec!["10:00".to_string(), "11:00".to_string()]
        );
    }

    #[test]
    fn adding_a_booking_is_monotonic() {
        let start = local(2025, 6, 16, 0);
        let end = local(2025, 6, 18, 23);
        let mut bookings = vec![booking(
            JobType::Hvac,
            local(2025, 6, 16, 9),
            local(2025, 6, 16, 10),
        )];

        let before = engine().compute_unavailability(JobType::Hvac, start, end, &bookings);
        bookings.push(booking(
            JobType::Hvac,
            local(2025, 6, 17, 14),
            local(2025, 6, 17, 15),
        ));
        let after = engine().compute_unavailability(JobType::Hvac, start, end, &bookings);

        for (date, slots) in &before {
            for slot in slots {
                assert!(after[date].contains(slot), "{} {} disappeared", date, slot);
            }
        }
    }

    #[test]
    fn zero_day_range_yields_empty_mapping() {
        let result = engine().compute_unavailability(
            JobType::Hvac,
            local(2025, 6, 18, 0),
            local(2025, 6, 16, 0),
            &[],
        );
        assert!(result.is_empty());
    }

    #[test]
    fn day_boundaries_follow_the_grid_timezone() {
        // 17:00 local is 21:00 UTC; a UTC-partitioned grid would file this
        // slot under the wrong day key
        let bookings = vec![booking(
            JobType::Hvac,
            local(2025, 6, 16, 17),
            local(2025, 6, 16, 18),
        )];
        let result = engine().compute_unavailability(
            JobType::Hvac,
            local(2025, 6, 16, 0),
            local(2025, 6, 16, 23),
            &bookings,
        );
        assert_eq!(result.len(), 1);
        assert_eq!(result["2025-06-16"], vec!["17:00".to_string()]);
    }
}
