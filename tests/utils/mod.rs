#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::sync::Arc;

use fieldbook::modules::scheduling::application::BookingRequest;
use fieldbook::shared::infrastructure::storage::InMemoryStore;
use fieldbook::SchedulingService;

pub const TZ: Tz = chrono_tz::America::New_York;

/// UTC instant for a New York wall-clock time
pub fn local(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    TZ.with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .unwrap()
        .with_timezone(&Utc)
}

pub fn iso(y: i32, m: u32, d: u32, h: u32) -> String {
    local(y, m, d, h).to_rfc3339()
}

pub fn scheduling_service() -> (Arc<InMemoryStore>, SchedulingService) {
    let store = Arc::new(InMemoryStore::new());
    let service = SchedulingService::new(store.clone(), TZ);
    (store, service)
}

pub fn booking_request(job_type: &str, start: String, end: String) -> BookingRequest {
    BookingRequest {
        customer_id: "cust_1".to_string(),
        scheduled_start: start,
        scheduled_end: end,
        job_type: job_type.to_string(),
        duration: Some(60),
        notes: None,
        location: Some("1 Main St".to_string()),
    }
}
