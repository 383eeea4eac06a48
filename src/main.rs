use anyhow::Result;
use chrono::{Datelike, Duration, TimeZone, Utc};
use std::sync::Arc;

use fieldbook::modules::scheduling::application::{AvailabilityQuery, BookingRequest};
use fieldbook::shared::config::AppConfig;
use fieldbook::shared::infrastructure::storage::MockDataCache;
use fieldbook::shared::utils::logger;
use fieldbook::SchedulingService;

/// Demo entry point: seed the mock dataset, print a week of availability
/// and book one HVAC slot.
#[tokio::main]
async fn main() -> Result<()> {
    logger::init_logger();
    let config = AppConfig::from_env();

    let cache = MockDataCache::new(config.timezone, Duration::hours(24));
    let store = cache.store().await?;
    let scheduling = SchedulingService::new(store, config.timezone);

    let start = Utc::now() + Duration::days(1);
    let end = Utc::now() + Duration::days(7);
    let availability = scheduling
        .availability(&AvailabilityQuery {
            start: start.to_rfc3339(),
            end: end.to_rfc3339(),
            job_type: "HVAC Inspection".to_string(),
        })
        .await?;
    println!("{}", serde_json::to_string_pretty(&availability)?);

    // Book 14:00 local two days out; a conflict surfaces as
    // SlotUnavailable and is reported, not retried.
    let day = (Utc::now() + Duration::days(2))
        .with_timezone(&config.timezone)
        .date_naive();
    let slot_start = config
        .timezone
        .with_ymd_and_hms(day.year(), day.month(), day.day(), 14, 0, 0)
        .single()
        .ok_or_else(|| anyhow::anyhow!("2pm does not exist on {}", day))?;
    let request = BookingRequest {
        customer_id: "demo_customer".to_string(),
        scheduled_start: slot_start.to_rfc3339(),
        scheduled_end: (slot_start + Duration::hours(1)).to_rfc3339(),
        job_type: "HVAC Inspection".to_string(),
        duration: Some(60),
        notes: Some("demo booking".to_string()),
        location: Some("42 Demo Ave".to_string()),
    };
    match scheduling.create_booking(&request).await {
        Ok(confirmation) => println!("{}", serde_json::to_string_pretty(&confirmation)?),
        Err(err) => println!("booking failed: {}", err),
    }

    Ok(())
}
