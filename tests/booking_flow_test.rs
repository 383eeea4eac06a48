/// Booking engine end-to-end
///
/// Covers:
/// - Available-then-book round trip (slot becomes unavailable)
/// - Double booking of the same slot (Scenario C)
/// - Half-open boundary: touching bookings coexist
/// - Failed validation leaves both collections untouched (Scenario E)
/// - Employee assignment by job type
mod utils;

use fieldbook::modules::scheduling::application::AvailabilityQuery;
use fieldbook::modules::scheduling::domain::repository::BookingStore;
use fieldbook::AppError;
use utils::{booking_request, iso, scheduling_service};

#[tokio::test]
async fn available_slot_books_cleanly_then_reads_unavailable() {
    let (_, service) = scheduling_service();
    let query = AvailabilityQuery {
        start: iso(2025, 6, 16, 0),
        end: iso(2025, 6, 16, 23),
        job_type: "HVAC".to_string(),
    };

    let before = service.availability(&query).await.unwrap();
    assert!(!before.unavailable_slots["2025-06-16"].contains(&"14:00".to_string()));

    let confirmation = service
        .create_booking(&booking_request("HVAC", iso(2025, 6, 16, 14), iso(2025, 6, 16, 15)))
        .await
        .unwrap();
    assert_eq!(confirmation.job.scheduled_start, utils::local(2025, 6, 16, 14));
    assert_eq!(confirmation.appointment.scheduled_end, utils::local(2025, 6, 16, 15));

    let after = service.availability(&query).await.unwrap();
    assert_eq!(after.unavailable_slots["2025-06-16"], vec!["14:00".to_string()]);
}

#[tokio::test]
async fn second_identical_booking_is_rejected() {
    let (store, service) = scheduling_service();
    let request = booking_request("HVAC", iso(2025, 6, 16, 14), iso(2025, 6, 16, 15));

    service.create_booking(&request).await.unwrap();
    let err = service.create_booking(&request).await.unwrap_err();
    assert!(matches!(err, AppError::SlotUnavailable(_)));

    // only the first booking landed
    assert_eq!(store.get_jobs().await.unwrap().len(), 1);
    assert_eq!(store.get_appointments().await.unwrap().len(), 1);
}

#[tokio::test]
async fn touching_bookings_do_not_conflict() {
    let (_, service) = scheduling_service();

    service
        .create_booking(&booking_request("Plumbing", iso(2025, 6, 16, 10), iso(2025, 6, 16, 11)))
        .await
        .unwrap();
    // starts exactly where the previous one ends
    service
        .create_booking(&booking_request("Plumbing", iso(2025, 6, 16, 11), iso(2025, 6, 16, 12)))
        .await
        .unwrap();
}

#[tokio::test]
async fn same_slot_different_job_types_coexist() {
    let (_, service) = scheduling_service();

    service
        .create_booking(&booking_request("HVAC", iso(2025, 6, 16, 14), iso(2025, 6, 16, 15)))
        .await
        .unwrap();
    service
        .create_booking(&booking_request("Electrical", iso(2025, 6, 16, 14), iso(2025, 6, 16, 15)))
        .await
        .unwrap();
}

#[tokio::test]
async fn invalid_range_mutates_nothing() {
    let (store, service) = scheduling_service();

    let err = service
        .create_booking(&booking_request("HVAC", iso(2025, 6, 16, 15), iso(2025, 6, 16, 14)))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidDateRange(_)));

    assert!(store.get_jobs().await.unwrap().is_empty());
    assert!(store.get_appointments().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_duration_is_a_missing_field() {
    let (_, service) = scheduling_service();

    let mut request = booking_request("HVAC", iso(2025, 6, 16, 14), iso(2025, 6, 16, 15));
    request.duration = None;
    let err = service.create_booking(&request).await.unwrap_err();
    assert!(matches!(err, AppError::MissingFields(_)));
}

#[tokio::test]
async fn stored_duration_comes_from_the_window() {
    let (_, service) = scheduling_service();

    // a caller-supplied duration that disagrees with the window is ignored
    let mut request = booking_request("HVAC", iso(2025, 6, 16, 14), iso(2025, 6, 16, 15));
    request.duration = Some(45);
    let confirmation = service.create_booking(&request).await.unwrap();

    assert_eq!(confirmation.job.duration, 60);
    assert_eq!(confirmation.appointment.duration, 60);
}

#[tokio::test]
async fn employee_assignment_follows_the_fixed_mapping() {
    let (_, service) = scheduling_service();

    for (job_type, employee, hour) in [
        ("Electrical Repair", "employee_1", 9),
        ("HVAC Inspection", "employee_2", 11),
        ("Plumbing Maintenance", "employee_3", 13),
    ] {
        let confirmation = service
            .create_booking(&booking_request(
                job_type,
                iso(2025, 6, 16, hour),
                iso(2025, 6, 16, hour + 1),
            ))
            .await
            .unwrap();
        assert_eq!(confirmation.job.assigned_employees, vec![employee.to_string()]);
        assert_eq!(confirmation.appointment.assigned_technician, employee);
        assert_eq!(confirmation.appointment.arrival_window_minutes, 10);
    }
}

#[tokio::test]
async fn concurrent_requests_for_one_slot_yield_one_booking() {
    let (store, service) = scheduling_service();
    let service = std::sync::Arc::new(service);
    let request = booking_request("HVAC", iso(2025, 6, 16, 14), iso(2025, 6, 16, 15));

    let a = {
        let service = service.clone();
        let request = request.clone();
        tokio::spawn(async move { service.create_booking(&request).await })
    };
    let b = {
        let service = service.clone();
        let request = request.clone();
        tokio::spawn(async move { service.create_booking(&request).await })
    };

    let results = [a.await.unwrap(), b.await.unwrap()];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    assert!(results
        .iter()
        .any(|r| matches!(r, Err(AppError::SlotUnavailable(_)))));
    assert_eq!(store.get_jobs().await.unwrap().len(), 1);
}
