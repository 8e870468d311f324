use std::sync::Arc;

use placemind_core::{
    LocalReminderRepository, MemoryReminderSource, Reminder, ReminderService,
    ReminderServiceError, ReminderValidationError, GEOFENCE_RADIUS_METERS,
};

#[tokio::test]
async fn missing_title_fails_validation_and_persists_nothing() {
    let source = Arc::new(MemoryReminderSource::new());
    let service = ReminderService::new(Arc::clone(&source));

    let no_title = Reminder::new(None, None, Some("Hall".to_string()), None, None);
    assert_eq!(
        service.validate(&no_title).unwrap_err(),
        ReminderValidationError::MissingTitle
    );

    let err = service.save_validated(&no_title).await.unwrap_err();
    assert!(matches!(
        err,
        ReminderServiceError::Validation(ReminderValidationError::MissingTitle)
    ));
    assert_eq!(err.to_string(), "Please enter title");
    assert!(source.is_empty());
}

#[tokio::test]
async fn missing_location_fails_validation_and_persists_nothing() {
    let source = Arc::new(MemoryReminderSource::new());
    let service = ReminderService::new(Arc::clone(&source));

    let no_location = Reminder::new(Some("Sydney".to_string()), None, None, None, None);
    let err = service.save_validated(&no_location).await.unwrap_err();

    assert!(matches!(
        err,
        ReminderServiceError::Validation(ReminderValidationError::MissingLocation)
    ));
    assert_eq!(err.to_string(), "Please select location");
    assert!(source.is_empty());
}

#[tokio::test]
async fn valid_reminder_is_persisted_and_yields_a_region_to_arm() {
    let source = Arc::new(MemoryReminderSource::new());
    let service = ReminderService::new(Arc::clone(&source));
    let reminder = sydney_reminder();

    let region = service
        .save_validated(&reminder)
        .await
        .unwrap()
        .expect("full coordinate pair should yield a region");

    assert_eq!(region.request_id, reminder.id.to_string());
    assert_eq!(region.reminder_id(), Some(reminder.id));
    assert_eq!(region.latitude, -33.87365);
    assert_eq!(region.longitude, 151.20689);
    assert_eq!(region.radius_meters, GEOFENCE_RADIUS_METERS);

    let loaded = service.get_reminder(reminder.id).await.unwrap();
    assert_eq!(loaded, reminder);
}

#[tokio::test]
async fn valid_reminder_without_coordinates_is_persisted_with_no_region() {
    let source = Arc::new(MemoryReminderSource::new());
    let service = ReminderService::new(Arc::clone(&source));

    let reminder = Reminder::new(
        Some("Sydney".to_string()),
        None,
        Some("Hall".to_string()),
        None,
        None,
    );
    let region = service.save_validated(&reminder).await.unwrap();

    assert!(region.is_none());
    assert_eq!(service.list_reminders().await.unwrap().len(), 1);
}

#[tokio::test]
async fn clear_all_removes_every_reminder() {
    let source = Arc::new(MemoryReminderSource::new());
    let service = ReminderService::new(Arc::clone(&source));

    for label in ["a", "b", "c"] {
        let reminder = Reminder::new(
            Some(label.to_string()),
            None,
            Some("Hall".to_string()),
            None,
            None,
        );
        service.save_validated(&reminder).await.unwrap();
    }
    assert_eq!(service.list_reminders().await.unwrap().len(), 3);

    service.clear_all().await.unwrap();

    assert!(service.list_reminders().await.unwrap().is_empty());
}

#[tokio::test]
async fn source_failures_surface_as_service_source_errors() {
    let source = Arc::new(MemoryReminderSource::new());
    let service = ReminderService::new(Arc::clone(&source));
    source.set_fault("Test exception");

    let err = service.save_validated(&sydney_reminder()).await.unwrap_err();
    assert!(matches!(err, ReminderServiceError::Source(_)));

    let list_err = service.list_reminders().await.unwrap_err();
    assert_eq!(list_err.to_string(), "Test exception");
}

#[tokio::test]
async fn service_runs_over_the_sqlite_repository() {
    let repo = LocalReminderRepository::open_in_memory().unwrap();
    let service = ReminderService::new(repo);
    let reminder = sydney_reminder();

    let region = service.save_validated(&reminder).await.unwrap();
    assert!(region.is_some());

    let loaded = service.get_reminder(reminder.id).await.unwrap();
    assert_eq!(loaded, reminder);
}

fn sydney_reminder() -> Reminder {
    Reminder::new(
        Some("Sydney".to_string()),
        Some("Sydney town hall".to_string()),
        Some("Hall".to_string()),
        Some(-33.87365),
        Some(151.20689),
    )
}
