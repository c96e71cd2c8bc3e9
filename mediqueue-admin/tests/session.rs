//! Tests for add/edit dialogs driven through the form controller.

use mediqueue_admin::entity::{bed, doctor};
use mediqueue_admin::{
    AdminError, Bed, BedStatus, Doctor, DoctorStatus, EntityError, EntityManager,
    InMemoryRepository, SessionMode, SessionOutcome, StoreError, seed,
};

fn doctors() -> EntityManager<Doctor> {
    EntityManager::new(InMemoryRepository::from_records(seed::doctors()))
}

fn beds() -> EntityManager<Bed> {
    EntityManager::new(InMemoryRepository::from_records(seed::beds()))
}

#[test]
fn test_add_session_starts_blank_without_errors() {
    let session = doctors().open_add();
    assert_eq!(session.mode(), SessionMode::Add);
    assert_eq!(session.title(), "Add a New Doctor");
    assert!(session.form().errors().is_empty());
    assert_eq!(
        session.form().value(doctor::fields::STATUS).map(|v| v.to_string()),
        Some("active".to_string())
    );
}

#[test]
fn test_blank_add_is_rejected_and_nothing_stored() {
    let manager = doctors();
    let session = manager.open_add();

    let outcome = session.submit().unwrap();
    let SessionOutcome::Invalid(errors) = outcome else {
        panic!("blank doctor form must not save");
    };
    assert_eq!(errors.get(doctor::fields::FIRST_NAME), Some("This field is required."));
    assert_eq!(session.form().errors(), errors);
    assert_eq!(manager.len(), 3);
}

#[test]
fn test_completed_add_stores_doctor_with_next_id() {
    let manager = doctors();
    let session = manager.open_add();
    let form = session.form();
    form.handle_change(doctor::fields::FIRST_NAME, "Grace");
    form.handle_change(doctor::fields::LAST_NAME, "Hopper");
    form.set_field_value(doctor::fields::SPECIALITY, "Neurology");
    form.set_field_value(doctor::fields::DEPARTMENT, "Neurology");
    form.handle_change(doctor::fields::EMAIL, "g.hopper@hospital.com");
    form.handle_change(doctor::fields::PHONE, "5550001111");

    let SessionOutcome::Saved(saved) = session.submit().unwrap() else {
        panic!("complete doctor form must save");
    };
    assert_eq!(saved.id, 4);
    assert_eq!(saved.status, DoctorStatus::Active);
    assert_eq!(manager.get(4), Some(saved));
}

#[test]
fn test_bad_email_then_fix() {
    let manager = doctors();
    let session = manager.open_edit(2).unwrap();
    session.form().handle_change(doctor::fields::EMAIL, "m.johnson");

    let outcome = session.submit().unwrap();
    assert!(matches!(outcome, SessionOutcome::Invalid(ref errors) if errors.len() == 1));
    assert_eq!(manager.get(2).unwrap().email, "m.johnson@hospital.com");

    session.form().handle_change(doctor::fields::EMAIL, "mary@hospital.com");
    let SessionOutcome::Saved(saved) = session.submit().unwrap() else {
        panic!("fixed email must save");
    };
    assert_eq!(saved.id, 2);
    assert_eq!(manager.get(2).unwrap().email, "mary@hospital.com");
    assert_eq!(manager.len(), 3);
}

#[test]
fn test_edit_missing_record() {
    assert_eq!(
        doctors().open_edit(9).err(),
        Some(StoreError::NotFound {
            entity: "doctor",
            id: 9
        })
    );
}

#[test]
fn test_switch_reseeds_form_and_clears_errors() {
    let manager = beds();
    let mut session = manager.open_add();
    session.submit().unwrap();
    assert!(session.form().has_errors());

    session.switch_to(SessionMode::Edit(4)).unwrap();
    assert_eq!(session.mode(), SessionMode::Edit(4));
    assert_eq!(session.title(), "Edit Bed");
    assert!(!session.form().has_errors());
    assert_eq!(
        session.form().value(bed::fields::NUMBER).map(|v| v.to_string()),
        Some("B004".to_string())
    );
}

#[test]
fn test_bed_status_change_drops_patient() {
    let manager = beds();
    let session = manager.open_edit(1).unwrap();
    session
        .form()
        .set_field_value(bed::fields::STATUS, BedStatus::Available.as_str());

    let SessionOutcome::Saved(saved) = session.submit().unwrap() else {
        panic!("bed edit must save");
    };
    assert_eq!(saved.status, BedStatus::Available);
    assert_eq!(saved.patient_name, None);
    assert_eq!(saved.admission_date, None);
}

#[test]
fn test_short_bed_number_uses_min_length_message() {
    let session = beds().open_edit(2).unwrap();
    session.form().handle_change(bed::fields::NUMBER, "B2");

    let SessionOutcome::Invalid(errors) = session.submit().unwrap() else {
        panic!("two-character bed number must be rejected");
    };
    assert_eq!(errors.get(bed::fields::NUMBER), Some("Must be at least 3 characters."));
}

#[test]
fn test_invalid_date_surfaces_as_entity_error() {
    let session = beds().open_edit(3).unwrap();
    session
        .form()
        .handle_change(bed::fields::ADMISSION_DATE, "yesterday");

    let err = session.submit().unwrap_err();
    assert!(matches!(
        err,
        AdminError::Entity(EntityError::InvalidDate { ref value, .. }) if value == "yesterday"
    ));
}
