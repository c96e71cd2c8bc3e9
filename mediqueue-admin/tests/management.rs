//! Tests for record management over the in-memory repository.

use chrono::NaiveDate;
use mediqueue_admin::{
    Bed, BedDraft, BedStats, BedStatus, Doctor, EntityManager, InMemoryRepository, Repository,
    StoreError, seed,
};

fn beds() -> EntityManager<Bed> {
    EntityManager::new(InMemoryRepository::from_records(seed::beds()))
}

fn draft(number: &str) -> BedDraft {
    BedDraft {
        number: number.to_string(),
        room: "Room 201".to_string(),
        department: "Maternity".to_string(),
        bed_type: "Maternity".to_string(),
        status: BedStatus::Reserved,
        patient_name: Some("Ada Lovelace".to_string()),
        admission_date: NaiveDate::from_ymd_opt(2024, 2, 1),
    }
}

#[test]
fn test_search_is_case_insensitive() {
    let doctors: EntityManager<Doctor> =
        EntityManager::new(InMemoryRepository::from_records(seed::doctors()));
    let found: Vec<_> = doctors.search("PEDIA").into_iter().map(|d| d.id).collect();
    assert_eq!(found, vec![2]);
    assert_eq!(doctors.search("").len(), 3);
    assert!(doctors.search("nobody").is_empty());
}

#[test]
fn test_search_with_status_filter() {
    let manager = beds();
    let occupied: Vec<_> = manager
        .search_where("", |bed| bed.status == BedStatus::Occupied)
        .into_iter()
        .map(|bed| bed.number)
        .collect();
    assert_eq!(occupied, vec!["B001", "B003"]);

    let cardiology_free = manager.search_where("cardio", |bed| bed.status == BedStatus::Available);
    assert_eq!(cardiology_free.len(), 1);
    assert_eq!(cardiology_free[0].id, 2);
}

#[test]
fn test_add_update_delete() {
    let manager = beds();

    let added = manager.add(draft("B006"));
    assert_eq!(added.id, 6);
    assert_eq!(manager.len(), 6);

    let updated = manager.update(6, draft("B106")).unwrap();
    assert_eq!(updated.id, 6);
    assert_eq!(manager.get(6).unwrap().number, "B106");

    let removed = manager.delete(6).unwrap();
    assert_eq!(removed.number, "B106");
    assert_eq!(manager.delete(6).unwrap_err(), StoreError::NotFound { entity: "bed", id: 6 });
    assert_eq!(
        manager.update(6, draft("B106")).unwrap_err(),
        StoreError::NotFound { entity: "bed", id: 6 }
    );
}

#[test]
fn test_ids_continue_after_highest() {
    let manager = beds();
    manager.delete(2).unwrap();
    assert_eq!(manager.add(draft("B007")).id, 6);

    let empty: EntityManager<Bed> = EntityManager::new(InMemoryRepository::new());
    assert_eq!(empty.add(draft("B001")).id, 1);
}

#[test]
fn test_clones_share_storage() {
    let manager = beds();
    let other = manager.clone();
    other.delete(1).unwrap();
    assert!(manager.get(1).is_none());
}

#[test]
fn test_stats_follow_changes() {
    let manager = beds();
    manager.add(draft("B006"));
    let stats = BedStats::from_beds(&manager.list());
    assert_eq!(stats.total, 6);
    assert_eq!(stats.reserved, 2);
}

#[test]
fn test_repository_is_empty() {
    let repo = InMemoryRepository::<Bed>::new();
    assert!(repo.is_empty());
    repo.insert(Bed {
        id: 10,
        number: "B010".into(),
        room: "Room 110".into(),
        department: "Radiology".into(),
        bed_type: "Standard".into(),
        status: BedStatus::Available,
        patient_name: None,
        admission_date: None,
    });
    assert!(!repo.is_empty());
    assert_eq!(repo.next_id(), 11);
}
