mod common;

use common::{names, team_roster};
use staff_directory::domain::CategoryKind;
use staff_directory::error::StorageError;
use staff_directory::{DirectoryService, JsonRosterStorage, RosterSource, RosterStorage};

#[test]
fn test_roster_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data/staff.json");

    {
        let mut service = DirectoryService::open(Box::new(JsonRosterStorage::new(&path)), None, false);
        service
            .execute("add_employee n/Hana Sato p/93334444 e/hana@example.com t/Alpha s/go s/rust")
            .unwrap();
        service.execute("assign 1 c/Role v/Lead").unwrap();
    }

    let service = DirectoryService::open(Box::new(JsonRosterStorage::new(&path)), None, false);
    assert_eq!(service.source(), RosterSource::Stored);
    let hana = &service.roster().persons()[0];
    assert_eq!(hana.name().as_str(), "Hana Sato");
    assert_eq!(hana.category_value(CategoryKind::Team), Some("Alpha"));
    assert_eq!(hana.category_value(CategoryKind::Role), Some("Lead"));
    assert_eq!(hana.skills().len(), 2);
}

#[test]
fn test_document_shape() {
    let dir = tempfile::tempdir().unwrap();
    let storage = JsonRosterStorage::new(dir.path().join("staff.json"));
    storage.save(&team_roster()[..1]).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(storage.path()).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "persons": [{
                "name": "Alice Tan",
                "phone": "91000001",
                "email": "alice@example.com",
                "skills": ["Java", "SQL"],
                "categories": [
                    {"category": "Department", "value": "Engineering"},
                    {"category": "Team", "value": "Alpha"}
                ]
            }]
        })
    );
}

#[test]
fn test_loads_legacy_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.json");
    std::fs::write(
        &path,
        r#"{
            "persons": [{
                "name": "Alex Yeoh",
                "phone": "87438807",
                "email": "alexyeoh@example.com",
                "address": "Blk 30 Geylang Street 29, #06-40",
                "tagged": [{"tagName": "friends"}],
                "skills": [{"name": "java"}]
            }]
        }"#,
    )
    .unwrap();

    let persons = JsonRosterStorage::new(&path).load().unwrap().unwrap();
    let skills: Vec<&str> = persons[0].skills().iter().map(|s| s.as_str()).collect();
    assert_eq!(skills, vec!["friends", "java"]);
    assert!(persons[0].categories().is_empty());
}

#[test]
fn test_missing_field_in_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    std::fs::write(&path, r#"{"persons": [{"name": "Amy", "phone": "123"}]}"#).unwrap();

    let err = JsonRosterStorage::new(&path).load().unwrap_err();
    assert!(matches!(err, StorageError::MissingField("email")));
    assert_eq!(err.to_string(), "Person's email field is missing!");
}

#[test]
fn test_corrupt_file_kept_until_next_change() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.json");
    std::fs::write(&path, "{ definitely not json").unwrap();

    let mut service = DirectoryService::open(Box::new(JsonRosterStorage::new(&path)), None, true);
    assert_eq!(service.source(), RosterSource::Unreadable);
    assert!(service.roster().is_empty());

    service.execute("list").unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ definitely not json");

    service
        .execute("add_employee n/Amy Koh p/98765432 e/amy@example.com")
        .unwrap();
    let persons = JsonRosterStorage::new(&path).load().unwrap().unwrap();
    assert_eq!(names(&persons), vec!["Amy Koh"]);
}

#[test]
fn test_missing_file_seeds_sample_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.json");

    let service = DirectoryService::open(Box::new(JsonRosterStorage::new(&path)), None, true);
    assert_eq!(service.source(), RosterSource::Sample);
    assert_eq!(service.roster().len(), 6);
    assert!(!path.exists());
}
