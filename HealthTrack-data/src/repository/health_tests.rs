use super::*;

use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;
use tempfile::tempdir;

use crate::models::{
    ActivityLevel, BmiCategory, BmiRecord, BmrRecord, CalorieEntry, Gender, HealthDocument,
};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn bmi_record(day: &str) -> BmiRecord {
    BmiRecord {
        date: date(day),
        weight: 70.0,
        height: 175.0,
        bmi: 22.9,
        category: BmiCategory::Normal,
    }
}

fn bmr_record(day: &str, tdee: i32) -> BmrRecord {
    BmrRecord {
        date: date(day),
        weight: 70.0,
        height: 175.0,
        age: 30,
        gender: Gender::Male,
        activity_level: ActivityLevel::Moderate,
        activity_description: ActivityLevel::Moderate.description().to_string(),
        bmr: 1649,
        tdee,
    }
}

fn entry(food: &str, calories: u32) -> CalorieEntry {
    CalorieEntry {
        food: food.to_string(),
        calories,
    }
}

#[test]
fn test_open_missing_file_starts_empty() -> Result<()> {
    let dir = tempdir()?;
    let repository = HealthRecordRepository::open(dir.path().join("health_data.json"))?;

    assert!(repository.bmi_records()?.is_empty());
    assert!(repository.bmr_records()?.is_empty());
    assert_eq!(repository.total_intake(date("2024-01-05"))?, 0);
    Ok(())
}

#[test]
fn test_open_rejects_invalid_json() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("health_data.json");
    std::fs::write(&path, "{not json")?;

    let result = HealthRecordRepository::open(&path);
    assert!(matches!(result, Err(RepositoryError::Malformed(_))));
    Ok(())
}

#[test]
fn test_open_rejects_document_with_missing_keys() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("health_data.json");
    std::fs::write(&path, r#"{"bmi_records": [], "bmr_records": []}"#)?;

    let result = HealthRecordRepository::open(&path);
    assert!(matches!(result, Err(RepositoryError::Malformed(_))));
    Ok(())
}

#[test]
fn test_every_append_rewrites_the_file() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("health_data.json");
    let repository = HealthRecordRepository::open(&path)?;

    repository.append_bmr(bmr_record("2024-01-01", 2000))?;
    let on_disk = FileStorage::new(&path).load()?;
    assert_eq!(on_disk.bmr_records.len(), 1);

    repository.append_intake(date("2024-01-05"), entry("rice", 300))?;
    let on_disk = FileStorage::new(&path).load()?;
    assert_eq!(on_disk.bmr_records.len(), 1);
    assert_eq!(on_disk.total_intake(date("2024-01-05")), 300);
    Ok(())
}

#[test]
fn test_reopen_sees_persisted_records() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("health_data.json");

    {
        let repository = HealthRecordRepository::open(&path)?;
        repository.append_bmi(bmi_record("2024-01-02"))?;
        repository.append_bmr(bmr_record("2024-01-01", 2000))?;
        repository.append_intake(date("2024-01-05"), entry("rice", 300))?;
        repository.append_intake(date("2024-01-05"), entry("egg", 80))?;
    }

    let reopened = HealthRecordRepository::open(&path)?;
    assert_eq!(reopened.bmi_records()?, vec![bmi_record("2024-01-02")]);
    assert_eq!(reopened.bmr_records()?, vec![bmr_record("2024-01-01", 2000)]);
    assert_eq!(
        reopened.entries_for(date("2024-01-05"))?,
        vec![entry("rice", 300), entry("egg", 80)]
    );
    Ok(())
}

#[test]
fn test_save_load_round_trip_is_lossless() -> Result<()> {
    let dir = tempdir()?;
    let storage = FileStorage::new(dir.path().join("health_data.json"));

    let mut document = HealthDocument::default();
    document.bmi_records.push(bmi_record("2024-01-02"));
    document.bmr_records.push(bmr_record("2024-01-01", 2556));
    document
        .calorie_intake
        .insert(date("2024-01-05"), vec![entry("rice", 300), entry("rice", 300)]);

    storage.save(&document)?;
    let loaded = storage.load()?;
    assert_eq!(loaded, document);

    // Re-serializing the reloaded document yields the same structured data
    assert_eq!(serde_json::to_value(&loaded)?, serde_json::to_value(&document)?);
    Ok(())
}

#[test]
fn test_persisted_shape_matches_wire_contract() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("health_data.json");
    let repository = HealthRecordRepository::open(&path)?;

    repository.append_bmi(bmi_record("2024-01-02"))?;
    repository.append_bmr(bmr_record("2024-01-01", 2556))?;
    repository.append_intake(date("2024-01-05"), entry("rice", 300))?;
    repository.append_intake(date("2024-01-05"), entry("egg", 80))?;

    let on_disk: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(
        on_disk,
        json!({
            "bmi_records": [{
                "date": "2024-01-02",
                "weight": 70.0,
                "height": 175.0,
                "bmi": 22.9,
                "category": "normal"
            }],
            "calorie_intake": {
                "2024-01-05": [
                    {"food": "rice", "calories": 300},
                    {"food": "egg", "calories": 80}
                ]
            },
            "bmr_records": [{
                "date": "2024-01-01",
                "weight": 70.0,
                "height": 175.0,
                "age": 30,
                "gender": "male",
                "activity_level": 3,
                "activity_description": "moderate activity (3-5 days/week)",
                "bmr": 1649,
                "tdee": 2556
            }]
        })
    );
    Ok(())
}

#[test]
fn test_appends_only_grow_collections() -> Result<()> {
    let repository = HealthRecordRepository::in_memory();

    repository.append_bmi(bmi_record("2024-01-02"))?;
    let first = repository.bmi_records()?;

    repository.append_bmi(bmi_record("2024-01-03"))?;
    let second = repository.bmi_records()?;

    assert_eq!(second.len(), 2);
    assert_eq!(&second[..1], &first[..]);
    Ok(())
}

#[test]
fn test_intake_keeps_insertion_order_and_duplicates() -> Result<()> {
    let repository = HealthRecordRepository::in_memory();
    let day = date("2024-01-05");

    repository.append_intake(day, entry("rice", 300))?;
    repository.append_intake(day, entry("egg", 80))?;
    repository.append_intake(day, entry("rice", 300))?;

    assert_eq!(
        repository.entries_for(day)?,
        vec![entry("rice", 300), entry("egg", 80), entry("rice", 300)]
    );
    assert_eq!(repository.total_intake(day)?, 680);
    Ok(())
}

#[test]
fn test_rejected_activity_level_on_load() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("health_data.json");
    std::fs::write(
        &path,
        r#"{
            "bmi_records": [],
            "calorie_intake": {},
            "bmr_records": [{
                "date": "2024-01-01",
                "weight": 70.0,
                "height": 175.0,
                "age": 30,
                "gender": "male",
                "activity_level": 6,
                "activity_description": "",
                "bmr": 1649,
                "tdee": 2556
            }]
        }"#,
    )?;

    let result = HealthRecordRepository::open(&path);
    assert!(matches!(result, Err(RepositoryError::Malformed(_))));
    Ok(())
}
