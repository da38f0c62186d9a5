use std::str::FromStr;

use tempfile::TempDir;

use super::{DietType, FitnessLevel, Gender, Goal, Location, StressLevel, UserProfile};

pub(crate) fn sample_profile(diet: DietType) -> UserProfile {
    UserProfile {
        name: "Asha".to_string(),
        age: 29,
        gender: Gender::Female,
        height_cm: 165.0,
        weight_kg: 61.5,
        goal: Goal::WeightLoss,
        level: FitnessLevel::Beginner,
        location: Location::Home,
        diet,
        medical_notes: None,
        stress: StressLevel::Moderate,
    }
}

#[test]
fn validate_accepts_sample_profile() {
    assert!(sample_profile(DietType::Veg).validate().is_ok());
}

#[test]
fn validate_rejects_non_positive_measurements() {
    let mut profile = sample_profile(DietType::Veg);
    profile.age = 0;
    let err = profile.validate().unwrap_err();
    assert!(err.to_string().contains("age"));

    let mut profile = sample_profile(DietType::Veg);
    profile.height_cm = 0.0;
    let err = profile.validate().unwrap_err();
    assert!(err.to_string().contains("height"));

    let mut profile = sample_profile(DietType::Veg);
    profile.weight_kg = f64::NAN;
    let err = profile.validate().unwrap_err();
    assert!(err.to_string().contains("weight"));
}

#[test]
fn validate_rejects_blank_name() {
    let mut profile = sample_profile(DietType::Keto);
    profile.name = "   ".to_string();
    assert!(profile.validate().is_err());
}

#[test]
fn medical_notes_default_to_none() {
    let mut profile = sample_profile(DietType::Vegan);
    assert_eq!(profile.medical_or_none(), "None");

    profile.medical_notes = Some("  ".to_string());
    assert_eq!(profile.medical_or_none(), "None");

    profile.medical_notes = Some("Knee injury".to_string());
    assert_eq!(profile.medical_or_none(), "Knee injury");
}

#[test]
fn enums_parse_from_kebab_case() {
    assert_eq!(DietType::from_str("non-veg").unwrap(), DietType::NonVeg);
    assert_eq!(Goal::from_str("muscle-gain").unwrap(), Goal::MuscleGain);
    assert_eq!(Location::from_str("outdoor").unwrap(), Location::Outdoor);
    assert!(DietType::from_str("pescatarian").is_err());
    assert_eq!(Goal::WeightLoss.to_string(), "weight-loss");
}

#[test]
fn missing_diet_and_stress_use_defaults() {
    let json = r#"{
        "name": "Ravi",
        "age": 40,
        "gender": "male",
        "height_cm": 178,
        "weight_kg": 82.3,
        "goal": "endurance",
        "level": "advanced",
        "location": "gym"
    }"#;

    let profile: UserProfile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.diet, DietType::NonVeg);
    assert_eq!(profile.stress, StressLevel::Moderate);
    assert_eq!(profile.medical_notes, None);
}

#[test]
fn from_json_file_reads_profile() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profile.json");
    let profile = sample_profile(DietType::Vegan);
    std::fs::write(&path, serde_json::to_string(&profile).unwrap()).unwrap();

    let loaded = UserProfile::from_json_file(&path).unwrap();
    assert_eq!(loaded, profile);
}

#[test]
fn from_json_file_reports_parse_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profile.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = UserProfile::from_json_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed parsing JSON profile"));
}
