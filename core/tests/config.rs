//! Run-file parsing and validation.

use seedling_core::{
    config::{RunConfig, DEFAULT_GENERATIONS, DEFAULT_SEED},
    education::EducationLevel,
    ScenarioOverrides, SimError, SimParams,
};

#[test]
fn empty_run_file_takes_defaults() {
    let config = RunConfig::from_json("{}").unwrap();
    assert_eq!(config, RunConfig::default());
    assert_eq!(config.generations, DEFAULT_GENERATIONS);
    assert_eq!(config.seed, DEFAULT_SEED);
    assert_eq!(config.params.life_expectancy, 82);
}

#[test]
fn partial_sections_merge_with_defaults() {
    let json = r#"{
        "founder": { "name": "First Gen", "age": 25, "education": "bachelors" },
        "params": { "investment_return": 0.05 },
        "scenario": { "monthly_habit_change": 150 },
        "generations": 3,
        "seed": 7
    }"#;
    let config = RunConfig::from_json(json).unwrap();

    assert_eq!(config.founder.name, "First Gen");
    assert_eq!(config.founder.age, 25);
    assert_eq!(config.founder.education, EducationLevel::Bachelors);
    assert_eq!(config.founder.income, 55_000.0);
    assert_eq!(config.params.investment_return, 0.05);
    assert_eq!(config.params.savings_interest, 0.02);
    assert_eq!(config.scenario, ScenarioOverrides::habit(150.0));
    assert_eq!(config.generations, 3);
    assert_eq!(config.seed, 7);
}

#[test]
fn unknown_education_is_rejected() {
    let err = RunConfig::from_json(r#"{ "founder": { "education": "phd" } }"#).unwrap_err();
    assert!(matches!(err, SimError::UnknownEducation(ref s) if s == "phd"), "got {err}");

    let json = r#"{ "founder_overrides": { "education": "trade school" } }"#;
    let err = RunConfig::from_json(json).unwrap_err();
    assert!(matches!(err, SimError::UnknownEducation(_)), "got {err}");

    let err = "phd".parse::<EducationLevel>().unwrap_err();
    assert!(matches!(err, SimError::UnknownEducation(_)));
}

#[test]
fn education_strings_match_case_insensitively() {
    let json = r#"{
        "founder": { "education": "Bachelors" },
        "founder_overrides": { "education": "DOCTORATE" }
    }"#;
    let config = RunConfig::from_json(json).unwrap();

    assert_eq!(config.founder.education, EducationLevel::Bachelors);
    assert_eq!(config.founder_overrides.education, Some(EducationLevel::Doctorate));
}

#[test]
fn out_of_range_scenario_is_rejected() {
    let json = r#"{ "scenario": { "financial_literacy_boost": 0.8 } }"#;
    let err = RunConfig::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        SimError::InvalidParameter { field: "financial_literacy_boost", .. }
    ));

    let json = r#"{ "scenario": { "starting_debt_modifier": -1.0 } }"#;
    assert!(RunConfig::from_json(json).is_err());

    let json = r#"{ "generations": 9 }"#;
    assert!(RunConfig::from_json(json).is_err());
}

#[test]
fn overrides_leave_unset_fields_alone() {
    let base = SimParams::default();
    let overrides = ScenarioOverrides {
        investment_return: Some(0.05),
        ..ScenarioOverrides::default()
    };
    let scenario = base.with_overrides(&overrides);

    assert_eq!(scenario.investment_return, 0.05);
    assert_eq!(scenario.monthly_habit_change, base.monthly_habit_change);
    assert_eq!(scenario.starting_debt_modifier, base.starting_debt_modifier);
    assert!(ScenarioOverrides::default().is_empty());
    assert!(!overrides.is_empty());
}

#[test]
fn run_file_loads_from_disk() {
    let path = std::env::temp_dir()
        .join(format!("seedling-run-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "seed": 1234 }"#).unwrap();

    let config = RunConfig::load(path.to_str().unwrap()).unwrap();
    assert_eq!(config.seed, 1234);
    std::fs::remove_file(&path).unwrap();

    let missing = RunConfig::load("/nonexistent/seedling.json");
    assert!(missing.is_err());
}
