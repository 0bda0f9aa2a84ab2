//! Run configuration: the Parameter Set, founder attributes, scenario
//! deltas, and the JSON run file that bundles them.
//!
//! RULE: validation happens here, at construction. The engine assumes
//! every value it receives has already passed `validate()`.

use crate::{
    education::EducationLevel,
    error::{SimError, SimResult},
    types::{Age, Money, Year},
};
use serde::{Deserialize, Serialize};

pub const MIN_GENERATIONS: u32 = 1;
pub const MAX_GENERATIONS: u32 = 6;
pub const DEFAULT_GENERATIONS: u32 = 4;
pub const DEFAULT_SEED: u64 = 42;

pub const MIN_FOUNDER_AGE: Age = 18;
pub const MAX_FOUNDER_AGE: Age = 65;
pub const MAX_LITERACY_BOOST: f64 = 0.5;

/// Economic and life assumptions plus the three scenario modifiers.
/// Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParams {
    // ── Economic assumptions ───────────────────────
    pub inflation_rate:     f64,
    pub investment_return:  f64,
    pub savings_interest:   f64,
    pub debt_interest_rate: f64,
    pub home_appreciation:  f64,

    // ── Life assumptions ───────────────────────────
    pub avg_children:         f64,
    pub avg_child_birth_age:  Age,
    pub retirement_age:       Age,
    pub life_expectancy:      Age,

    // ── Scenario modifiers ─────────────────────────
    /// Extra monthly savings (positive) or spending (negative).
    pub monthly_habit_change:     Money,
    pub starting_debt_modifier:   f64,
    pub financial_literacy_boost: f64,

    /// Calendar year the founder's age is measured from.
    pub base_year: Year,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            inflation_rate:     0.03,
            investment_return:  0.07,
            savings_interest:   0.02,
            debt_interest_rate: 0.07,
            home_appreciation:  0.04,

            avg_children:        2.1,
            avg_child_birth_age: 28,
            retirement_age:      65,
            life_expectancy:     82,

            monthly_habit_change:     0.0,
            starting_debt_modifier:   1.0,
            financial_literacy_boost: 0.0,

            base_year: 2024,
        }
    }
}

impl SimParams {
    pub fn validate(&self) -> SimResult<()> {
        let rates = [
            ("inflation_rate", self.inflation_rate),
            ("investment_return", self.investment_return),
            ("savings_interest", self.savings_interest),
            ("debt_interest_rate", self.debt_interest_rate),
            ("home_appreciation", self.home_appreciation),
        ];
        for (field, rate) in rates {
            if !rate.is_finite() || !(0.0..1.0).contains(&rate) {
                return Err(SimError::invalid(field, format!("rate {rate} must be in [0, 1)")));
            }
        }
        if !self.avg_children.is_finite() || self.avg_children < 0.0 {
            return Err(SimError::invalid("avg_children", "must be a non-negative number"));
        }
        if self.retirement_age == 0 {
            return Err(SimError::invalid("retirement_age", "must be positive"));
        }
        if self.life_expectancy <= self.retirement_age {
            return Err(SimError::invalid(
                "life_expectancy",
                format!(
                    "{} must exceed retirement age {}",
                    self.life_expectancy, self.retirement_age
                ),
            ));
        }
        if self.avg_child_birth_age == 0 || self.avg_child_birth_age >= self.life_expectancy {
            return Err(SimError::invalid(
                "avg_child_birth_age",
                "must be positive and below life expectancy",
            ));
        }
        if !self.monthly_habit_change.is_finite() {
            return Err(SimError::invalid("monthly_habit_change", "must be finite"));
        }
        if !self.starting_debt_modifier.is_finite() || self.starting_debt_modifier < 0.0 {
            return Err(SimError::invalid("starting_debt_modifier", "must be >= 0"));
        }
        if !(0.0..=MAX_LITERACY_BOOST).contains(&self.financial_literacy_boost) {
            return Err(SimError::invalid(
                "financial_literacy_boost",
                format!("must be in [0, {MAX_LITERACY_BOOST}]"),
            ));
        }
        Ok(())
    }

    /// Derive a scenario Parameter Set from this baseline.
    pub fn with_overrides(&self, overrides: &ScenarioOverrides) -> Self {
        let mut params = self.clone();
        if let Some(v) = overrides.monthly_habit_change {
            params.monthly_habit_change = v;
        }
        if let Some(v) = overrides.starting_debt_modifier {
            params.starting_debt_modifier = v;
        }
        if let Some(v) = overrides.financial_literacy_boost {
            params.financial_literacy_boost = v;
        }
        if let Some(v) = overrides.investment_return {
            params.investment_return = v;
        }
        params
    }
}

/// Optional what-if deltas. `None` keeps the baseline value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioOverrides {
    pub monthly_habit_change:     Option<Money>,
    pub starting_debt_modifier:   Option<f64>,
    pub financial_literacy_boost: Option<f64>,
    pub investment_return:        Option<f64>,
}

impl ScenarioOverrides {
    pub fn habit(monthly: Money) -> Self {
        Self { monthly_habit_change: Some(monthly), ..Self::default() }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Founder attributes as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FounderSpec {
    pub name:               String,
    pub age:                Age,
    pub income:             Money,
    pub savings:            Money,
    pub debt:               Money,
    pub education:          EducationLevel,
    pub financial_literacy: f64,
}

impl Default for FounderSpec {
    fn default() -> Self {
        Self {
            name:               "You".into(),
            age:                30,
            income:             55_000.0,
            savings:            5_000.0,
            debt:               25_000.0,
            education:          EducationLevel::SomeCollege,
            financial_literacy: 0.4,
        }
    }
}

impl FounderSpec {
    pub fn validate(&self) -> SimResult<()> {
        if self.name.trim().is_empty() {
            return Err(SimError::invalid("name", "must not be empty"));
        }
        if !(MIN_FOUNDER_AGE..=MAX_FOUNDER_AGE).contains(&self.age) {
            return Err(SimError::invalid(
                "age",
                format!("{} outside [{MIN_FOUNDER_AGE}, {MAX_FOUNDER_AGE}]", self.age),
            ));
        }
        let amounts = [("income", self.income), ("savings", self.savings), ("debt", self.debt)];
        for (field, amount) in amounts {
            if !amount.is_finite() || amount < 0.0 {
                return Err(SimError::invalid(field, format!("{amount} must be >= 0")));
            }
        }
        if !(0.0..=1.0).contains(&self.financial_literacy) {
            return Err(SimError::invalid(
                "financial_literacy",
                format!("{} outside [0, 1]", self.financial_literacy),
            ));
        }
        Ok(())
    }

    pub fn with_overrides(&self, overrides: &FounderOverrides) -> Self {
        let mut founder = self.clone();
        if let Some(name) = &overrides.name {
            founder.name = name.clone();
        }
        if let Some(v) = overrides.age {
            founder.age = v;
        }
        if let Some(v) = overrides.income {
            founder.income = v;
        }
        if let Some(v) = overrides.savings {
            founder.savings = v;
        }
        if let Some(v) = overrides.debt {
            founder.debt = v;
        }
        if let Some(v) = overrides.education {
            founder.education = v;
        }
        if let Some(v) = overrides.financial_literacy {
            founder.financial_literacy = v;
        }
        founder
    }
}

/// Optional founder deltas for the scenario run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FounderOverrides {
    pub name:               Option<String>,
    pub age:                Option<Age>,
    pub income:             Option<Money>,
    pub savings:            Option<Money>,
    pub debt:               Option<Money>,
    pub education:          Option<EducationLevel>,
    pub financial_literacy: Option<f64>,
}

pub fn validate_generations(generations: u32) -> SimResult<()> {
    if !(MIN_GENERATIONS..=MAX_GENERATIONS).contains(&generations) {
        return Err(SimError::invalid(
            "generations",
            format!("{generations} outside [{MIN_GENERATIONS}, {MAX_GENERATIONS}]"),
        ));
    }
    Ok(())
}

/// Everything a headless run needs, loadable from one JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub founder:           FounderSpec,
    pub params:            SimParams,
    pub scenario:          ScenarioOverrides,
    pub founder_overrides: FounderOverrides,
    pub generations:       u32,
    pub seed:              u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            founder:           FounderSpec::default(),
            params:            SimParams::default(),
            scenario:          ScenarioOverrides::default(),
            founder_overrides: FounderOverrides::default(),
            generations:       DEFAULT_GENERATIONS,
            seed:              DEFAULT_SEED,
        }
    }
}

impl RunConfig {
    /// Load and validate a run file. Missing fields take their defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config = Self::from_json(&content)?;
        Ok(config)
    }

    /// Parse and validate a run file. Education strings are matched
    /// case-insensitively; an unrecognized one is `UnknownEducation`.
    pub fn from_json(content: &str) -> SimResult<Self> {
        let raw: serde_json::Value = serde_json::from_str(content)?;
        for section in ["founder", "founder_overrides"] {
            if let Some(text) = raw.pointer(&format!("/{section}/education")).and_then(|v| v.as_str()) {
                text.parse::<EducationLevel>()?;
            }
        }
        let config: RunConfig = serde_json::from_value(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SimResult<()> {
        self.founder.validate()?;
        self.founder.with_overrides(&self.founder_overrides).validate()?;
        self.params.validate()?;
        self.params.with_overrides(&self.scenario).validate()?;
        validate_generations(self.generations)
    }
}
