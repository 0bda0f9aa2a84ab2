//! Education levels and the categorical draw that assigns them to children.

use crate::{
    error::SimError,
    types::Money,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Parent net worth above which children skew toward higher attainment.
pub const AFFLUENT_PARENT_NET_WORTH: Money = 500_000.0;
/// Parent net worth below which children skew toward lower attainment.
pub const STRAINED_PARENT_NET_WORTH: Money = 50_000.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum EducationLevel {
    HighSchool,
    SomeCollege,
    Bachelors,
    Masters,
    Doctorate,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 5] = [
        Self::HighSchool,
        Self::SomeCollege,
        Self::Bachelors,
        Self::Masters,
        Self::Doctorate,
    ];

    /// Income multiplier applied to base income.
    pub fn income_multiplier(self) -> f64 {
        match self {
            Self::HighSchool  => 1.0,
            Self::SomeCollege => 1.2,
            Self::Bachelors   => 1.65,
            Self::Masters     => 2.0,
            Self::Doctorate   => 2.4,
        }
    }

    /// Average student debt carried out of this level.
    pub fn average_debt(self) -> Money {
        match self {
            Self::HighSchool  => 0.0,
            Self::SomeCollege => 12_000.0,
            Self::Bachelors   => 35_000.0,
            Self::Masters     => 65_000.0,
            Self::Doctorate   => 100_000.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::HighSchool  => "high_school",
            Self::SomeCollege => "some_college",
            Self::Bachelors   => "bachelors",
            Self::Masters     => "masters",
            Self::Doctorate   => "doctorate",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EducationLevel {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == wanted)
            .ok_or_else(|| SimError::UnknownEducation(s.to_string()))
    }
}

impl TryFrom<String> for EducationLevel {
    type Error = SimError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A fixed ordered list of (level, weight) pairs.
///
/// The order is the walk order of the cumulative draw and never changes;
/// adjustments only move weight between entries.
#[derive(Debug, Clone, PartialEq)]
pub struct EducationTable {
    entries: [(EducationLevel, f64); 5],
}

impl EducationTable {
    pub fn base() -> Self {
        Self {
            entries: [
                (EducationLevel::HighSchool,  0.10),
                (EducationLevel::SomeCollege, 0.25),
                (EducationLevel::Bachelors,   0.45),
                (EducationLevel::Masters,     0.15),
                (EducationLevel::Doctorate,   0.05),
            ],
        }
    }

    /// The base table shifted by the parent's net worth.
    pub fn for_parent_net_worth(net_worth: Money) -> Self {
        let mut table = Self::base();
        if net_worth > AFFLUENT_PARENT_NET_WORTH {
            table.shift(EducationLevel::Bachelors, 0.1);
            table.shift(EducationLevel::Masters, 0.1);
            table.shift(EducationLevel::HighSchool, -0.1);
            table.shift(EducationLevel::SomeCollege, -0.1);
        } else if net_worth < STRAINED_PARENT_NET_WORTH {
            table.shift(EducationLevel::HighSchool, 0.1);
            table.shift(EducationLevel::SomeCollege, 0.1);
            table.shift(EducationLevel::Masters, -0.1);
            table.shift(EducationLevel::Doctorate, -0.05);
        }
        table
    }

    fn shift(&mut self, level: EducationLevel, delta: f64) {
        if let Some(entry) = self.entries.iter_mut().find(|(l, _)| *l == level) {
            entry.1 += delta;
        }
    }

    pub fn weight(&self, level: EducationLevel) -> f64 {
        self.entries
            .iter()
            .find(|(l, _)| *l == level)
            .map(|(_, w)| *w)
            .unwrap_or(0.0)
    }

    /// Walk the cumulative distribution and return the first level whose
    /// cumulative weight meets `roll`. Residual mass falls back to bachelors.
    pub fn pick(&self, roll: f64) -> EducationLevel {
        let mut cumulative = 0.0;
        for (level, weight) in &self.entries {
            cumulative += weight;
            if roll <= cumulative {
                return *level;
            }
        }
        EducationLevel::Bachelors
    }
}
