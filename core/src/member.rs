//! Family member state and the metrics derived from it.
//!
//! RULE: net worth, income, health and branch thickness are always
//! recomputed from balances. None of them is ever stored on the member.

use crate::{
    education::EducationLevel,
    event::{LifeEvent, LifeEventKind},
    snapshot::FinancialSnapshot,
    types::{Age, MemberId, Money, Year},
};
use serde::{Deserialize, Serialize};

/// Seniority years after which income growth stops.
pub const INCOME_GROWTH_CAP_YEARS: Age = 28;
/// Age at which the seniority clock starts.
pub const CAREER_START_AGE: Age = 22;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FinancialHealth {
    /// Net worth at least 2x annual income.
    Thriving,
    /// Net worth at least 0.5x annual income.
    Stable,
    /// Net worth non-negative but under 0.5x income.
    Struggling,
    /// Negative net worth.
    Distressed,
}

impl FinancialHealth {
    pub fn classify(net_worth: Money, annual_income: Money) -> Self {
        if net_worth < 0.0 {
            Self::Distressed
        } else if net_worth < 0.5 * annual_income {
            Self::Struggling
        } else if net_worth < 2.0 * annual_income {
            Self::Stable
        } else {
            Self::Thriving
        }
    }

    /// Thriving and stable households pass better money habits down.
    pub fn is_secure(self) -> bool {
        matches!(self, Self::Thriving | Self::Stable)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FamilyMember {
    pub id:         MemberId,
    pub name:       String,
    pub generation: u32,
    pub birth_year: Year,

    pub base_income:        Money,
    pub education:          EducationLevel,
    pub financial_literacy: f64,

    pub current_age: Age,
    pub savings:     Money,
    pub investments: Money,
    pub debt:        Money,
    pub home_equity: Money,
    pub owns_home:   bool,

    pub inheritance_received: Money,

    pub life_events:       Vec<LifeEvent>,
    pub financial_history: Vec<FinancialSnapshot>,

    /// Owned outright. Dropping a member drops its whole subtree.
    pub children:  Vec<FamilyMember>,
    /// Lookup-only back reference.
    pub parent_id: Option<MemberId>,
}

impl FamilyMember {
    pub fn net_worth(&self) -> Money {
        self.savings + self.investments + self.home_equity - self.debt
    }

    pub fn liquid_assets(&self) -> Money {
        self.savings + self.investments
    }

    /// Gross annual income at the member's current age.
    pub fn annual_income(&self) -> Money {
        let age_factor = if self.current_age > CAREER_START_AGE {
            let seniority = (self.current_age - CAREER_START_AGE).min(INCOME_GROWTH_CAP_YEARS);
            1.0 + 0.03 * seniority as f64
        } else {
            0.5
        };
        self.base_income * self.education.income_multiplier() * age_factor
    }

    /// Fraction of a positive surplus that is kept: 5% plus up to 15% from literacy.
    pub fn savings_rate(&self) -> f64 {
        0.05 + self.financial_literacy * 0.15
    }

    /// Fraction of kept surplus routed to investments rather than cash.
    pub fn investment_share(&self) -> f64 {
        self.financial_literacy * 0.6
    }

    pub fn financial_health(&self) -> FinancialHealth {
        FinancialHealth::classify(self.net_worth(), self.annual_income())
    }

    /// Log-scale display weight in [0.1, 1.0].
    pub fn branch_thickness(&self) -> f64 {
        let net_worth = self.net_worth();
        if net_worth <= 0.0 {
            return 0.1;
        }
        (0.1 + net_worth.max(1.0).log10() * 0.15).min(1.0)
    }

    pub fn calendar_year(&self) -> Year {
        self.birth_year + self.current_age as Year
    }

    pub fn has_event(&self, kind: LifeEventKind) -> bool {
        self.life_events.iter().any(|e| e.kind == kind)
    }

    pub fn record_event(&mut self, kind: LifeEventKind, description: String, impact: Money) {
        self.life_events.push(LifeEvent {
            year: self.calendar_year(),
            age: self.current_age,
            kind,
            description,
            financial_impact: impact,
        });
    }

    pub fn record_snapshot(&mut self) {
        let snapshot = FinancialSnapshot {
            year:        self.calendar_year(),
            age:         self.current_age,
            income:      self.annual_income(),
            savings:     self.savings,
            investments: self.investments,
            debt:        self.debt,
            home_equity: self.home_equity,
            net_worth:   self.net_worth(),
            health:      self.financial_health(),
        };
        self.financial_history.push(snapshot);
    }

    /// Pre-order walk: this member, then each child's subtree in order.
    pub fn flatten(&self) -> Vec<&FamilyMember> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a FamilyMember>) {
        out.push(self);
        for child in &self.children {
            child.collect_into(out);
        }
    }

    pub fn find(&self, id: &str) -> Option<&FamilyMember> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }
}

#[cfg(test)]
pub(crate) fn test_member(age: Age) -> FamilyMember {
    FamilyMember {
        id: "m0001".into(),
        name: "Test".into(),
        generation: 0,
        birth_year: 2024 - age as Year,
        base_income: 55_000.0,
        education: EducationLevel::SomeCollege,
        financial_literacy: 0.4,
        current_age: age,
        savings: 0.0,
        investments: 0.0,
        debt: 0.0,
        home_equity: 0.0,
        owns_home: false,
        inheritance_received: 0.0,
        life_events: Vec::new(),
        financial_history: Vec::new(),
        children: Vec::new(),
        parent_id: None,
    }
}
