//! Reproduction and inheritance, run once per member at end of life.
//!
//! RULE: every draw comes from the run's SimRng, in a fixed order:
//!   child count (two draws), then per child:
//!   literacy jitter, education roll, name.
//! Changing this order breaks paired baseline/scenario comparisons.

use crate::{
    config::SimParams,
    education::EducationTable,
    event::{format_dollars, LifeEvent, LifeEventKind},
    member::{FamilyMember, FinancialHealth},
    names::NameGenerator,
    rng::SimRng,
    types::{MemberId, Money, Year},
};

pub const CHILD_COUNT_STD_DEV: f64 = 0.8;
/// Distressed parents have this fraction of the usual expected children.
pub const DISTRESSED_FERTILITY_FACTOR: f64 = 0.8;
pub const CHILD_BASE_INCOME: Money = 45_000.0;
pub const SIBLING_SPACING_YEARS: Year = 2;
pub const INHERITED_LITERACY_SHARE: f64 = 0.6;
pub const SECURE_HOME_LITERACY_BONUS: f64 = 0.1;

/// Sequential member ids, `m0001`, `m0002`, … for one run.
#[derive(Debug, Clone, Default)]
pub struct IdSequence {
    issued: u32,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> MemberId {
        self.issued += 1;
        format!("m{:04}", self.issued)
    }

    pub fn issued(&self) -> u32 {
        self.issued
    }
}

/// Draw how many children a parent has: normal around the average,
/// rounded half-to-even, floored at zero.
pub fn draw_child_count(parent_health: FinancialHealth, params: &SimParams, rng: &mut SimRng) -> usize {
    let mut mean = params.avg_children;
    if parent_health == FinancialHealth::Distressed {
        mean *= DISTRESSED_FERTILITY_FACTOR;
    }
    let draw = rng.gaussian(mean, CHILD_COUNT_STD_DEV).round_ties_even();
    if draw > 0.0 { draw as usize } else { 0 }
}

/// Create the parent's children and attach them to `parent.children`.
/// With `count == None` the number of children is drawn.
/// Returns how many children were created.
pub fn spawn_children(
    parent: &mut FamilyMember,
    count: Option<usize>,
    params: &SimParams,
    rng: &mut SimRng,
    ids: &mut IdSequence,
) -> usize {
    let parent_health = parent.financial_health();
    let parent_net_worth = parent.net_worth();
    let count = count.unwrap_or_else(|| draw_child_count(parent_health, params, rng));

    let generation = parent.generation + 1;
    let education_table = EducationTable::for_parent_net_worth(parent_net_worth);

    for i in 0..count {
        let mut literacy = parent.financial_literacy * INHERITED_LITERACY_SHARE + rng.uniform(0.1, 0.4);
        if parent_health.is_secure() {
            literacy += SECURE_HOME_LITERACY_BONUS;
        }
        let literacy = (literacy + params.financial_literacy_boost).clamp(0.0, 1.0);

        let education = education_table.pick(rng.next_f64());
        let name = NameGenerator::for_generation(generation, rng);

        let birth_year = parent.birth_year
            + params.avg_child_birth_age as Year
            + SIBLING_SPACING_YEARS * i as Year;

        parent.children.push(FamilyMember {
            id: ids.next_id(),
            name: name.to_string(),
            generation,
            birth_year,
            base_income: CHILD_BASE_INCOME,
            education,
            financial_literacy: literacy,
            current_age: 0,
            savings: 0.0,
            investments: 0.0,
            debt: education.average_debt() * params.starting_debt_modifier,
            home_equity: 0.0,
            owns_home: false,
            inheritance_received: 0.0,
            life_events: Vec::new(),
            financial_history: Vec::new(),
            children: Vec::new(),
            parent_id: Some(parent.id.clone()),
        });
    }

    log::debug!(
        "{} gen={} health={parent_health:?} net_worth={parent_net_worth:.0}: {count} children",
        parent.id,
        parent.generation
    );
    count
}

/// Split a positive estate equally among the parent's children.
/// Each share lands in the child's investments. Negative estates are
/// not inherited. Returns the per-child share (zero if nothing moved).
pub fn transfer_wealth(parent: &mut FamilyMember) -> Money {
    if parent.children.is_empty() {
        return 0.0;
    }
    let estate = parent.net_worth();
    if estate <= 0.0 {
        return 0.0;
    }

    let share = estate / parent.children.len() as Money;
    let death_year = parent.calendar_year();
    let description = format!("Inherited {} from {}", format_dollars(share), parent.name);

    for child in &mut parent.children {
        child.inheritance_received += share;
        child.investments += share;
        child.life_events.push(LifeEvent {
            year: death_year,
            age: child.current_age,
            kind: LifeEventKind::Inheritance,
            description: description.clone(),
            financial_impact: share,
        });
    }

    log::debug!("{} estate {estate:.0} split {} ways", parent.id, parent.children.len());
    share
}
