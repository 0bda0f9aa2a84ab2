//! Baseline vs. scenario comparison and the serializable tree view.
//!
//! Both runs use the same seed on a freshly seeded generator, so
//! equivalent draws line up as long as both runs issue the same number
//! of draws in the same order. A scenario that changes a child-count
//! draw (for example by lifting a parent out of distress) desynchronizes
//! everything drawn after that point.

use crate::{
    config::{validate_generations, FounderOverrides, FounderSpec, ScenarioOverrides, SimParams},
    education::EducationLevel,
    engine::GenerationalSimulator,
    error::SimResult,
    event::LifeEvent,
    member::{FamilyMember, FinancialHealth},
    snapshot::FinancialSnapshot,
    types::{Age, MemberId, Money, Year},
};
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenerationStats {
    pub generation:          u32,
    pub count:               usize,
    pub avg_net_worth:       Money,
    pub total_net_worth:     Money,
    pub home_ownership_rate: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RunSummary {
    pub total_members:   usize,
    pub total_net_worth: Money,
    pub by_generation:   Vec<GenerationStats>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Difference {
    pub total_net_worth: Money,
    /// Relative to the baseline total, floored at 1 to avoid dividing by zero.
    pub percent_change:  f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonSummary {
    pub baseline:   RunSummary,
    pub scenario:   RunSummary,
    pub difference: Difference,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunOutput {
    #[serde(serialize_with = "serialize_tree")]
    pub tree:   FamilyMember,
    pub params: SimParams,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    pub seed:     u64,
    pub baseline: RunOutput,
    pub scenario: RunOutput,
    pub summary:  ComparisonSummary,
}

/// Inputs for a paired comparison.
#[derive(Debug, Clone)]
pub struct ComparisonInput {
    pub founder:           FounderSpec,
    pub founder_overrides: FounderOverrides,
    pub baseline:          SimParams,
    pub scenario:          SimParams,
    pub generations:       u32,
    pub seed:              u64,
}

impl ComparisonInput {
    /// Scenario parameters derived from the baseline by applying `overrides`.
    pub fn from_overrides(
        founder: FounderSpec,
        baseline: SimParams,
        overrides: &ScenarioOverrides,
        generations: u32,
        seed: u64,
    ) -> Self {
        let scenario = baseline.with_overrides(overrides);
        Self {
            founder,
            founder_overrides: FounderOverrides::default(),
            baseline,
            scenario,
            generations,
            seed,
        }
    }
}

/// Run baseline and scenario under the same seed and summarize both.
pub fn compare(input: &ComparisonInput) -> SimResult<Comparison> {
    validate_generations(input.generations)?;
    let scenario_founder = input.founder.with_overrides(&input.founder_overrides);

    let mut baseline_sim = GenerationalSimulator::new(input.baseline.clone(), input.seed)?;
    let baseline_tree = baseline_sim.run(&input.founder, input.generations)?;

    let mut scenario_sim = GenerationalSimulator::new(input.scenario.clone(), input.seed)?;
    let scenario_tree = scenario_sim.run(&scenario_founder, input.generations)?;

    let summary = summarize(&baseline_tree, &scenario_tree);
    log::info!(
        "compare seed={}: baseline={:.0} scenario={:.0} diff={:.0} ({:+.1}%)",
        input.seed,
        summary.baseline.total_net_worth,
        summary.scenario.total_net_worth,
        summary.difference.total_net_worth,
        summary.difference.percent_change
    );

    Ok(Comparison {
        seed: input.seed,
        baseline: RunOutput { tree: baseline_tree, params: input.baseline.clone() },
        scenario: RunOutput { tree: scenario_tree, params: input.scenario.clone() },
        summary,
    })
}

/// Per-generation statistics for both trees, over the union of their depths.
pub fn summarize(baseline: &FamilyMember, scenario: &FamilyMember) -> ComparisonSummary {
    let baseline_members = baseline.flatten();
    let scenario_members = scenario.flatten();

    let generations = baseline_members
        .iter()
        .chain(scenario_members.iter())
        .map(|m| m.generation)
        .max()
        .unwrap_or(0)
        + 1;

    let baseline = run_summary(&baseline_members, generations);
    let scenario = run_summary(&scenario_members, generations);

    let diff = scenario.total_net_worth - baseline.total_net_worth;
    let difference = Difference {
        total_net_worth: diff,
        percent_change: diff / baseline.total_net_worth.max(1.0) * 100.0,
    };

    ComparisonSummary { baseline, scenario, difference }
}

fn run_summary(members: &[&FamilyMember], generations: u32) -> RunSummary {
    RunSummary {
        total_members: members.len(),
        total_net_worth: members.iter().map(|m| m.net_worth()).sum(),
        by_generation: (0..generations).map(|g| generation_stats(members, g)).collect(),
    }
}

pub fn generation_stats(members: &[&FamilyMember], generation: u32) -> GenerationStats {
    let cohort: Vec<&FamilyMember> = members
        .iter()
        .copied()
        .filter(|m| m.generation == generation)
        .collect();

    if cohort.is_empty() {
        return GenerationStats {
            generation,
            count: 0,
            avg_net_worth: 0.0,
            total_net_worth: 0.0,
            home_ownership_rate: 0.0,
        };
    }

    let count = cohort.len();
    let total: Money = cohort.iter().map(|m| m.net_worth()).sum();
    let owners = cohort.iter().filter(|m| m.owns_home).count();

    GenerationStats {
        generation,
        count,
        avg_net_worth: total / count as Money,
        total_net_worth: total,
        home_ownership_rate: owners as f64 / count as f64,
    }
}

/// Read-only projection of a member with its derived metrics filled in.
#[derive(Debug, Serialize)]
pub struct MemberView<'a> {
    pub id:                   &'a MemberId,
    pub name:                 &'a str,
    pub generation:           u32,
    pub birth_year:           Year,
    pub current_age:          Age,
    pub education:            EducationLevel,
    pub financial_literacy:   f64,
    pub income:               Money,
    pub savings:              Money,
    pub investments:          Money,
    pub debt:                 Money,
    pub home_equity:          Money,
    pub net_worth:            Money,
    pub owns_home:            bool,
    pub inheritance_received: Money,
    pub financial_health:     FinancialHealth,
    pub branch_thickness:     f64,
    pub parent_id:            Option<&'a MemberId>,
    pub financial_history:    &'a [FinancialSnapshot],
    pub life_events:          &'a [LifeEvent],
    pub children:             Vec<MemberView<'a>>,
}

impl<'a> MemberView<'a> {
    pub fn new(member: &'a FamilyMember) -> Self {
        Self {
            id:                   &member.id,
            name:                 &member.name,
            generation:           member.generation,
            birth_year:           member.birth_year,
            current_age:          member.current_age,
            education:            member.education,
            financial_literacy:   member.financial_literacy,
            income:               member.annual_income(),
            savings:              member.savings,
            investments:          member.investments,
            debt:                 member.debt,
            home_equity:          member.home_equity,
            net_worth:            member.net_worth(),
            owns_home:            member.owns_home,
            inheritance_received: member.inheritance_received,
            financial_health:     member.financial_health(),
            branch_thickness:     member.branch_thickness(),
            parent_id:            member.parent_id.as_ref(),
            financial_history:    &member.financial_history,
            life_events:          &member.life_events,
            children:             member.children.iter().map(MemberView::new).collect(),
        }
    }
}

pub fn serialize_tree<S: Serializer>(tree: &FamilyMember, serializer: S) -> Result<S::Ok, S::Error> {
    MemberView::new(tree).serialize(serializer)
}
