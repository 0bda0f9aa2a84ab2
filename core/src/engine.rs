//! The generational driver: grows a family tree from a founder.
//!
//! EXECUTION ORDER per member (fixed, never reordered):
//!   1. Year-steps until the member reaches life expectancy
//!   2. Reproduction (if generations remain)
//!   3. Inheritance
//!   4. Recurse into each child, in birth order
//!
//! RULES:
//!   - The simulator owns the run's only SimRng. Nothing else draws.
//!   - Members are created here or by reproduction, never destroyed.

use crate::{
    config::{validate_generations, FounderSpec, SimParams},
    error::SimResult,
    member::FamilyMember,
    reproduction::{self, IdSequence},
    rng::SimRng,
    types::Year,
    year_step,
};

pub struct GenerationalSimulator {
    pub params: SimParams,
    rng:        SimRng,
    ids:        IdSequence,
}

impl GenerationalSimulator {
    /// Build a simulator. Fails if `params` is out of range.
    pub fn new(params: SimParams, seed: u64) -> SimResult<Self> {
        params.validate()?;
        Ok(Self {
            params,
            rng: SimRng::new(seed),
            ids: IdSequence::new(),
        })
    }

    /// Create generation 0. The starting-debt modifier and literacy boost
    /// apply here as they do to every later generation.
    pub fn create_founder(&mut self, spec: &FounderSpec) -> SimResult<FamilyMember> {
        spec.validate()?;
        let literacy = (spec.financial_literacy + self.params.financial_literacy_boost).min(1.0);

        let mut founder = FamilyMember {
            id: self.ids.next_id(),
            name: spec.name.clone(),
            generation: 0,
            birth_year: self.params.base_year - spec.age as Year,
            base_income: spec.income,
            education: spec.education,
            financial_literacy: literacy,
            current_age: spec.age,
            savings: spec.savings,
            investments: 0.0,
            debt: spec.debt * self.params.starting_debt_modifier,
            home_equity: 0.0,
            owns_home: false,
            inheritance_received: 0.0,
            life_events: Vec::new(),
            financial_history: Vec::new(),
            children: Vec::new(),
            parent_id: None,
        };
        founder.record_snapshot();
        Ok(founder)
    }

    pub fn simulate_year(&self, member: &mut FamilyMember) {
        year_step::advance_year(member, &self.params);
    }

    /// Step a member year by year until it reaches life expectancy.
    pub fn simulate_lifetime(&self, member: &mut FamilyMember) {
        while member.current_age < self.params.life_expectancy {
            self.simulate_year(member);
        }
        log::debug!(
            "{} gen={} lifetime done: net_worth={:.0} events={}",
            member.id,
            member.generation,
            member.net_worth(),
            member.life_events.len()
        );
    }

    /// Create children for `parent`, drawing the count when `count` is None.
    pub fn spawn_children(&mut self, parent: &mut FamilyMember, count: Option<usize>) -> usize {
        reproduction::spawn_children(parent, count, &self.params, &mut self.rng, &mut self.ids)
    }

    /// Run `member`'s lifetime, then recurse through `generations_remaining`
    /// further generations. The tree hangs off `member.children`.
    pub fn simulate_generations(&mut self, member: &mut FamilyMember, generations_remaining: u32) {
        self.simulate_lifetime(member);

        if generations_remaining == 0 {
            return;
        }

        self.spawn_children(member, None);
        reproduction::transfer_wealth(member);

        for child in &mut member.children {
            self.simulate_generations(child, generations_remaining - 1);
        }
    }

    /// Create a founder and simulate the whole tree.
    pub fn run(&mut self, spec: &FounderSpec, generations: u32) -> SimResult<FamilyMember> {
        validate_generations(generations)?;
        let mut founder = self.create_founder(spec)?;
        self.simulate_generations(&mut founder, generations);
        log::info!(
            "run seed={} generations={generations}: {} members",
            self.rng.seed(),
            self.ids.issued()
        );
        Ok(founder)
    }
}

/// Run one self-contained simulation: a fresh generator seeded with `seed`.
pub fn run_simulation(
    founder: &FounderSpec,
    params: &SimParams,
    generations: u32,
    seed: u64,
) -> SimResult<FamilyMember> {
    let mut simulator = GenerationalSimulator::new(params.clone(), seed)?;
    simulator.run(founder, generations)
}
