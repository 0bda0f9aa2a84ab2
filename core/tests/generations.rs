//! Generational driver tests: tree shape, lifetimes, ownership links.

use seedling_core::{
    engine::GenerationalSimulator,
    run_simulation, FamilyMember, FounderSpec, SimError, SimParams,
};
use std::collections::HashSet;

fn max_depth(member: &FamilyMember) -> u32 {
    member
        .children
        .iter()
        .map(max_depth)
        .max()
        .map_or(member.generation, |d| d.max(member.generation))
}

#[test]
fn one_generation_stops_at_children() {
    let _ = env_logger::builder().is_test(true).try_init();
    let tree = run_simulation(&FounderSpec::default(), &SimParams::default(), 1, 42).unwrap();

    for child in &tree.children {
        assert_eq!(child.generation, 1);
        assert!(child.children.is_empty(), "generation 1 must be a leaf");
        assert_eq!(child.current_age, 82);
    }
    assert!(max_depth(&tree) <= 1);
}

#[test]
fn every_member_lives_to_life_expectancy() {
    let params = SimParams { life_expectancy: 75, ..SimParams::default() };
    let tree = run_simulation(&FounderSpec::default(), &params, 3, 42).unwrap();

    for m in tree.flatten() {
        assert_eq!(m.current_age, 75, "{} stopped at {}", m.id, m.current_age);
        assert!(m.generation <= 3);
        if m.generation == 3 {
            assert!(m.children.is_empty());
        }
    }
}

#[test]
fn ids_are_unique_and_parent_links_resolve() {
    let tree = run_simulation(&FounderSpec::default(), &SimParams::default(), 3, 42).unwrap();
    let members = tree.flatten();

    let ids: HashSet<&str> = members.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids.len(), members.len(), "duplicate member ids");

    assert!(tree.parent_id.is_none());
    for m in &members {
        for child in &m.children {
            assert_eq!(child.parent_id.as_deref(), Some(m.id.as_str()));
            assert_eq!(child.generation, m.generation + 1);
        }
        if let Some(parent_id) = &m.parent_id {
            assert!(tree.find(parent_id).is_some(), "dangling parent id {parent_id}");
        }
    }
}

#[test]
fn descendants_record_one_snapshot_per_adult_year() {
    let tree = run_simulation(&FounderSpec::default(), &SimParams::default(), 2, 42).unwrap();

    for m in tree.flatten().iter().filter(|m| m.generation > 0) {
        // Ages 18 through 82 inclusive.
        assert_eq!(m.financial_history.len(), 65, "member {}", m.id);
        assert_eq!(m.financial_history[0].age, 18);
        assert!(m.financial_history.iter().all(|s| s.debt >= 0.0));
        assert!((0.0..=1.0).contains(&m.financial_literacy));
    }
}

#[test]
fn zero_generations_remaining_leaves_a_childless_leaf() {
    let mut sim = GenerationalSimulator::new(SimParams::default(), 42).unwrap();
    let mut founder = sim.create_founder(&FounderSpec::default()).unwrap();
    sim.simulate_generations(&mut founder, 0);

    assert!(founder.children.is_empty());
    assert_eq!(founder.current_age, 82);
}

#[test]
fn founder_modifiers_apply_at_creation() {
    let params = SimParams {
        starting_debt_modifier: 2.0,
        financial_literacy_boost: 0.3,
        ..SimParams::default()
    };
    let mut sim = GenerationalSimulator::new(params, 42).unwrap();
    let founder = sim
        .create_founder(&FounderSpec { financial_literacy: 0.9, ..FounderSpec::default() })
        .unwrap();

    assert_eq!(founder.debt, 50_000.0);
    assert_eq!(founder.financial_literacy, 1.0, "boosted literacy clamps at 1");
    assert_eq!(founder.birth_year, 2024 - 30);
}

#[test]
fn out_of_range_inputs_are_rejected() {
    let params = SimParams::default();

    let err = run_simulation(&FounderSpec::default(), &params, 0, 1).unwrap_err();
    assert!(matches!(err, SimError::InvalidParameter { field: "generations", .. }));

    let err = run_simulation(&FounderSpec::default(), &params, 7, 1).unwrap_err();
    assert!(matches!(err, SimError::InvalidParameter { field: "generations", .. }));

    let young = FounderSpec { age: 17, ..FounderSpec::default() };
    let err = run_simulation(&young, &params, 1, 1).unwrap_err();
    assert!(matches!(err, SimError::InvalidParameter { field: "age", .. }));

    let literate = FounderSpec { financial_literacy: 1.2, ..FounderSpec::default() };
    let err = run_simulation(&literate, &params, 1, 1).unwrap_err();
    assert!(matches!(err, SimError::InvalidParameter { field: "financial_literacy", .. }));

    let short_lived = SimParams { life_expectancy: 60, ..SimParams::default() };
    let err = run_simulation(&FounderSpec::default(), &short_lived, 1, 1).unwrap_err();
    assert!(matches!(err, SimError::InvalidParameter { field: "life_expectancy", .. }));
}
