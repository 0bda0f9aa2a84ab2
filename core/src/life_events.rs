//! Life-event detection, run once per year-step after growth.
//!
//! Detection only appends to the member's event log, except for the
//! home purchase, which also moves the down payment into home equity.

use crate::{
    config::SimParams,
    event::{format_dollars, LifeEventKind, WEALTH_MILESTONES},
    member::FamilyMember,
    types::{Age, Money},
};

pub const DOWN_PAYMENT: Money = 40_000.0;
/// Liquid assets must cover the down payment with this much headroom.
pub const DOWN_PAYMENT_COVERAGE: f64 = 1.3;
/// Home value as a multiple of the down payment (20% down).
pub const HOME_VALUE_MULTIPLE: f64 = 5.0;
pub const MIN_HOME_BUYER_AGE: Age = 30;
pub const MAX_HOME_BUYER_DEBT: Money = 10_000.0;

pub fn detect(member: &mut FamilyMember, params: &SimParams) {
    check_home_purchase(member);
    check_retirement(member, params.retirement_age);
    check_milestones(member);
}

fn check_home_purchase(member: &mut FamilyMember) {
    if member.owns_home
        || member.current_age < MIN_HOME_BUYER_AGE
        || member.debt >= MAX_HOME_BUYER_DEBT
        || member.liquid_assets() < DOWN_PAYMENT * DOWN_PAYMENT_COVERAGE
    {
        return;
    }

    // Investments are drawn down first, then cash.
    if member.investments >= DOWN_PAYMENT {
        member.investments -= DOWN_PAYMENT;
    } else {
        let remaining = DOWN_PAYMENT - member.investments;
        member.investments = 0.0;
        member.savings -= remaining;
    }

    member.owns_home = true;
    member.home_equity = DOWN_PAYMENT * HOME_VALUE_MULTIPLE;

    member.record_event(
        LifeEventKind::HomePurchase,
        "Purchased first home".into(),
        -DOWN_PAYMENT,
    );
}

fn check_retirement(member: &mut FamilyMember, retirement_age: Age) {
    if member.current_age != retirement_age {
        return;
    }
    let description = format!("Retired with {} net worth", format_dollars(member.net_worth()));
    member.record_event(LifeEventKind::Retirement, description, 0.0);
}

fn check_milestones(member: &mut FamilyMember) {
    let net_worth = member.net_worth();
    for threshold in WEALTH_MILESTONES {
        let kind = LifeEventKind::Milestone { threshold };
        if net_worth >= threshold as Money && !member.has_event(kind) {
            let description = format!("Reached {} net worth!", format_dollars(threshold as Money));
            member.record_event(kind, description, 0.0);
        }
    }
}
