//! The year-step transition: advance one member by exactly one year.
//!
//! EXECUTION ORDER (fixed, never reordered):
//!   1. Income
//!   2. Living expenses
//!   3. Debt service
//!   4. Housing
//!   5. Disposable amount (plus the annualized habit change)
//!   6. Allocation or shortfall
//!   7. Growth
//!   8. Life-event detection, then snapshot
//!
//! The transition is total over validated inputs and never fails.

use crate::{
    config::SimParams,
    life_events,
    member::FamilyMember,
    types::{Age, Money},
};

/// No economic activity before this age.
pub const ADULT_AGE: Age = 18;

pub const NET_INCOME_SHARE: f64 = 0.75;
pub const LIVING_EXPENSE_FLOOR: Money = 25_000.0;
pub const LIVING_EXPENSE_SHARE: f64 = 0.45;
pub const MIN_PRINCIPAL_PAYMENT: f64 = 0.15;
pub const HOME_CARRYING_RATE: f64 = 0.025;
pub const RENT_FLOOR: Money = 10_000.0;
pub const RENT_SHARE: f64 = 0.22;
/// Portion of an uncovered shortfall that turns into debt; the rest is
/// absorbed by cutting back.
pub const SHORTFALL_DEBT_SHARE: f64 = 0.3;

/// Advance `member` by one year under `params`, mutating it in place.
pub fn advance_year(member: &mut FamilyMember, params: &SimParams) {
    if member.current_age > params.life_expectancy {
        return;
    }

    member.current_age += 1;

    if member.current_age < ADULT_AGE {
        return;
    }

    // 1–2. Income and living costs.
    let gross_income = member.annual_income();
    let net_income = gross_income * NET_INCOME_SHARE;
    let living_expenses = LIVING_EXPENSE_FLOOR.max(gross_income * LIVING_EXPENSE_SHARE);

    // 3. Debt service. Interest accrues first; the payment never exceeds
    //    what is owed, so debt cannot go negative.
    let debt_payment = service_debt(member, params.debt_interest_rate);

    // 4. Housing.
    let housing_cost = if member.owns_home {
        let cost = member.home_equity * HOME_CARRYING_RATE;
        member.home_equity *= 1.0 + params.home_appreciation;
        cost
    } else {
        RENT_FLOOR.max(gross_income * RENT_SHARE)
    };

    // 5. What is left over.
    let habit_annual = params.monthly_habit_change * 12.0;
    let disposable = net_income - living_expenses - debt_payment - housing_cost + habit_annual;

    // 6. Allocate a surplus or cover a shortfall.
    if disposable > 0.0 {
        let retained = disposable * member.savings_rate();
        let invested = retained * member.investment_share();
        member.investments += invested;
        member.savings += retained - invested;
    } else {
        cover_shortfall(member, -disposable);
    }

    // 7. Growth.
    member.savings *= 1.0 + params.savings_interest;
    member.investments *= 1.0 + params.investment_return;

    log::trace!(
        "{} age={} gross={gross_income:.0} disposable={disposable:.0} net_worth={:.0}",
        member.id,
        member.current_age,
        member.net_worth()
    );

    // 8. Milestones, home purchase, retirement; then record the year.
    life_events::detect(member, params);
    member.record_snapshot();
}

/// Accrue interest and make the minimum payment. Returns the payment.
fn service_debt(member: &mut FamilyMember, rate: f64) -> Money {
    if member.debt <= 0.0 {
        return 0.0;
    }
    let interest = member.debt * rate;
    let minimum = member.debt * MIN_PRINCIPAL_PAYMENT + interest;
    let payment = minimum.min(member.debt + interest);
    member.debt = (member.debt + interest - payment).max(0.0);
    payment
}

/// Draw a shortfall from cash savings; what savings cannot cover becomes
/// partial new debt.
fn cover_shortfall(member: &mut FamilyMember, shortfall: Money) {
    if member.savings >= shortfall {
        member.savings -= shortfall;
    } else {
        let uncovered = shortfall - member.savings;
        member.savings = 0.0;
        member.debt += uncovered * SHORTFALL_DEBT_SHARE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::test_member;

    #[test]
    fn debt_service_accrues_then_pays_fifteen_percent_plus_interest() {
        let mut m = test_member(30);
        m.debt = 25_000.0;
        let payment = service_debt(&mut m, 0.07);
        assert!((payment - (3_750.0 + 1_750.0)).abs() < 1e-9);
        assert!((m.debt - 21_250.0).abs() < 1e-9);
    }

    #[test]
    fn small_debt_is_cleared_exactly() {
        let mut m = test_member(30);
        m.debt = 0.0;
        assert_eq!(service_debt(&mut m, 0.07), 0.0);
        assert_eq!(m.debt, 0.0);
    }

    #[test]
    fn shortfall_beyond_savings_becomes_partial_debt() {
        let mut m = test_member(30);
        m.savings = 1_000.0;
        cover_shortfall(&mut m, 11_000.0);
        assert_eq!(m.savings, 0.0);
        assert!((m.debt - 3_000.0).abs() < 1e-9);
    }

    #[test]
    fn shortfall_within_savings_leaves_debt_alone() {
        let mut m = test_member(30);
        m.savings = 5_000.0;
        cover_shortfall(&mut m, 2_000.0);
        assert_eq!(m.savings, 3_000.0);
        assert_eq!(m.debt, 0.0);
    }
}
