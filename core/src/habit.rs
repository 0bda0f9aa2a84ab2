//! Compound impact of a monthly habit change, independent of the family
//! simulation. Answers "what does $X/month become?".

use crate::{
    error::{SimError, SimResult},
    event::format_dollars,
    types::Money,
};
use serde::Serialize;

/// Years each later generation keeps the money compounding.
pub const GENERATION_SPAN_YEARS: u32 = 30;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HabitImpact {
    pub monthly_amount:    Money,
    pub years:             u32,
    pub annual_return:     f64,
    pub future_value:      Money,
    pub total_contributed: Money,
    pub interest_earned:   Money,
    /// Value held by the saver, their children, and their grandchildren.
    pub generational_projection: [Money; 3],
    pub insight: String,
}

/// Future value of `monthly_amount` saved every month for `years` at
/// `annual_return`, compounded monthly.
pub fn habit_impact(monthly_amount: Money, years: u32, annual_return: f64) -> SimResult<HabitImpact> {
    if !monthly_amount.is_finite() {
        return Err(SimError::invalid("monthly_amount", "must be finite"));
    }
    if !annual_return.is_finite() || annual_return < 0.0 {
        return Err(SimError::invalid("annual_return", "must be >= 0"));
    }

    let months = years as f64 * 12.0;
    let monthly_rate = annual_return / 12.0;
    let future_value = if monthly_rate == 0.0 {
        monthly_amount * months
    } else {
        monthly_amount * (((1.0 + monthly_rate).powf(months) - 1.0) / monthly_rate)
    };
    let total_contributed = monthly_amount * months;

    let span_growth = (1.0 + annual_return).powi(GENERATION_SPAN_YEARS as i32);
    let second = future_value * span_growth;
    let third = second * span_growth;

    let insight = format!(
        "{}/month becomes {} in {years} years, and could grow to {} by your grandchildren's generation!",
        format_dollars(monthly_amount),
        format_dollars(future_value),
        format_dollars(third)
    );

    Ok(HabitImpact {
        monthly_amount,
        years,
        annual_return,
        future_value,
        total_contributed,
        interest_earned: future_value - total_contributed,
        generational_projection: [future_value, second, third],
        insight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_return_is_plain_accumulation() {
        let impact = habit_impact(100.0, 10, 0.0).unwrap();
        assert_eq!(impact.future_value, 12_000.0);
        assert_eq!(impact.interest_earned, 0.0);
        assert_eq!(impact.generational_projection, [12_000.0; 3]);
    }

    #[test]
    fn compounding_beats_contributions() {
        let impact = habit_impact(50.0, 30, 0.07).unwrap();
        assert_eq!(impact.total_contributed, 18_000.0);
        // Standard annuity table value for $50/month, 30y, 7%/12.
        assert!((impact.future_value - 60_998.4).abs() < 5.0, "{}", impact.future_value);
        assert!(impact.generational_projection[2] > impact.generational_projection[1]);
    }

    #[test]
    fn rejects_negative_return() {
        assert!(habit_impact(50.0, 30, -0.01).is_err());
    }
}
