//! Life events, the append-only log each member carries.
//!
//! Variants are added over time, never removed or reordered.

use crate::types::{Age, Money, Year};
use serde::{Deserialize, Serialize};

/// Wealth milestones, ascending. Each fires at most once per member.
pub const WEALTH_MILESTONES: [u64; 4] = [100_000, 500_000, 1_000_000, 5_000_000];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum LifeEventKind {
    HomePurchase,
    Retirement,
    Milestone { threshold: u64 },
    Inheritance,
}

impl LifeEventKind {
    /// Stable string tag, e.g. `milestone_100000`.
    pub fn tag(&self) -> String {
        match self {
            Self::HomePurchase          => "home_purchase".into(),
            Self::Retirement            => "retirement".into(),
            Self::Milestone { threshold } => format!("milestone_{threshold}"),
            Self::Inheritance           => "inheritance".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LifeEvent {
    pub year: Year,
    pub age: Age,
    #[serde(flatten)]
    pub kind: LifeEventKind,
    pub description: String,
    /// Signed effect on net worth at the moment of the event.
    pub financial_impact: Money,
}

/// `1234567.8` → `$1,234,568`. Used in event descriptions.
pub fn format_dollars(amount: Money) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milestone_tags_are_stable() {
        assert_eq!(LifeEventKind::Milestone { threshold: 100_000 }.tag(), "milestone_100000");
        assert_eq!(LifeEventKind::HomePurchase.tag(), "home_purchase");
    }

    #[test]
    fn dollars_are_grouped() {
        assert_eq!(format_dollars(0.0), "$0");
        assert_eq!(format_dollars(999.4), "$999");
        assert_eq!(format_dollars(1_000.0), "$1,000");
        assert_eq!(format_dollars(1_234_567.8), "$1,234,568");
        assert_eq!(format_dollars(-40_000.0), "-$40,000");
    }

    #[test]
    fn event_serializes_with_flat_tag() {
        let event = LifeEvent {
            year: 2060,
            age: 65,
            kind: LifeEventKind::Retirement,
            description: "Retired".into(),
            financial_impact: 0.0,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event_type"], "retirement");
        assert_eq!(json["age"], 65);
    }
}
