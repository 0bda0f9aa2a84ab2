//! Shared primitive types used across the entire simulation.

/// A calendar year.
pub type Year = i32;

/// A member's age in whole years.
pub type Age = u32;

/// A stable, unique identifier for a family member within one run.
pub type MemberId = String;

/// Currency amount. All balances are nominal dollars.
pub type Money = f64;
