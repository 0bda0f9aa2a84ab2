//! Seedling: a generational wealth simulator.
//!
//! A founder's finances are stepped year by year to the end of life,
//! children are drawn and inherit the estate, and the process recurses
//! for the requested number of generations. Two trees grown from the
//! same seed, one under baseline assumptions and one under a what-if
//! scenario, are compared generation by generation.

pub mod config;
pub mod education;
pub mod engine;
pub mod error;
pub mod event;
pub mod habit;
pub mod life_events;
pub mod member;
pub mod names;
pub mod report;
pub mod reproduction;
pub mod rng;
pub mod snapshot;
pub mod types;
pub mod year_step;

pub use config::{FounderOverrides, FounderSpec, RunConfig, ScenarioOverrides, SimParams};
pub use engine::{run_simulation, GenerationalSimulator};
pub use error::{SimError, SimResult};
pub use member::{FamilyMember, FinancialHealth};
pub use report::{compare, Comparison, ComparisonInput, ComparisonSummary};
