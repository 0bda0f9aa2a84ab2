//! Financial snapshot: one immutable record per simulated year.
//!
//! Snapshots are for time-series reporting only. The engine appends
//! them and never reads them back.

use crate::{
    member::FinancialHealth,
    types::{Age, Money, Year},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialSnapshot {
    pub year:        Year,
    pub age:         Age,
    pub income:      Money,
    pub savings:     Money,
    pub investments: Money,
    pub debt:        Money,
    pub home_equity: Money,
    pub net_worth:   Money,
    pub health:      FinancialHealth,
}
