//! Savings goal model

use serde::{Deserialize, Serialize};

use super::ids::GoalId;
use super::money::Money;

/// A savings target kept alongside a user's budgets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: GoalId,
    pub name: String,
    pub target: Money,
    #[serde(default)]
    pub saved: Money,
}
