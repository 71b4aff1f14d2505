//! Savings goal model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;
use super::month::MonthKey;

/// A savings goal: reach `goal_amount` by the end of `target_month`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub title: String,
    pub goal_amount: Money,
    pub target_month: MonthKey,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    pub fn new(title: impl Into<String>, goal_amount: Money, target_month: MonthKey) -> Self {
        Self {
            id: GoalId::new(),
            title: title.into(),
            goal_amount,
            target_month,
            created_at: Utc::now(),
        }
    }

    /// The first day of the target month, the goal's nominal date
    pub fn target_date(&self) -> NaiveDate {
        self.target_month.first_day()
    }

    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.title.trim().is_empty() {
            return Err(GoalValidationError::MissingTitle);
        }

        if !self.goal_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveAmount(self.goal_amount));
        }

        if !self.goal_amount.is_within_limit() {
            return Err(GoalValidationError::AmountTooLarge(self.goal_amount));
        }

        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} by {})",
            self.title, self.goal_amount, self.target_month
        )
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    MissingTitle,
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "Goal title is required"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Goal amount must be greater than 0 (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Goal amount {} exceeds the maximum of {}", amount, Money::MAX_AMOUNT)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}
