//! Goal progress tracking
//!
//! Classifies a savings goal against a savings figure and a reference date.
//! Completion wins over lateness: once the savings cover the goal it reads as
//! completed even if the target month has already passed.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::models::{Goal, GoalId, Money, MonthKey};

/// Where a goal stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalState {
    OnTrack,
    Completed,
    Overdue,
}

impl fmt::Display for GoalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnTrack => write!(f, "On track"),
            Self::Completed => write!(f, "Completed"),
            Self::Overdue => write!(f, "Overdue"),
        }
    }
}

/// Computed progress for one goal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub goal_id: GoalId,
    pub status: GoalState,
    /// Completion in percent, clamped to [0, 100]
    pub progress_percent: f64,
    /// Savings credited toward the goal, between zero and the goal amount
    pub saved: Money,
    /// Amount still missing; zero once completed
    pub remaining: Money,
}

impl GoalProgress {
    pub fn is_completed(&self) -> bool {
        self.status == GoalState::Completed
    }

    pub fn is_overdue(&self) -> bool {
        self.status == GoalState::Overdue
    }
}

/// Progress of `goal` given `current_savings`, evaluated on `today`
///
/// A goal is overdue once `today` is in a month after the target month.
/// A non-positive goal amount cannot be divided by and is reported as
/// completed at 100%.
pub fn compute_progress(goal: &Goal, current_savings: Money, today: NaiveDate) -> GoalProgress {
    if !goal.goal_amount.is_positive() {
        return GoalProgress {
            goal_id: goal.id,
            status: GoalState::Completed,
            progress_percent: 100.0,
            saved: Money::zero(),
            remaining: Money::zero(),
        };
    }

    let ratio = current_savings.cents() as f64 * 100.0 / goal.goal_amount.cents() as f64;
    let progress_percent = ratio.clamp(0.0, 100.0);

    let is_overdue = goal.target_month < MonthKey::of(today);

    let status = if progress_percent >= 100.0 {
        GoalState::Completed
    } else if is_overdue {
        GoalState::Overdue
    } else {
        GoalState::OnTrack
    };

    let saved = current_savings.clamp(Money::zero(), goal.goal_amount);

    GoalProgress {
        goal_id: goal.id,
        status,
        progress_percent,
        saved,
        remaining: goal.goal_amount - saved,
    }
}

/// Progress for each goal, in input order, against the same savings figure
pub fn track_all(goals: &[Goal], current_savings: Money, today: NaiveDate) -> Vec<GoalProgress> {
    goals
        .iter()
        .map(|goal| compute_progress(goal, current_savings, today))
        .collect()
}
