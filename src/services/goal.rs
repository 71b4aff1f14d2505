//! Goal service
//!
//! Savings goals and their progress. Progress here is measured against
//! all-time savings; the dashboard measures against the month's savings
//! instead (see [`crate::reports::DashboardReport`]).

use chrono::NaiveDate;

use crate::analytics::{self, GoalProgress};
use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Goal, Money, MonthKey};
use crate::storage::Storage;

use super::transaction::TransactionService;

/// Service for goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

/// Input for creating a new goal
#[derive(Debug, Clone)]
pub struct CreateGoalInput {
    pub title: String,
    pub goal_amount: Money,
    pub target_month: MonthKey,
}

/// A goal together with its computed progress
#[derive(Debug, Clone)]
pub struct GoalWithProgress {
    pub goal: Goal,
    pub progress: GoalProgress,
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create and persist a new goal
    pub fn create(&self, input: CreateGoalInput) -> TrackerResult<Goal> {
        let goal = Goal::new(input.title.trim(), input.goal_amount, input.target_month);

        goal.validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        self.storage.log_create(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.title.clone()),
            &goal,
        )?;

        tracing::info!(id = %goal.id, target = %goal.target_month, "created goal");
        Ok(goal)
    }

    /// Find a goal by id (full or short) or by exact title, case-insensitive
    pub fn find(&self, identifier: &str) -> TrackerResult<Option<Goal>> {
        let mut found = self.storage.goals.find_matching(identifier)?;
        if found.is_empty() {
            let wanted = identifier.trim();
            found = self
                .storage
                .goals
                .get_all()?
                .into_iter()
                .filter(|g| g.title.eq_ignore_ascii_case(wanted))
                .collect();
        }

        match found.len() {
            0 => Ok(None),
            1 => Ok(found.pop()),
            n => Err(TrackerError::Validation(format!(
                "'{}' matches {} goals; use the goal id",
                identifier, n
            ))),
        }
    }

    pub fn get(&self, identifier: &str) -> TrackerResult<Goal> {
        self.find(identifier)?
            .ok_or_else(|| TrackerError::goal_not_found(identifier))
    }

    /// All goals, nearest target month first
    pub fn list(&self) -> TrackerResult<Vec<Goal>> {
        self.storage.goals.get_all()
    }

    /// Every goal with its progress against all-time savings as of `today`
    pub fn progress(&self, today: NaiveDate) -> TrackerResult<Vec<GoalWithProgress>> {
        let savings = TransactionService::new(self.storage).all_time_savings()?;
        let goals = self.list()?;

        tracing::debug!(goals = goals.len(), savings = %savings, "computing goal progress");

        Ok(goals
            .into_iter()
            .map(|goal| {
                let progress = analytics::compute_progress(&goal, savings, today);
                GoalWithProgress { goal, progress }
            })
            .collect())
    }

    /// Change any of title, amount or target month
    pub fn update(
        &self,
        identifier: &str,
        title: Option<String>,
        goal_amount: Option<Money>,
        target_month: Option<MonthKey>,
    ) -> TrackerResult<Goal> {
        let mut goal = self.get(identifier)?;
        let before = goal.clone();

        if let Some(title) = title {
            goal.title = title.trim().to_string();
        }
        if let Some(amount) = goal_amount {
            goal.goal_amount = amount;
        }
        if let Some(month) = target_month {
            goal.target_month = month;
        }

        goal.validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        let mut changes = Vec::new();
        if before.title != goal.title {
            changes.push(format!("title: '{}' -> '{}'", before.title, goal.title));
        }
        if before.goal_amount != goal.goal_amount {
            changes.push(format!("amount: {} -> {}", before.goal_amount, goal.goal_amount));
        }
        if before.target_month != goal.target_month {
            changes.push(format!(
                "target month: {} -> {}",
                before.target_month, goal.target_month
            ));
        }
        let diff = (!changes.is_empty()).then(|| changes.join(", "));

        self.storage.log_update(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.title.clone()),
            &before,
            &goal,
            diff,
        )?;

        Ok(goal)
    }

    pub fn delete(&self, identifier: &str) -> TrackerResult<Goal> {
        let goal = self.get(identifier)?;

        self.storage.goals.delete(goal.id)?;
        self.storage.goals.save()?;

        self.storage.log_delete(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.title.clone()),
            &goal,
        )?;

        Ok(goal)
    }

    pub fn count(&self) -> TrackerResult<usize> {
        self.storage.goals.count()
    }
}
