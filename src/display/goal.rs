//! Goal display formatting

use super::report::{format_bar, format_percentage};
use crate::analytics::{GoalProgress, GoalState};
use crate::models::{Currency, Goal};
use crate::services::GoalWithProgress;

const BAR_WIDTH: usize = 24;

fn state_marker(state: GoalState) -> &'static str {
    match state {
        GoalState::Completed => "✓",
        GoalState::Overdue => "!",
        GoalState::OnTrack => "·",
    }
}

/// A goal with its progress bar, saved/target amounts and status
pub fn format_goal_card(goal: &Goal, progress: &GoalProgress, currency: Currency) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {}  [{}]  target {}\n",
        state_marker(progress.status),
        goal.title,
        goal.id,
        goal.target_date().format("%b %Y")
    ));
    output.push_str(&format!(
        "  {} {}\n",
        format_bar(progress.progress_percent, 100.0, BAR_WIDTH),
        format_percentage(progress.progress_percent)
    ));
    output.push_str(&format!(
        "  {} of {}",
        currency.format(progress.saved),
        currency.format(goal.goal_amount)
    ));

    match progress.status {
        GoalState::Completed => output.push_str("  Completed\n"),
        GoalState::Overdue => output.push_str(&format!(
            "  Overdue, {} to go\n",
            currency.format(progress.remaining)
        )),
        GoalState::OnTrack => output.push_str(&format!(
            "  {} to go\n",
            currency.format(progress.remaining)
        )),
    }

    output
}

/// Every goal as a card, followed by a status tally
pub fn format_goal_list(goals: &[GoalWithProgress], currency: Currency) -> String {
    if goals.is_empty() {
        return "No goals yet. Add one with 'fintrack goal add'.\n".to_string();
    }

    let mut output = String::new();
    for entry in goals {
        output.push_str(&format_goal_card(&entry.goal, &entry.progress, currency));
        output.push('\n');
    }

    let count = |state: GoalState| goals.iter().filter(|g| g.progress.status == state).count();
    output.push_str(&format!(
        "{} goals: {} completed, {} on track, {} overdue\n",
        goals.len(),
        count(GoalState::Completed),
        count(GoalState::OnTrack),
        count(GoalState::Overdue)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::compute_progress;
    use crate::models::{Money, MonthKey};
    use chrono::NaiveDate;

    fn entry(cents: i64, saved: i64, month: &str) -> GoalWithProgress {
        let goal = Goal::new(
            "Vacation",
            Money::from_cents(cents),
            MonthKey::parse(month).unwrap(),
        );
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let progress = compute_progress(&goal, Money::from_cents(saved), today);
        GoalWithProgress { goal, progress }
    }

    #[test]
    fn test_card_on_track() {
        let e = entry(100000, 25000, "2024-12");
        let card = format_goal_card(&e.goal, &e.progress, Currency::Usd);
        assert!(card.contains("Vacation"));
        assert!(card.contains("target Dec 2024"));
        assert!(card.contains("25.0%"));
        assert!(card.contains("$250.00 of $1,000.00  $750.00 to go"));
    }

    #[test]
    fn test_card_completed_caps_saved_amount() {
        let e = entry(100000, 500000, "2023-01");
        let card = format_goal_card(&e.goal, &e.progress, Currency::Usd);
        assert!(card.contains("100.0%"));
        assert!(card.contains("$1,000.00 of $1,000.00  Completed"));
    }

    #[test]
    fn test_list_tally() {
        let goals = vec![
            entry(100000, 500000, "2023-01"),
            entry(100000, 0, "2024-01"),
            entry(100000, 0, "2025-01"),
        ];
        let list = format_goal_list(&goals, Currency::Inr);
        assert!(list.contains("3 goals: 1 completed, 1 on track, 1 overdue"));
        assert!(list.contains("Overdue, ₹1,000.00 to go"));
    }
}
