//! Goal repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrackerError;
use crate::models::{Goal, GoalId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub(crate) struct GoalData {
    pub(crate) goals: Vec<Goal>,
}

/// Repository for savings goals
pub struct GoalRepository {
    path: PathBuf,
    data: RwLock<HashMap<GoalId, Goal>>,
}

impl GoalRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> Result<(), TrackerError> {
        let file_data: GoalData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for goal in file_data.goals {
            data.insert(goal.id, goal);
        }

        Ok(())
    }

    pub fn save(&self) -> Result<(), TrackerError> {
        let goals = self.get_all()?;
        write_json_atomic(&self.path, &GoalData { goals })
    }

    pub fn get(&self, id: GoalId) -> Result<Option<Goal>, TrackerError> {
        let data = self.data.read().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.get(&id).cloned())
    }

    /// All goals, nearest target month first
    pub fn get_all(&self) -> Result<Vec<Goal>, TrackerError> {
        let data = self.data.read().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut goals: Vec<_> = data.values().cloned().collect();
        goals.sort_by(|a, b| {
            a.target_month
                .cmp(&b.target_month)
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(goals)
    }

    /// Goals whose id matches a full or short identifier
    pub fn find_matching(&self, identifier: &str) -> Result<Vec<Goal>, TrackerError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|g| g.id.matches(identifier))
            .collect())
    }

    pub fn upsert(&self, goal: Goal) -> Result<(), TrackerError> {
        let mut data = self.data.write().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.insert(goal.id, goal);
        Ok(())
    }

    pub fn delete(&self, id: GoalId) -> Result<bool, TrackerError> {
        let mut data = self.data.write().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(data.remove(&id).is_some())
    }

    pub fn count(&self) -> Result<usize, TrackerError> {
        let data = self.data.read().map_err(|e| {
            TrackerError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MonthKey};
    use tempfile::TempDir;

    fn goal(title: &str, target: &str) -> Goal {
        Goal::new(title, Money::from_cents(100000), MonthKey::parse(target).unwrap())
    }

    #[test]
    fn test_sorted_by_target_month() {
        let temp_dir = TempDir::new().unwrap();
        let repo = GoalRepository::new(temp_dir.path().join("goals.json"));

        repo.upsert(goal("Car", "2027-01")).unwrap();
        repo.upsert(goal("Vacation", "2025-06")).unwrap();
        repo.upsert(goal("Laptop", "2025-11")).unwrap();

        let titles: Vec<_> = repo.get_all().unwrap().into_iter().map(|g| g.title).collect();
        assert_eq!(titles, vec!["Vacation", "Laptop", "Car"]);
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("goals.json");
        let repo = GoalRepository::new(path.clone());
        let g = goal("Emergency Fund", "2025-12");
        let id = g.id;

        repo.upsert(g.clone()).unwrap();
        repo.save().unwrap();

        let repo2 = GoalRepository::new(path);
        repo2.load().unwrap();
        assert_eq!(repo2.get(id).unwrap(), Some(g));
        assert_eq!(repo2.find_matching(&id.to_string()).unwrap().len(), 1);
    }

    #[test]
    fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let repo = GoalRepository::new(temp_dir.path().join("goals.json"));
        let g = goal("Laptop", "2025-11");
        let id = g.id;

        repo.upsert(g).unwrap();
        assert!(repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }
}
