use crate::api::Training;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// `round(100 * completed / total)`, or 0 when there is nothing to complete.
pub fn completion_percentage(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 * 100.0) / total as f64).round() as u32
}

/// Trainings unlock in order: the first is always open, every other one
/// waits for its predecessor.
pub fn is_locked(trainings: &[Training], completed: &HashSet<&str>, index: usize) -> bool {
    match index.checked_sub(1).and_then(|prev| trainings.get(prev)) {
        Some(previous) => !completed.contains(previous.id.as_str()),
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingRow {
    pub training: Training,
    pub position: usize,
    pub completed: bool,
    pub locked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingOverview {
    pub trainings: Vec<Training>,
    pub completed_ids: Vec<String>,
}

impl TrainingOverview {
    fn completed_set(&self) -> HashSet<&str> {
        self.completed_ids.iter().map(String::as_str).collect()
    }

    /// Active trainings the contractor has finished. Completions of trainings
    /// no longer in the active list do not count.
    pub fn completed_count(&self) -> usize {
        let completed = self.completed_set();
        self.trainings
            .iter()
            .filter(|t| completed.contains(t.id.as_str()))
            .count()
    }

    pub fn percentage(&self) -> u32 {
        completion_percentage(self.completed_count(), self.trainings.len())
    }

    pub fn ready_for_summary(&self) -> bool {
        self.completed_count() == self.trainings.len()
    }

    pub fn rows(&self) -> Vec<TrainingRow> {
        let completed = self.completed_set();
        self.trainings
            .iter()
            .enumerate()
            .map(|(index, training)| TrainingRow {
                training: training.clone(),
                position: index + 1,
                completed: completed.contains(training.id.as_str()),
                locked: is_locked(&self.trainings, &completed, index),
            })
            .collect()
    }

    pub fn row(&self, training_id: &str) -> Option<TrainingRow> {
        self.rows()
            .into_iter()
            .find(|row| row.training.id == training_id)
    }
}

pub fn progress_label(overview: &TrainingOverview) -> String {
    format!(
        "{} of {} trainings complete ({}%)",
        overview.completed_count(),
        overview.trainings.len(),
        overview.percentage()
    )
}
