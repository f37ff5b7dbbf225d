//! Task Repository
//!
//! Browser-local stand-in for the list endpoint. The whole collection is
//! persisted as one JSON document in localStorage.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{SearchOptions, TableData, Task, TaskDraft};
use crate::{query, storage};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRepository {
    tasks: Vec<Task>,
    next_id: u32,
}

impl Default for TaskRepository {
    fn default() -> Self {
        Self { tasks: Vec::new(), next_id: 1 }
    }
}

const SEED: &[(&str, &str)] = &[
    ("Set up project", "Create the repository and CI pipeline"),
    ("Design list view", "Columns, sorting and paging for tasks"),
    ("Write API client", "Wrap create, update and delete calls"),
    ("Add search box", "Filter the task list by title"),
    ("Review pull requests", "Go through the open reviews"),
    ("Plan experiment", "Homepage variant A against variant B"),
    ("Update documentation", "Describe the new screens"),
    ("Fix pagination bug", "Page size selector resets the page"),
    ("Prepare demo", "Walk through the task workflow"),
    ("Clean up styles", "Align buttons in the modal footer"),
    ("Measure conversions", "Count wins per homepage variant"),
    ("Release 1.0", "Tag and publish the build"),
];

impl TaskRepository {
    /// Repository pre-filled with sample tasks.
    pub fn seeded() -> Self {
        let mut repo = Self::default();
        for (title, description) in SEED {
            repo.insert(title, description);
        }
        repo
    }

    /// Load from storage, seeding on first run.
    pub fn load(key: &str) -> AppResult<Self> {
        match storage::get_json::<Self>(key)? {
            Some(repo) => Ok(repo),
            None => {
                let repo = Self::seeded();
                repo.save(key)?;
                tracing::info!("seeded {} sample tasks", repo.tasks.len());
                Ok(repo)
            }
        }
    }

    pub fn save(&self, key: &str) -> AppResult<()> {
        storage::set_json(key, self)
    }

    fn insert(&mut self, title: &str, description: &str) -> Task {
        let task = Task { id: self.next_id, title: title.into(), description: description.into() };
        self.next_id += 1;
        self.tasks.push(task.clone());
        task
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn list(&self, options: &SearchOptions) -> TableData {
        query::apply(&self.tasks, options)
    }

    pub fn find(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn create(&mut self, draft: &TaskDraft) -> AppResult<Task> {
        draft.validate()?;
        Ok(self.insert(draft.title.trim(), &draft.description))
    }

    pub fn update(&mut self, id: u32, draft: &TaskDraft) -> AppResult<Task> {
        draft.validate()?;
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(AppError::NotFound(id))?;
        task.title = draft.title.trim().to_string();
        task.description = draft.description.clone();
        Ok(task.clone())
    }

    pub fn delete(&mut self, id: u32) -> AppResult<()> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Err(AppError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> TaskDraft {
        TaskDraft { title: title.into(), description: format!("{} details", title) }
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let mut repo = TaskRepository::default();
        let a = repo.create(&draft("First")).expect("Failed to create");
        let b = repo.create(&draft("Second")).expect("Failed to create");
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut repo = TaskRepository::default();
        let a = repo.create(&draft("First")).unwrap();
        repo.delete(a.id).unwrap();
        let b = repo.create(&draft("Second")).unwrap();
        assert_eq!(b.id, 2);
    }

    #[test]
    fn test_create_rejects_blank_title() {
        let mut repo = TaskRepository::default();
        assert!(matches!(repo.create(&draft("  ")), Err(AppError::Validation(_))));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_update_matches_by_id() {
        let mut repo = TaskRepository::default();
        let a = repo.create(&draft("First")).unwrap();
        repo.create(&draft("Second")).unwrap();

        let updated = repo.update(a.id, &draft("Renamed")).expect("Update failed");
        assert_eq!(updated.id, a.id);
        assert_eq!(repo.find(a.id).unwrap().title, "Renamed");
        assert_eq!(repo.find(2).unwrap().title, "Second");
    }

    #[test]
    fn test_update_and_delete_missing_task() {
        let mut repo = TaskRepository::default();
        assert!(matches!(repo.update(9, &draft("x")), Err(AppError::NotFound(9))));
        assert!(matches!(repo.delete(9), Err(AppError::NotFound(9))));
    }

    #[test]
    fn test_seeded_list_reports_total() {
        let repo = TaskRepository::seeded();
        let page = repo.list(&SearchOptions::first_page(5));
        assert_eq!(page.data.len(), 5);
        assert_eq!(page.pagination.total, SEED.len());
    }

    #[test]
    fn test_persisted_form_round_trips() {
        let repo = TaskRepository::seeded();
        let json = serde_json::to_string(&repo).unwrap();
        let back: TaskRepository = serde_json::from_str(&json).unwrap();
        assert_eq!(back, repo);
    }
}
