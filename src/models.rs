//! Frontend Models
//!
//! Task records and the query/paging structures the list views exchange
//! with the store.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Task record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
}

/// Contents of the create/update form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title must not be empty".into()));
        }
        Ok(())
    }
}

/// Sortable table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Title,
    Description,
}

impl SortField {
    pub fn label(self) -> &'static str {
        match self {
            SortField::Title => "Title",
            SortField::Description => "Description",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Everything the list endpoint needs to produce one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub title: String,
    pub sort_name: Option<SortField>,
    pub sort_order: SortOrder,
    /// 1-based
    pub page: usize,
    pub size_per_page: usize,
}

impl SearchOptions {
    pub fn first_page(size_per_page: usize) -> Self {
        Self {
            title: String::new(),
            sort_name: None,
            sort_order: SortOrder::Asc,
            page: 1,
            size_per_page,
        }
    }

    /// Changing the filter keeps the current page.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self { title: title.into(), ..self }
    }

    pub fn with_sort(self, field: SortField, order: SortOrder) -> Self {
        Self { sort_name: Some(field), sort_order: order, ..self }
    }

    pub fn with_page(self, page: usize) -> Self {
        Self { page: page.max(1), ..self }
    }

    pub fn with_size_per_page(self, size_per_page: usize) -> Self {
        Self { size_per_page: size_per_page.max(1), ..self }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::first_page(10)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub total: usize,
    pub size_per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, total: 0, size_per_page: 10 }
    }
}

/// One page of tasks plus the total row count
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    pub data: Vec<Task>,
    pub pagination: Pagination,
}
