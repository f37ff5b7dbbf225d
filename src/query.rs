//! List Query
//!
//! Filters, sorts and pages a task list the way the list endpoint answers
//! a [`SearchOptions`] request.

use std::cmp::Ordering;

use crate::models::{Pagination, SearchOptions, SortField, SortOrder, Task, TableData};

/// Produce the requested page. Out-of-range pages come back empty with the
/// requested page number untouched.
pub fn apply(tasks: &[Task], options: &SearchOptions) -> TableData {
    let needle = options.title.trim().to_lowercase();
    let mut matching: Vec<&Task> = tasks
        .iter()
        .filter(|t| needle.is_empty() || t.title.to_lowercase().contains(&needle))
        .collect();

    if let Some(field) = options.sort_name {
        // sort_by is stable, so equal keys keep insertion order
        matching.sort_by(|a, b| {
            let ord = compare(a, b, field);
            match options.sort_order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
    }

    let total = matching.len();
    let size = options.size_per_page.max(1);
    let start = (options.page.max(1) - 1).saturating_mul(size);
    let data = matching.into_iter().skip(start).take(size).cloned().collect();

    TableData {
        data,
        pagination: Pagination { page: options.page.max(1), total, size_per_page: size },
    }
}

fn compare(a: &Task, b: &Task, field: SortField) -> Ordering {
    match field {
        SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortField::Description => a.description.to_lowercase().cmp(&b.description.to_lowercase()),
    }
}

/// Number of pages needed for `total` rows (at least one).
pub fn page_count(total: usize, size_per_page: usize) -> usize {
    total.div_ceil(size_per_page.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u32, title: &str, description: &str) -> Task {
        Task { id, title: title.into(), description: description.into() }
    }

    fn sample() -> Vec<Task> {
        vec![
            task(1, "Write report", "quarterly numbers"),
            task(2, "buy milk", "two litres"),
            task(3, "Book flights", "amsterdam"),
            task(4, "Reply to email", "before friday"),
            task(5, "Buy stamps", "post office"),
        ]
    }

    #[test]
    fn test_first_page_without_filter() {
        let page = apply(&sample(), &SearchOptions::first_page(2));
        assert_eq!(page.data.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(page.pagination, Pagination { page: 1, total: 5, size_per_page: 2 });
    }

    #[test]
    fn test_title_filter_is_case_insensitive() {
        let options = SearchOptions::first_page(10).with_title("BUY");
        let page = apply(&sample(), &options);
        assert_eq!(page.data.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 5]);
        assert_eq!(page.pagination.total, 2);
    }

    #[test]
    fn test_sort_by_title_both_directions() {
        let asc = SearchOptions::first_page(10).with_sort(SortField::Title, SortOrder::Asc);
        let ids: Vec<u32> = apply(&sample(), &asc).data.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2, 5, 4, 1]);

        let desc = asc.with_sort(SortField::Title, SortOrder::Desc);
        let ids: Vec<u32> = apply(&sample(), &desc).data.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 4, 5, 2, 3]);
    }

    #[test]
    fn test_sort_by_description() {
        let options = SearchOptions::first_page(10).with_sort(SortField::Description, SortOrder::Asc);
        let ids: Vec<u32> = apply(&sample(), &options).data.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 4, 5, 1, 2]);
    }

    #[test]
    fn test_narrowed_filter_can_leave_page_out_of_range() {
        let options = SearchOptions::first_page(2).with_page(3).with_title("buy");
        let page = apply(&sample(), &options);
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.page, 3);
        assert_eq!(page.pagination.total, 2);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 5);
    }
}
