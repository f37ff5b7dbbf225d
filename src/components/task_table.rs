//! Task Table Component
//!
//! Paged task grid with optional sortable headers and per-row edit/delete
//! actions.

use leptos::prelude::*;

use crate::models::{Pagination, SortField, SortOrder, Task};
use crate::query::page_count;

const SORTABLE: [SortField; 2] = [SortField::Title, SortField::Description];

/// Order to request when a header is clicked
fn next_sort(current: Option<(SortField, SortOrder)>, clicked: SortField) -> SortOrder {
    match current {
        Some((field, order)) if field == clicked => order.toggled(),
        _ => SortOrder::Asc,
    }
}

#[component]
pub fn TaskTable(
    #[prop(into)] data: Signal<Vec<Task>>,
    #[prop(into)] pagination: Signal<Pagination>,
    size_per_page_list: Vec<usize>,
    #[prop(into)] on_page_change: Callback<usize>,
    #[prop(into)] on_size_per_page_change: Callback<usize>,
    #[prop(into)] on_edit: Callback<u32>,
    #[prop(into)] on_delete: Callback<u32>,
    /// Current sort; headers are only clickable when `on_sort` is set
    #[prop(optional, into)] sort: Option<Signal<Option<(SortField, SortOrder)>>>,
    #[prop(optional, into)] on_sort: Option<Callback<(SortField, SortOrder)>>,
) -> impl IntoView {
    let current_sort = move || sort.and_then(|s| s.get());
    let pages = move || {
        let p = pagination.get();
        page_count(p.total, p.size_per_page)
    };

    let headers = SORTABLE
        .into_iter()
        .map(|field| {
            let indicator = move || match current_sort() {
                Some((f, SortOrder::Asc)) if f == field => " ▲",
                Some((f, SortOrder::Desc)) if f == field => " ▼",
                _ => "",
            };
            match on_sort {
                Some(on_sort) => view! {
                    <th
                        class="sortable"
                        on:click=move |_| on_sort.run((field, next_sort(current_sort(), field)))
                    >
                        {field.label()} {indicator}
                    </th>
                }
                .into_any(),
                None => view! { <th>{field.label()}</th> }.into_any(),
            }
        })
        .collect_view();

    view! {
        <div class="task-table">
            <table class="table table-hover">
                <thead>
                    <tr>
                        {headers}
                        <th class="text-right"></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || data.get()
                        key=|task| (task.id, task.title.clone(), task.description.clone())
                        children=move |task| {
                            let id = task.id;
                            view! {
                                <tr>
                                    <td>{task.title}</td>
                                    <td>{task.description}</td>
                                    <td class="text-right">
                                        <button class="btn btn-xs btn-info" title="Edit" on:click=move |_| on_edit.run(id)>
                                            "✎"
                                        </button>
                                        " "
                                        <button class="btn btn-xs btn-danger" title="Delete" on:click=move |_| on_delete.run(id)>
                                            "🗑"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || data.with(|d| d.is_empty())>
                <p class="empty">"No tasks"</p>
            </Show>

            <div class="pager">
                <button
                    disabled=move || pagination.get().page <= 1
                    on:click=move |_| on_page_change.run(pagination.get_untracked().page.saturating_sub(1).max(1))
                >
                    "‹"
                </button>
                <span class="page-info">
                    {move || format!("Page {} of {} ({} tasks)", pagination.get().page, pages(), pagination.get().total)}
                </span>
                <button
                    disabled=move || pagination.get().page >= pages()
                    on:click=move |_| on_page_change.run(pagination.get_untracked().page + 1)
                >
                    "›"
                </button>
                <select on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_size_per_page_change.run(size);
                    }
                }>
                    {size_per_page_list
                        .into_iter()
                        .map(|size| view! {
                            <option value=size.to_string() prop:selected=move || pagination.get().size_per_page == size>
                                {size}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_click_sorts_ascending() {
        assert_eq!(next_sort(None, SortField::Title), SortOrder::Asc);
        assert_eq!(
            next_sort(Some((SortField::Description, SortOrder::Desc)), SortField::Title),
            SortOrder::Asc
        );
    }

    #[test]
    fn test_repeat_click_toggles_direction() {
        assert_eq!(next_sort(Some((SortField::Title, SortOrder::Asc)), SortField::Title), SortOrder::Desc);
        assert_eq!(next_sort(Some((SortField::Title, SortOrder::Desc)), SortField::Title), SortOrder::Asc);
    }
}
