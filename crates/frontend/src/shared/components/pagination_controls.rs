use crate::shared::config::PAGE_SIZE_OPTIONS;
use crate::shared::format::format_count;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Pager: first/previous/next/last buttons, position readout and page-size select
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items across all pages
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    /// Disables every control, e.g. while a page is loading
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    /// Available page size options (defaults to [10, 20, 50, 100])
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| PAGE_SIZE_OPTIONS.to_vec());

    let is_disabled = move || disabled.get().unwrap_or(false);
    let at_start = move || is_disabled() || current_page.get() == 0;
    let at_end = move || is_disabled() || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=at_start
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get_untracked();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=at_start
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let size = page_size.get();
                    let count = total_count.get();
                    if count == 0 {
                        "0 of 0".to_string()
                    } else {
                        let first = current_page.get() * size + 1;
                        let last = (first + size - 1).min(count);
                        format!("{}–{} of {}", first, last, format_count(count as u64))
                    }
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get_untracked();
                    if page + 1 < total_pages.get_untracked() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=at_end
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get_untracked();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=at_end
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <label class="pagination-size-label">"Per page"</label>
            <select
                class="page-size-select"
                disabled=is_disabled
                on:change=move |ev| {
                    if let Ok(val) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(val);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
