use leptos::prelude::*;

/// Inline 16px stroke icon by name; unknown names render an empty box
pub fn icon(name: &str) -> AnyView {
    let body = match name {
        "chevrons-left" => view! { <path d="M11 17l-5-5 5-5"/><path d="M18 17l-5-5 5-5"/> }.into_any(),
        "chevron-left" => view! { <path d="M15 18l-6-6 6-6"/> }.into_any(),
        "chevron-right" => view! { <path d="M9 18l6-6-6-6"/> }.into_any(),
        "chevrons-right" => view! { <path d="M13 17l5-5-5-5"/><path d="M6 17l5-5-5-5"/> }.into_any(),
        "refresh" => view! {
            <path d="M23 4v6h-6"/>
            <path d="M20.49 15a9 9 0 1 1-2.12-9.36L23 10"/>
        }.into_any(),
        "zap" => view! { <path d="M13 2L3 14h9l-1 8 10-12h-9l1-8z"/> }.into_any(),
        "arrow-left" => view! { <path d="M19 12H5"/><path d="M12 19l-7-7 7-7"/> }.into_any(),
        "search" => view! { <circle cx="11" cy="11" r="8"/><path d="M21 21l-4.35-4.35"/> }.into_any(),
        "alert" => view! {
            <circle cx="12" cy="12" r="10"/>
            <path d="M12 8v4"/>
            <path d="M12 16h.01"/>
        }.into_any(),
        "x" => view! { <path d="M18 6L6 18"/><path d="M6 6l12 12"/> }.into_any(),
        _ => view! { <rect x="4" y="4" width="16" height="16" rx="2"/> }.into_any(),
    };

    view! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {body}
        </svg>
    }
    .into_any()
}
