pub mod state;

use std::sync::Arc;

use crate::domain::a001_contributor::api::{HttpDataService, SharedDataService};
use crate::domain::a001_contributor::events::ErrorEvent;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_app_config;
use crate::shared::format::{format_count, or_dash, summary_line, truncate};
use crate::shared::icons::icon;
use contracts::domain::a001_contributor::Contributor;
use leptos::prelude::*;
use state::{ContribTableState, PendingFetch};
use thaw::*;

const COLUMN_COUNT: usize = 5;
const COMMIT_PREVIEW_CHARS: usize = 60;

/// Paged contributors of one organization.
///
/// Loads the first page once mounted, then on every pager change and refresh.
/// Failures go to `on_error`; "Start over" fires `on_clear`.
#[component]
pub fn ContribTable(
    #[prop(into)] org_name: String,
    on_error: Callback<ErrorEvent>,
    on_clear: Callback<()>,
    /// Data source; falls back to the one in context, then to HTTP
    #[prop(optional)]
    service: Option<SharedDataService>,
) -> impl IntoView {
    let config = use_app_config();
    let service: SharedDataService = service
        .or_else(use_context::<SharedDataService>)
        .unwrap_or_else(|| Arc::new(HttpDataService::new(config.api_base.clone())));
    let service = StoredValue::new(service);
    let org = StoredValue::new(org_name);

    let state = RwSignal::new(ContribTableState::new(config.default_page_size));
    let is_loading = Signal::derive(move || state.with(|s| s.is_loading));

    let run = move |pending: PendingFetch| {
        let service = service.get_value();
        let org = org.get_value();
        log::debug!(
            "Fetching {} page {} ({} per page, ticket {})",
            org,
            pending.query.page,
            pending.query.per_page,
            pending.ticket
        );

        leptos::task::spawn_local(async move {
            let result = service.fetch_org(&org, pending.query).await;
            if let Err(e) = &result {
                log::warn!("Failed to fetch contributors of {}: {}", org, e);
            }
            // The table may have been unmounted while the request was in flight
            let event = state
                .try_update(|s| s.complete(pending.ticket, result))
                .flatten();
            if let Some(event) = event {
                on_error.run(event);
            }
        });
    };

    // Initial load once the view is attached
    Effect::new(move |_| {
        if let Some(pending) = state.try_update(|s| s.begin_page_load()) {
            run(pending);
        }
    });

    let go_to_page = move |page: usize| {
        if let Some(pending) = state.try_update(|s| s.go_to_page(page)) {
            run(pending);
        }
    };

    let change_page_size = move |size: usize| {
        if let Some(pending) = state.try_update(|s| s.change_page_size(size)) {
            run(pending);
        }
    };

    let refresh = move |force: bool| {
        if let Some(pending) = state.try_update(|s| s.begin_refresh(force)) {
            run(pending);
        }
    };

    let start_over = move |_| on_clear.run(());

    view! {
        <div class="page contrib-table">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || org.get_value()}</h1>
                    <Badge appearance=BadgeAppearance::Tint>{move || format_count(state.with(|s| s.total_count) as u64)}</Badge>
                    <Show when=move || is_loading.get()>
                        <Spinner />
                    </Show>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=start_over
                    >
                        {icon("arrow-left")}
                        " Start over"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| refresh(false)
                        disabled=is_loading
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| refresh(true)
                        disabled=is_loading
                    >
                        {icon("zap")}
                        " Force refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                    total_count=Signal::derive(move || state.with(|s| s.total_count))
                    page_size=Signal::derive(move || state.with(|s| s.page_size))
                    disabled=is_loading
                    on_page_change=Callback::new(go_to_page)
                    on_page_size_change=Callback::new(change_page_size)
                    page_size_options=config.page_size_options.clone()
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell attr:style="width: 64px;">""</TableHeaderCell>
                                <TableHeaderCell>"Username"</TableHeaderCell>
                                <TableHeaderCell attr:style="width: 140px; text-align: right;">"Contributions"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Latest commit"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                if is_loading.get() && state.with(|s| s.items.is_empty()) {
                                    view! {
                                        <TableRow>
                                            <TableCell attr:colspan=COLUMN_COUNT.to_string() attr:style="padding: 40px; text-align: center;">
                                                <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                                                    <Spinner />
                                                    "Loading..."
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }.into_any()
                                } else {
                                    let rows = state.with(|s| s.items.clone());
                                    if rows.is_empty() {
                                        view! {
                                            <TableRow>
                                                <TableCell attr:colspan=COLUMN_COUNT.to_string() attr:style="padding: 40px; text-align: center; color: var(--colorNeutralForeground3);">
                                                    "No contributors found"
                                                </TableCell>
                                            </TableRow>
                                        }.into_any()
                                    } else {
                                        rows.into_iter().map(contributor_row).collect_view().into_any()
                                    }
                                }
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </div>
    }
}

fn contributor_row(c: Contributor) -> impl IntoView {
    let commit_full = c.commit.clone().unwrap_or_default();
    let commit_preview = c
        .commit
        .as_deref()
        .map(|m| truncate(summary_line(m), COMMIT_PREVIEW_CHARS));
    let avatar_alt = format!("{} avatar", c.username);
    let profile_url = format!("https://github.com/{}", c.username);

    view! {
        <TableRow>
            <TableCell>
                <img class="contrib-avatar" src=c.image alt=avatar_alt width="40" height="40" loading="lazy" />
            </TableCell>
            <TableCell>
                <a href=profile_url target="_blank" rel="noopener">
                    {c.username}
                </a>
            </TableCell>
            <TableCell attr:style="text-align: right;">{format_count(c.contributions)}</TableCell>
            <TableCell>{or_dash(c.email.as_deref())}</TableCell>
            <TableCell attr:title=commit_full>{or_dash(commit_preview.as_deref())}</TableCell>
        </TableRow>
    }
}
