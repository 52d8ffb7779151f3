pub mod state;

use crate::domain::a001_contributor::events::ErrorEvent;
use crate::domain::a001_contributor::ui::contrib_table::ContribTable;
use crate::shared::config::use_app_config;
use crate::shared::icons::icon;
use leptos::prelude::*;
use state::RootState;
use thaw::*;

/// Organization form, or the contributors table once an organization is chosen
#[component]
pub fn RootView() -> impl IntoView {
    let config = use_app_config();
    let root = RwSignal::new(RootState::default());
    let org_input = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let org = org_input.get_untracked();
        if root.try_update(|s| s.submit(&org)).unwrap_or(false) {
            log::info!("Listing contributors of {}", org.trim());
        }
    };

    let on_error = Callback::new(move |event: ErrorEvent| {
        log::warn!("Listing failed: {} {}", event.code, event.message);
        root.update(|s| s.handle_error(&event));
    });

    let on_clear = Callback::new(move |_: ()| {
        log::info!("Start over");
        root.update(|s| s.reset());
    });

    let current_org = Memo::new(move |_| root.with(|s| s.org_name.clone()));

    view! {
        <div class="app">
            <header class="app__header">
                <h1 class="app__title">{config.title.clone()}</h1>
            </header>

            {move || root.with(|s| s.visible_error().map(str::to_string)).map(|message| view! {
                <div class="app__error">
                    <MessageBar intent=MessageBarIntent::Error>
                        <div style="display: flex; align-items: center; gap: var(--spacing-sm); width: 100%;">
                            {icon("alert")}
                            <span style="flex: 1;">{message}</span>
                            <Button
                                appearance=ButtonAppearance::Transparent
                                on_click=move |_| root.update(|s| s.dismiss_error())
                            >
                                {icon("x")}
                            </Button>
                        </div>
                    </MessageBar>
                </div>
            })}

            {move || match current_org.get() {
                None => view! {
                    <form class="org-form" on:submit=on_submit>
                        <label class="org-form__label">"Organization"</label>
                        <div class="org-form__row">
                            <Input
                                value=org_input
                                placeholder="e.g. octocat"
                            />
                            <button
                                type="submit"
                                class="button button--primary"
                                disabled=move || org_input.with(|v| v.trim().is_empty())
                            >
                                {icon("search")}
                                " Go"
                            </button>
                        </div>
                    </form>
                }.into_any(),
                Some(org) => view! {
                    <ContribTable org_name=org on_error=on_error on_clear=on_clear />
                }.into_any(),
            }}
        </div>
    }
}
