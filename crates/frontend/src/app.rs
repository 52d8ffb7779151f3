use std::sync::Arc;

use crate::domain::a001_contributor::api::{HttpDataService, SharedDataService};
use crate::domain::a001_contributor::ui::root::RootView;
use crate::shared::config::AppConfig;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::default();
    set_document_title(&config.title);

    // One data service for the whole app; views pick it up from context
    let service: SharedDataService = Arc::new(HttpDataService::new(config.api_base.clone()));
    provide_context(service);
    provide_context(config);

    view! {
        <ConfigProvider>
            <RootView />
        </ConfigProvider>
    }
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
