use leptos::prelude::*;

use super::api_utils::api_base;
use contracts::domain::a001_contributor::query;

/// Rows per page until the user picks another size
pub const DEFAULT_PAGE_SIZE: usize = query::DEFAULT_PAGE_SIZE as usize;

/// Sizes offered by the pager; the API caps `per_page` at 100
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Application-wide settings, provided once by `App`
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub api_base: String,
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "GOContributor".to_string(),
            api_base: api_base(),
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
        }
    }
}

/// Read the config from context, or the defaults when none was provided
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
