use crate::enums::cache_mode::{cache_token, CacheMode};
use serde::{Serialize, Serializer};

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// The API refuses to return more rows than this per page
pub const MAX_PAGE_SIZE: u32 = 100;

/// Query parameters of `GET /{org}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrgQuery {
    /// 1-based page number
    pub page: u32,
    pub per_page: u32,
    #[serde(serialize_with = "serialize_cache")]
    pub cache: Option<CacheMode>,
}

fn serialize_cache<S: Serializer>(mode: &Option<CacheMode>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(cache_token(*mode))
}

impl OrgQuery {
    pub fn new(page: u32, per_page: u32, cache: Option<CacheMode>) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PAGE_SIZE),
            cache,
        }
    }

    /// `page=..&per_page=..&cache=..`
    pub fn to_query_string(&self) -> Result<String, serde_qs::Error> {
        serde_qs::to_string(self)
    }
}

impl Default for OrgQuery {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        assert_eq!(
            OrgQuery::default().to_query_string().unwrap(),
            "page=1&per_page=20&cache=true"
        );
    }

    #[test]
    fn test_query_with_mode() {
        let q = OrgQuery::new(2, 20, Some(CacheMode::Cached));
        assert_eq!(q.to_query_string().unwrap(), "page=2&per_page=20&cache=cached");

        let q = OrgQuery::new(3, 50, Some(CacheMode::Revalidate));
        assert_eq!(q.to_query_string().unwrap(), "page=3&per_page=50&cache=revalidate");
    }

    #[test]
    fn test_bounds() {
        let q = OrgQuery::new(0, 500, None);
        assert_eq!(q.page, 1);
        assert_eq!(q.per_page, MAX_PAGE_SIZE);
        assert_eq!(OrgQuery::new(1, 0, None).per_page, 1);
    }
}
