use serde::{Deserialize, Serialize};

/// One row of the contributors listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    pub username: String,
    /// Contributions summed over every repository of the organization
    pub contributions: u64,
    /// Author email of the latest commit; the API fills it lazily
    #[serde(default)]
    pub email: Option<String>,
    /// Avatar URL
    #[serde(default)]
    pub image: String,
    /// Message of the latest commit
    #[serde(default)]
    pub commit: Option<String>,
}

/// Pagination block returned next to the rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub page: u32,
    pub per_page: u32,
    pub total_contributors: u64,
    pub total_pages: u32,
}

/// `GET /{org}` response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgResponse {
    pub data: Vec<Contributor>,
    pub navigation: Navigation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page() {
        let raw = r#"{
            "data": [
                {
                    "commit": "Fix typo in README",
                    "contributions": 412,
                    "email": "octo@example.com",
                    "image": "https://avatars.example.com/u/1",
                    "username": "octo"
                }
            ],
            "navigation": {"page": 1, "per_page": 20, "total_contributors": 35, "total_pages": 2}
        }"#;

        let resp: OrgResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].username, "octo");
        assert_eq!(resp.data[0].contributions, 412);
        assert_eq!(resp.data[0].commit.as_deref(), Some("Fix typo in README"));
        assert_eq!(resp.navigation.total_contributors, 35);
        assert_eq!(resp.navigation.total_pages, 2);
    }

    #[test]
    fn test_nullable_fields() {
        let raw = r#"{"commit": null, "contributions": 3, "email": null,
                      "image": "https://avatars.example.com/u/2", "username": "ghost"}"#;
        let c: Contributor = serde_json::from_str(raw).unwrap();
        assert_eq!(c.email, None);
        assert_eq!(c.commit, None);
    }

    #[test]
    fn test_missing_navigation_is_an_error() {
        assert!(serde_json::from_str::<OrgResponse>(r#"{"data": []}"#).is_err());
    }
}
