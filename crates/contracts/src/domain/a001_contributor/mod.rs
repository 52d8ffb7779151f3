pub mod dto;
pub mod query;

pub use dto::{Contributor, Navigation, OrgResponse};
pub use query::OrgQuery;
