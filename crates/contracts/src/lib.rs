pub mod domain;
pub mod enums;
