pub mod contrib_table;
pub mod root;
