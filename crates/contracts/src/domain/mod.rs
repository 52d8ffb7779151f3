pub mod a001_contributor;
