pub mod cache_mode;

pub use cache_mode::CacheMode;
