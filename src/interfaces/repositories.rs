pub mod content_store;
pub mod data_source;
pub mod file_source;
pub mod http_source;
