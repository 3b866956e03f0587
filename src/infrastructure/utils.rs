pub mod deserialize;
pub mod markdown;
