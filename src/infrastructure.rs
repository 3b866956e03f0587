pub mod cors;
pub mod telemetry;
pub mod utils;
