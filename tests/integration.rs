#[path = "integration/compile.rs"]
mod compile;
#[path = "integration/concurrency.rs"]
mod concurrency;
#[path = "integration/config.rs"]
mod config;
#[path = "integration/error_handling.rs"]
mod error_handling;
#[path = "integration/properties.rs"]
mod properties;
