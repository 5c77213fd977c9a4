pub mod engine;
pub mod loader;
pub mod models;
pub mod parsers;
pub mod reports;
pub mod types;
