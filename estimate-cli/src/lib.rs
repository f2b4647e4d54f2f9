pub mod config;
pub mod csv_loader;
pub mod interactive;
pub mod logging;
pub mod processing;
pub mod report;
pub mod utils;
