// Infrastructure layer - Configuration and file adapters
pub mod catalog_file;
pub mod config;
pub mod history_file;
