// Infrastructure layer - Configuration files, output formats and the filesystem
pub mod cloudformation;
pub mod config;
pub mod dashboard_body;
pub mod file_store;
