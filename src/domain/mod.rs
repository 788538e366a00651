// Domain layer - Dashboard building blocks, free of IO and configuration formats
pub mod dashboard;
pub mod environment;
pub mod error;
pub mod metric;
pub mod token;
pub mod widget;
