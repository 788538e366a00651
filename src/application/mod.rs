// Application layer - Use cases and the ports they depend on
pub mod artifact_store;
pub mod dashboard_service;
pub mod layout;
pub mod query_builder;
