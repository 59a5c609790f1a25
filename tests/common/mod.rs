//! Shared test utilities

pub mod fixtures;
pub mod mock_executor;
pub mod mock_platform;
