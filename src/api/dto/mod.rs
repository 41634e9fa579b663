//! Data Transfer Objects for API requests and responses.

pub mod create_link;
pub mod health;
