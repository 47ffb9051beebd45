//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod data;
pub mod user;

pub use data::{DataRepository, DeletedRows, UserDataHistoryRecord, UserDataRecord};
pub use user::{UserRecord, UserRepository};
