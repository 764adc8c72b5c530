//! Storage layer for the basketball stats tracker
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Basic CRUD operations and name lookups
//! - `reports`: Joined listings, totals and leaderboards
//! - `export`: CSV serialization

pub mod export;
pub mod models;
pub mod queries;
pub mod reports;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use export::{records_to_csv, CSV_HEADER};
pub use models::*;
pub use schema::StatsDatabase;
