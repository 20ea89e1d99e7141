//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: SQLite-backed repositories using Diesel ORM.
//!
//! Adapters translate between domain records and storage rows. They contain
//! no business logic.

pub mod persistence;
