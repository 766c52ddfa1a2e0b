//! Persistence layer for the admin panel.
//!
//! [`models`] holds the database-facing record types, [`storage`] the store
//! contract and its MongoDB and in-memory implementations.

pub mod models;
pub mod storage;
