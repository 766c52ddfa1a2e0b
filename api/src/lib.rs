//! Admin panel API service.
//!
//! Provides the REST endpoints for user administration: create, update,
//! look up, list, and delete.
//!
//! # Configuration
//!
//! See [`config::AdminApiConfig`] for the bind address, public URL, and
//! MongoDB connection settings. Pass `--dump-openapi` to print the OpenAPI
//! document without starting the server.

pub mod config;
pub mod server;

pub(crate) mod context;
pub(crate) mod error;
pub(crate) mod handlers;
pub(crate) mod service;
