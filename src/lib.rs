//! HTTP lookup service over the Japanese KEN_ALL postal-code dataset.
//!
//! The service parses the fixed 15-column KEN_ALL CSV once at startup into an
//! in-memory read-only store, then serves three routes:
//!
//! - `GET /healthcheck` — liveness probe, always `ok`
//! - `GET /postal_code?limit=N` — first N records in load order (default 10)
//! - `GET /postal_code/:zip_code` — first record matching the postal code
//!
//! There is no write path: the dataset is immutable for the process lifetime,
//! so handlers share the store behind an [`Arc`](std::sync::Arc) with no
//! locking.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`dataset`]: Record schema and CSV bulk loader
//! - [`store`]: In-memory read-only query store
//! - [`api`]: HTTP routes and handlers

pub mod api;
pub mod config;
pub mod dataset;
pub mod error;
pub mod store;

pub use config::Config;
pub use error::{Result, ServiceError};
