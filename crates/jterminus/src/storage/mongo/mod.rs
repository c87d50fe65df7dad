//! MongoDB storage backend.
//!
//! Implements the storage seam from `jterminus_core::storage` with the
//! official `mongodb` driver. Records land in a single collection as
//! `{ name, email, message, ...extra, timestamp, status }`.

mod conversions;
mod error;
mod repository;

pub use repository::{MongoConnector, MongoFeedbackStore, MongoSettings};
