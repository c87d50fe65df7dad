//! Core types and pure functions for the jterminus feedback service.
//!
//! Nothing in this crate performs I/O. The server crate supplies the HTTP
//! surface and the storage backends that implement [`storage::StoreConnector`].

pub mod error;
pub mod feedback;
pub mod http_mapping;
pub mod storage;

pub use error::{Result, SubmissionError};
pub use http_mapping::submission_error_to_status_code;
