//! Storage backends and the persistence gateway.
//!
//! The gateway only sees the `StoreConnector`/`FeedbackStore` traits from
//! `jterminus_core::storage`. Production wires in [`mongo::MongoConnector`];
//! tests use the in-memory connector, which counts connection attempts and
//! can simulate connect and insert failures.

mod gateway;
pub mod mongo;

#[cfg(test)]
pub mod inmemory;

pub use gateway::PersistenceGateway;
