pub mod diagnostics;
pub mod error;
pub mod feedback;
pub mod health;
pub mod pages;

pub use error::ApiError;
