mod traits;

pub use traits::{FeedbackStore, StoreConnector};
