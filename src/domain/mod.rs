pub mod epoch;
pub mod error;

pub use epoch::Epoch;
pub use error::{DomainError, Result};
