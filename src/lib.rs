pub mod domain;

pub use domain::{DomainError, Epoch, Result};
