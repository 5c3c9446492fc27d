pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod services;
pub mod validation;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use config::Config;
pub use error::{Error, Result};
