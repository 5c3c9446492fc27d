pub mod common;
pub mod movie;

pub use common::*;
pub use movie::*;
