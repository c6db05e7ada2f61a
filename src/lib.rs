//! pathparams - a guided tour of path parameters with generated OpenAPI docs

pub mod config;
pub mod error;
pub mod types;

pub mod api;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
