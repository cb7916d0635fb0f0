//! Common utilities shared by the option resolver and the runners

pub mod config;
pub mod error;
pub mod logging;
pub mod naming;
pub mod paths;

pub use error::{Error, Result};
