//! Configuration module
//!
//! Contains the preset catalogs, gradient parsing and the application config file.

mod app_config;
mod catalog;
mod gradient;

pub use app_config::*;
pub use catalog::*;
pub use gradient::*;
