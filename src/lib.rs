// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod progress;
pub mod registry;
pub mod runner;
pub mod specs;

pub use data::{Gem, GemCategory, GemSet, GemType};
pub use error::{Error, MarkupError};
pub use registry::GemIds;
