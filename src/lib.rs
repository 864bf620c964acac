pub mod boundary;
pub mod bumper;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod store;
pub mod ui;

pub use bumper::{BumpOutcome, VersionBumper};
pub use error::{BumpError, Result};
