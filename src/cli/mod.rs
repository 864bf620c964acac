//! Command-line facing glue around the library

pub mod orchestration;
