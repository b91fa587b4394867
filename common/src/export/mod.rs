//! Export core modules shared across CLI and future front-ends.

#[cfg(feature = "excel")]
pub mod excel_core;
