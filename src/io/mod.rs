//! Sample I/O
//!
//! CSV ingestion for the upload step and export of preview tables.

pub mod csv;

pub use self::csv::{read_csv, write_csv};
