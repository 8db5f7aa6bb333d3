//! Output sinks for completed runs
//!
//! The record collection is serialized once, after the batch loop
//! terminates: CSV with a fixed column order, JSON as the reshaped export
//! schema, and one plain-text file per captured bill.

// Sub-modules
pub mod csv_writer;
pub mod fulltext;
pub mod json_writer;

// Re-exports for public API
pub use csv_writer::{CSV_COLUMNS, write_csv};
pub use fulltext::save_full_text;
pub use json_writer::{BillExport, BillUrls, write_json};
