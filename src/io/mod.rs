//! I/O module
//!
//! Handles the stored ledger format and the storage backends.
//!
//! # Components
//!
//! - `record_format` - Text record format (serialization, token-stream parsing)
//! - `file_storage` - Storage in a plain text file on disk
//! - `memory_storage` - Storage in an in-memory buffer

pub mod file_storage;
pub mod memory_storage;
pub mod record_format;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use record_format::{format_record, parse_records, write_records, ParsedRecords};
