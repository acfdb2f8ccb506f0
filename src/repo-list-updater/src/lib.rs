#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod document;
pub mod updater;

pub use document::{derive_entry_name, Document, DocumentError, Entry};
pub use updater::{
    report_failure, try_update_entry, update_entry, UpdateOutcome, UpdateReport, UpdaterConfig,
    DEFAULT_LIST_KEY, ERROR_PREFIX,
};
