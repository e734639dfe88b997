pub mod atok;
pub mod config;
pub mod entry;
pub mod error;
pub mod merge;
pub mod output;
pub mod reading;

pub use atok::{Conversion, ConvertOptions, ConvertStats, convert_file};
pub use entry::Entry;
pub use error::{ConvertError, Result};
pub use merge::{MergeStats, merge_file};
