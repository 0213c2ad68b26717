//! Directory combining
//!
//! Walks a root path, keeps the files whose extension passes an
//! [`ExtensionFilter`], and appends each one to an [`OutputBuffer`] as a
//! labelled block. The buffer is written to disk once, after the walk.
//!
//! ```text
//! root ──▶ TreeWalker ──▶ ExtensionFilter ──▶ FileRecord ──▶ OutputBuffer ──▶ output file
//!           (sorted)        (.go, .md, …)      (read)          (=== path ===)
//! ```

pub mod buffer;
pub mod core;
pub mod error;
pub mod filter;
pub mod record;
pub mod walker;

pub use buffer::OutputBuffer;
pub use self::core::{CombineOptions, CombineReport, Combiner, Progress};
pub use error::CombineError;
pub use filter::{ExtensionFilter, extension_of, normalize_extension};
pub use record::FileRecord;
pub use walker::TreeWalker;
