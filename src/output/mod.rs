//! Output module for persisted harvest artifacts
//!
//! This module handles:
//! - Deterministic hash-based sharding of output paths
//! - JSON page records (sorted keys, non-ASCII preserved)
//! - Templated HTML previews
//! - The append-only error log

mod error_log;
mod preview;
mod record;
mod shard;

pub use error_log::append_error;
pub use preview::{render_preview, write_preview};
pub use record::{write_record, PageRecord};
pub use shard::{ensure_shard_dir, shard_id, shard_path, url_hash, DIVISIONS};
