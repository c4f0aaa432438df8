//! Deterministic hash-based output sharding
//!
//! Output files for tens of thousands of pages are distributed across a
//! fixed number of shard directories so no single directory grows unbounded.
//! The shard hash is SHA-256 truncated to 64 bits: fixed and fully
//! specified, so the same URL lands in the same shard on every run and on
//! every platform. The full hash also appears in the filename, giving every
//! URL a distinct file while keeping the shard grouping.

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Number of shard directories
pub const DIVISIONS: u64 = 500;

/// 64-bit content hash of the UTF-8 URL bytes
///
/// First 8 bytes of SHA-256, big-endian. Pure and total.
pub fn url_hash(url: &str) -> u64 {
    let digest = Sha256::digest(url.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}

/// Shard bucket for a URL, in `[0, DIVISIONS)`
pub fn shard_id(url: &str) -> u64 {
    url_hash(url) % DIVISIONS
}

/// Maps a URL to its extension-less output path
///
/// Layout: `<root>/<shard_id>/<prefix><shard_id>-<hash16>` where `hash16` is
/// the 16-hex-digit URL hash. The record and preview writers append `.json`
/// and `.html`.
pub fn shard_path(root: &Path, prefix: &str, url: &str) -> PathBuf {
    let hash = url_hash(url);
    let id = hash % DIVISIONS;
    root.join(id.to_string())
        .join(format!("{}{}-{:016x}", prefix, id, hash))
}

/// Creates the shard directory for an output path if absent
///
/// `create_dir_all` succeeds when the directory already exists, so this is
/// idempotent and safe under concurrent creation.
pub fn ensure_shard_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) => std::fs::create_dir_all(parent),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shard_path_is_deterministic() {
        let root = Path::new("./tmp");
        let a = shard_path(root, "kuing", "https://forum.example.com/thread-1.html");
        let b = shard_path(root, "kuing", "https://forum.example.com/thread-1.html");
        assert_eq!(a, b);
    }

    #[test]
    fn test_shard_id_in_range() {
        for i in 0..1000 {
            let url = format!("https://forum.example.com/thread-{}.html", i);
            assert!(shard_id(&url) < DIVISIONS);
        }
    }

    #[test]
    fn test_distinct_urls_get_distinct_filenames() {
        let root = Path::new("./tmp");
        let a = shard_path(root, "kuing", "https://forum.example.com/thread-1.html");
        let b = shard_path(root, "kuing", "https://forum.example.com/thread-2.html");
        assert_ne!(a, b);
    }

    #[test]
    fn test_path_layout() {
        let root = Path::new("./tmp");
        let url = "https://forum.example.com/thread-1.html";
        let id = shard_id(url);
        let path = shard_path(root, "kuing", url);

        assert_eq!(
            path.parent().unwrap(),
            root.join(id.to_string()).as_path()
        );
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with(&format!("kuing{}-", id)));
        // 16 hex digits after the dash.
        let hash_part = name.rsplit('-').next().unwrap();
        assert_eq!(hash_part.len(), 16);
        assert!(hash_part.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_ensure_shard_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = shard_path(dir.path(), "kuing", "https://forum.example.com/t");
        ensure_shard_dir(&path).unwrap();
        ensure_shard_dir(&path).unwrap();
        assert!(path.parent().unwrap().is_dir());
    }
}
