//! Stable content identity for media files.
//!
//! A fingerprint ties marks and favorites to a file's content rather than
//! its path, so both survive renames and moves within a storage backend.
//! Identity is scoped to the storage: the same bytes exposed by two
//! backends produce two distinct fingerprints.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content hash algorithms a storage backend may report, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlg {
    Sha256,
    Md5,
    Sha1,
}

impl HashAlg {
    fn prefix(self) -> &'static str {
        match self {
            HashAlg::Sha256 => "sha256",
            HashAlg::Md5 => "md5",
            HashAlg::Sha1 => "sha1",
        }
    }
}

/// Capability interface over a media file as reported by its storage
/// backend. Hash values are optional per algorithm; everything else is
/// always available.
pub trait MediaObject {
    fn path(&self) -> &str;
    fn size(&self) -> i64;
    fn created(&self) -> DateTime<Utc>;
    fn object_id(&self) -> &str;
    /// Hex digest for `alg`, if the backend reported one.
    fn hash(&self, alg: HashAlg) -> Option<&str>;
}

/// Owned, serializable [`MediaObject`] as carried in API requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaDescriptor {
    pub path: String,
    #[serde(default)]
    pub size: i64,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub object_id: String,
    #[serde(default)]
    pub hashes: HashMap<HashAlg, String>,
}

impl MediaObject for MediaDescriptor {
    fn path(&self) -> &str {
        &self.path
    }

    fn size(&self) -> i64 {
        self.size
    }

    fn created(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn object_id(&self) -> &str {
        &self.object_id
    }

    fn hash(&self, alg: HashAlg) -> Option<&str> {
        self.hashes.get(&alg).map(String::as_str)
    }
}

/// Derive the stable fingerprint for a media file on a storage backend.
///
/// The strongest available content hash wins: SHA-256, then MD5, then
/// SHA-1. An empty digest string counts as absent and falls through to
/// the next algorithm. Files without any usable hash fall back to a
/// composite of size, creation time, and the backend's object id;
/// composite collisions across distinct files are possible and accepted.
/// The result is the lowercase hex SHA-256 of `storage_id + "|" + value`,
/// so identical content under two storage ids never shares a fingerprint.
///
/// Pure and total: equal inputs always produce equal output, and no input
/// fails.
pub fn build_fingerprint(storage_id: i64, obj: &dyn MediaObject) -> String {
    let value = [HashAlg::Sha256, HashAlg::Md5, HashAlg::Sha1]
        .into_iter()
        .find_map(|alg| {
            obj.hash(alg)
                .filter(|digest| !digest.is_empty())
                .map(|digest| format!("{}:{}", alg.prefix(), digest))
        })
        .unwrap_or_else(|| {
            format!(
                "fallback:{}|{}|{}",
                obj.size(),
                obj.created().timestamp(),
                obj.object_id()
            )
        });

    let mut hasher = Sha256::new();
    hasher.update(format!("{storage_id}|{value}").as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(hashes: &[(HashAlg, &str)]) -> MediaDescriptor {
        MediaDescriptor {
            path: "/media/movie.mp4".to_string(),
            size: 1024,
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            object_id: "obj-1".to_string(),
            hashes: hashes
                .iter()
                .map(|(alg, hex)| (*alg, hex.to_string()))
                .collect(),
        }
    }

    #[test]
    fn deterministic_across_calls() {
        let obj = descriptor(&[(HashAlg::Sha256, "abc123")]);
        assert_eq!(build_fingerprint(7, &obj), build_fingerprint(7, &obj));
    }

    #[test]
    fn known_vector() {
        // hex(sha256("7|sha256:abc123"))
        let obj = descriptor(&[(HashAlg::Sha256, "abc123")]);
        let mut hasher = Sha256::new();
        hasher.update(b"7|sha256:abc123");
        let expected = hex::encode(hasher.finalize());
        assert_eq!(build_fingerprint(7, &obj), expected);
    }

    #[test]
    fn storage_scoped() {
        let obj = descriptor(&[(HashAlg::Sha256, "abc123")]);
        assert_ne!(build_fingerprint(1, &obj), build_fingerprint(2, &obj));
    }

    #[test]
    fn sha256_beats_md5() {
        let both = descriptor(&[(HashAlg::Sha256, "abc123"), (HashAlg::Md5, "def456")]);
        let sha_only = descriptor(&[(HashAlg::Sha256, "abc123")]);
        let md5_only = descriptor(&[(HashAlg::Md5, "def456")]);
        assert_eq!(build_fingerprint(1, &both), build_fingerprint(1, &sha_only));
        assert_ne!(build_fingerprint(1, &both), build_fingerprint(1, &md5_only));
    }

    #[test]
    fn md5_beats_sha1() {
        let both = descriptor(&[(HashAlg::Md5, "def456"), (HashAlg::Sha1, "0a1b2c")]);
        let md5_only = descriptor(&[(HashAlg::Md5, "def456")]);
        assert_eq!(build_fingerprint(1, &both), build_fingerprint(1, &md5_only));
    }

    #[test]
    fn empty_digest_counts_as_absent() {
        let empty_sha = descriptor(&[(HashAlg::Sha256, "")]);
        let hashless = descriptor(&[]);
        assert_eq!(
            build_fingerprint(3, &empty_sha),
            build_fingerprint(3, &hashless)
        );

        let empty_sha_with_md5 = descriptor(&[(HashAlg::Sha256, ""), (HashAlg::Md5, "def456")]);
        let md5_only = descriptor(&[(HashAlg::Md5, "def456")]);
        assert_eq!(
            build_fingerprint(3, &empty_sha_with_md5),
            build_fingerprint(3, &md5_only)
        );
    }

    #[test]
    fn fallback_uses_size_ctime_and_id() {
        let obj = descriptor(&[]);
        let mut hasher = Sha256::new();
        hasher.update(b"3|fallback:1024|1700000000|obj-1");
        let expected = hex::encode(hasher.finalize());
        assert_eq!(build_fingerprint(3, &obj), expected);
    }
}
