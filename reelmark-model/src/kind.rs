use std::fmt::Display;
use std::fmt::Formatter;

use serde::{Deserialize, Serialize};

/// Coarse media classification derived from a path's extension.
///
/// Classification looks only at the extension, never at file content, so a
/// renamed file changes kind even though its fingerprint does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Audio,
    Video,
    Image,
    Other,
}

const AUDIO_EXTS: &[&str] = &["mp3", "flac", "ogg", "m4a", "wav", "opus", "wma"];
const VIDEO_EXTS: &[&str] = &[
    "mp4", "mkv", "avi", "mov", "rmvb", "webm", "flv", "m3u8", "ts", "m2ts", "wmv",
];
const IMAGE_EXTS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "svg", "ico", "webp", "avif", "tiff", "heic",
];

impl MediaKind {
    /// Classify a path by its lowercase extension. Paths without an
    /// extension, and unrecognized extensions, are `Other`.
    pub fn of_path(path: &str) -> Self {
        let ext = match path.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.contains('/') => ext.to_ascii_lowercase(),
            _ => return MediaKind::Other,
        };
        if AUDIO_EXTS.contains(&ext.as_str()) {
            MediaKind::Audio
        } else if VIDEO_EXTS.contains(&ext.as_str()) {
            MediaKind::Video
        } else if IMAGE_EXTS.contains(&ext.as_str()) {
            MediaKind::Image
        } else {
            MediaKind::Other
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Audio => write!(f, "audio"),
            MediaKind::Video => write!(f, "video"),
            MediaKind::Image => write!(f, "image"),
            MediaKind::Other => write!(f, "other"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_extensions() {
        assert_eq!(MediaKind::of_path("/media/movie.mp4"), MediaKind::Video);
        assert_eq!(MediaKind::of_path("/media/track.FLAC"), MediaKind::Audio);
        assert_eq!(MediaKind::of_path("photo.jpeg"), MediaKind::Image);
        assert_eq!(MediaKind::of_path("notes.txt"), MediaKind::Other);
    }

    #[test]
    fn missing_extension_is_other() {
        assert_eq!(MediaKind::of_path("Makefile"), MediaKind::Other);
        assert_eq!(MediaKind::of_path("/some/dir.d/file"), MediaKind::Other);
        assert_eq!(MediaKind::of_path(""), MediaKind::Other);
    }
}
