//! Reconciliation of marks with favorite metadata.
//!
//! Takes snapshots of a user's marks, favorites, folder names, and storage
//! mount paths, and produces one aggregation record per fingerprint of the
//! requested media kind. Pure over its inputs; lookups that miss degrade
//! to defaults instead of failing.

use std::collections::HashMap;

use reelmark_model::{Favorite, Mark, MarkDisplay, MediaKind};
use serde::{Deserialize, Serialize};

/// Folder-name sentinel for media that has marks but no favorite record.
pub const UNFAVORITED_FOLDER: &str = "unfavorited";

/// One media file of the requested kind, with its marks in time order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaWithMarks {
    pub folder_id: i64,
    pub folder_name: String,
    /// Favorite id when the media is favorited, 0 otherwise.
    pub media_id: i64,
    pub file_name: String,
    pub original_path: String,
    pub storage_id: i64,
    pub marks: Vec<MarkDisplay>,
}

/// Group marks by fingerprint, keep groups of the requested kind, and
/// resolve display metadata from favorites or from the marks themselves.
///
/// Marks with an empty fingerprint are dropped. Within a group, marks keep
/// their input order (upstream is time-ascending). Each retained
/// fingerprint yields exactly one record; records appear in first-seen
/// mark order, never in map iteration order.
///
/// A group's kind is decided by its first mark's path. Fingerprints are
/// content-and-storage scoped, so groups are expected to be
/// kind-homogeneous; a heterogeneous group follows its first mark.
pub fn aggregate_marks(
    kind: MediaKind,
    marks: &[Mark],
    favorites: &[Favorite],
    folder_names: &HashMap<i64, String>,
    mount_paths: &HashMap<i64, String>,
) -> Vec<MediaWithMarks> {
    // Later favorites shadow earlier ones for the same fingerprint,
    // matching how the map was historically built.
    let mut favorite_map: HashMap<&str, &Favorite> = HashMap::new();
    for favorite in favorites {
        if !favorite.fingerprint.is_empty() {
            favorite_map.insert(favorite.fingerprint.as_str(), favorite);
        }
    }

    // First-seen-order grouping.
    let mut groups: Vec<(&str, Vec<&Mark>)> = Vec::new();
    let mut group_index: HashMap<&str, usize> = HashMap::new();
    for mark in marks {
        if mark.fingerprint.is_empty() {
            continue;
        }
        match group_index.get(mark.fingerprint.as_str()) {
            Some(&idx) => groups[idx].1.push(mark),
            None => {
                group_index.insert(mark.fingerprint.as_str(), groups.len());
                groups.push((mark.fingerprint.as_str(), vec![mark]));
            }
        }
    }

    let mut result = Vec::new();
    for (fingerprint, group) in groups {
        let first = group[0];
        if MediaKind::of_path(&first.original_path) != kind {
            continue;
        }

        let marks: Vec<MarkDisplay> = group.iter().map(|m| m.to_display()).collect();

        let record = match favorite_map.get(fingerprint) {
            Some(favorite) => MediaWithMarks {
                folder_id: favorite.folder_id,
                folder_name: folder_names
                    .get(&favorite.folder_id)
                    .cloned()
                    .unwrap_or_default(),
                media_id: favorite.id,
                file_name: favorite.file_name.clone(),
                original_path: favorite.original_path.clone(),
                storage_id: favorite.storage_id,
                marks,
            },
            None => {
                let original_path = match mount_paths
                    .get(&first.storage_id)
                    .filter(|_| first.storage_id > 0)
                {
                    Some(mount) => normalize_path(mount, &first.original_path),
                    None => first.original_path.clone(),
                };
                MediaWithMarks {
                    folder_id: 0,
                    folder_name: UNFAVORITED_FOLDER.to_string(),
                    media_id: 0,
                    file_name: file_name_of(&original_path).to_string(),
                    original_path,
                    storage_id: first.storage_id,
                    marks,
                }
            }
        };
        result.push(record);
    }
    result
}

/// Repair a path recorded before mount-path normalization by prepending
/// the storage's mount path when missing. Idempotent: an already-prefixed
/// path is returned unchanged.
pub fn normalize_path(mount_path: &str, path: &str) -> String {
    if mount_path.is_empty() {
        return path.to_string();
    }
    if mount_path == "/" {
        // Root mount: only ensure a single leading separator.
        if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        }
    } else if path.starts_with(mount_path) {
        path.to_string()
    } else {
        format!("{mount_path}/{path}")
    }
}

/// The substring after the final path separator, or the whole path when
/// there is none.
pub fn file_name_of(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn user() -> Uuid {
        Uuid::from_u128(0x1234)
    }

    fn mark(fingerprint: &str, path: &str, storage_id: i64, time_second: f64) -> Mark {
        Mark {
            id: (time_second * 10.0) as i64,
            user_id: user(),
            fingerprint: fingerprint.to_string(),
            storage_id,
            original_path: path.to_string(),
            time_second,
            title: format!("t{time_second}"),
            content: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn favorite(id: i64, fingerprint: &str, folder_id: i64, path: &str) -> Favorite {
        Favorite {
            id,
            user_id: user(),
            folder_id,
            storage_id: 9,
            original_path: path.to_string(),
            file_name: file_name_of(path).to_string(),
            note: String::new(),
            fingerprint: fingerprint.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn unfavorited_group_reconstructs_path() {
        let marks = vec![mark("f1", "movie.mp4", 3, 10.0)];
        let mounts = HashMap::from([(3, "/drive".to_string())]);
        let out = aggregate_marks(MediaKind::Video, &marks, &[], &HashMap::new(), &mounts);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].original_path, "/drive/movie.mp4");
        assert_eq!(out[0].file_name, "movie.mp4");
        assert_eq!(out[0].folder_name, UNFAVORITED_FOLDER);
        assert_eq!(out[0].folder_id, 0);
        assert_eq!(out[0].media_id, 0);
        assert_eq!(out[0].storage_id, 3);
    }

    #[test]
    fn favorited_group_uses_favorite_metadata() {
        let marks = vec![
            mark("f1", "/media/movie.mp4", 9, 5.0),
            mark("f1", "/media/movie.mp4", 9, 42.0),
        ];
        let favorites = vec![favorite(77, "f1", 4, "/media/movie.mp4")];
        let folders = HashMap::from([(4, "Classics".to_string())]);
        let out = aggregate_marks(MediaKind::Video, &marks, &favorites, &folders, &HashMap::new());

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].media_id, 77);
        assert_eq!(out[0].folder_id, 4);
        assert_eq!(out[0].folder_name, "Classics");
        let times: Vec<f64> = out[0].marks.iter().map(|m| m.time_second).collect();
        assert_eq!(times, vec![5.0, 42.0]);
    }

    #[test]
    fn missing_folder_name_defaults_to_empty() {
        let marks = vec![mark("f1", "/media/movie.mp4", 9, 5.0)];
        let favorites = vec![favorite(77, "f1", 4, "/media/movie.mp4")];
        let out = aggregate_marks(
            MediaKind::Video,
            &marks,
            &favorites,
            &HashMap::new(),
            &HashMap::new(),
        );
        assert_eq!(out[0].folder_name, "");
    }

    #[test]
    fn empty_fingerprints_dropped_and_groups_unique() {
        let marks = vec![
            mark("", "/a.mp4", 1, 1.0),
            mark("f1", "/a.mp4", 1, 2.0),
            mark("f2", "/b.mp4", 1, 3.0),
            mark("f1", "/a.mp4", 1, 4.0),
        ];
        let out = aggregate_marks(
            MediaKind::Video,
            &marks,
            &[],
            &HashMap::new(),
            &HashMap::new(),
        );

        // Every fingerprinted mark lands in exactly one group.
        let total: usize = out.iter().map(|r| r.marks.len()).sum();
        assert_eq!(total, 3);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].marks.len(), 2);
        assert_eq!(out[1].marks.len(), 1);
    }

    #[test]
    fn kind_filter_drops_other_kinds() {
        let marks = vec![
            mark("f1", "/media/movie.mp4", 1, 1.0),
            mark("f2", "/media/song.mp3", 1, 2.0),
        ];
        let audio = aggregate_marks(
            MediaKind::Audio,
            &marks,
            &[],
            &HashMap::new(),
            &HashMap::new(),
        );
        assert_eq!(audio.len(), 1);
        assert_eq!(audio[0].file_name, "song.mp3");
    }

    #[test]
    fn mixed_kind_group_follows_first_mark() {
        // Theoretically impossible (fingerprints are content-scoped), but
        // unvalidated: the first mark decides the group's kind wholesale.
        let marks = vec![
            mark("f1", "/media/song.mp3", 1, 1.0),
            mark("f1", "/media/movie.mp4", 1, 2.0),
        ];
        let audio = aggregate_marks(
            MediaKind::Audio,
            &marks,
            &[],
            &HashMap::new(),
            &HashMap::new(),
        );
        assert_eq!(audio.len(), 1);
        assert_eq!(audio[0].marks.len(), 2);

        let video = aggregate_marks(
            MediaKind::Video,
            &marks,
            &[],
            &HashMap::new(),
            &HashMap::new(),
        );
        assert!(video.is_empty());
    }

    #[test]
    fn output_order_is_first_seen() {
        let marks = vec![
            mark("f2", "/b.mp4", 1, 1.0),
            mark("f1", "/a.mp4", 1, 2.0),
            mark("f2", "/b.mp4", 1, 3.0),
        ];
        let out = aggregate_marks(
            MediaKind::Video,
            &marks,
            &[],
            &HashMap::new(),
            &HashMap::new(),
        );
        let names: Vec<&str> = out.iter().map(|r| r.file_name.as_str()).collect();
        assert_eq!(names, vec!["b.mp4", "a.mp4"]);
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_path("/drive", "movie.mp4");
        let twice = normalize_path("/drive", &once);
        assert_eq!(once, "/drive/movie.mp4");
        assert_eq!(once, twice);
    }

    #[test]
    fn root_mount_avoids_doubled_separator() {
        assert_eq!(normalize_path("/", "movie.mp4"), "/movie.mp4");
        assert_eq!(normalize_path("/", "/movie.mp4"), "/movie.mp4");
    }

    #[test]
    fn empty_mount_leaves_path_alone() {
        assert_eq!(normalize_path("", "movie.mp4"), "movie.mp4");
    }

    #[test]
    fn file_name_of_handles_missing_separator() {
        assert_eq!(file_name_of("/a/b/c.mp4"), "c.mp4");
        assert_eq!(file_name_of("c.mp4"), "c.mp4");
        assert_eq!(file_name_of("/trailing/"), "");
    }
}
