use std::sync::Arc;

use serde::Deserialize;

use crate::application::ensure_writable;
use crate::database::ports::{MarkRepository, NewMark};
use crate::error::{MarkError, Result};
use reelmark_model::{Mark, MarkDisplay, User};

/// Arguments for creating a mark. The fingerprint and storage id come from
/// the resolved live file, not from user input.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMark {
    pub fingerprint: String,
    pub storage_id: i64,
    pub original_path: String,
    pub time_second: f64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Arguments for updating a mark. Only the annotation fields are mutable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMark {
    pub id: i64,
    pub time_second: f64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Owner-scoped mark CRUD.
#[derive(Clone)]
pub struct MarkService {
    marks: Arc<dyn MarkRepository>,
}

impl std::fmt::Debug for MarkService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkService").finish_non_exhaustive()
    }
}

impl MarkService {
    pub fn new(marks: Arc<dyn MarkRepository>) -> Self {
        Self { marks }
    }

    /// Marks on one file for the calling user, time-ascending. Guests get
    /// an empty successful result.
    pub async fn list(&self, user: &User, fingerprint: &str) -> Result<Vec<MarkDisplay>> {
        if user.is_guest() {
            return Ok(Vec::new());
        }
        let marks = self.marks.list_for_fingerprint(user.id, fingerprint).await?;
        Ok(marks.iter().map(Mark::to_display).collect())
    }

    pub async fn create(&self, user: &User, args: CreateMark) -> Result<MarkDisplay> {
        ensure_writable(user)?;
        if args.fingerprint.is_empty() {
            return Err(MarkError::Validation("fingerprint is required".to_string()));
        }
        let mark = self
            .marks
            .create(NewMark {
                user_id: user.id,
                fingerprint: args.fingerprint,
                storage_id: args.storage_id,
                original_path: args.original_path,
                time_second: args.time_second,
                title: args.title,
                content: args.content,
            })
            .await?;
        Ok(mark.to_display())
    }

    /// Update a mark's annotation fields. The caller passes the live
    /// file's fingerprint; a mismatch with the stored one fails closed so
    /// a mark can never be retargeted at different content.
    pub async fn update(
        &self,
        user: &User,
        args: UpdateMark,
        live_fingerprint: &str,
    ) -> Result<MarkDisplay> {
        ensure_writable(user)?;
        let mut existing = self.marks.get(args.id, user.id).await?;
        if existing.fingerprint != live_fingerprint {
            return Err(MarkError::Conflict(
                "mark fingerprint does not match the current file".to_string(),
            ));
        }
        existing.time_second = args.time_second;
        existing.title = args.title;
        existing.content = args.content;
        let updated = self.marks.update(&existing).await?;
        Ok(updated.to_display())
    }

    pub async fn delete(&self, user: &User, id: i64) -> Result<()> {
        ensure_writable(user)?;
        self.marks.delete(id, user.id).await
    }
}
