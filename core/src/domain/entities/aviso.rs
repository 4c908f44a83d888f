//! Notices ("avisos") published to parents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A notice published by a staff member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aviso {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub author_id: i64,

    /// Classroom the notice targets; `None` means every classroom
    pub target_classroom: Option<String>,
}

/// Fields supplied when publishing a notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAviso {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub target_classroom: Option<String>,
}

/// Partial update of a notice. Absent fields are left untouched.
///
/// `target_classroom` distinguishes "absent" (`None`) from an explicit
/// `null` (`Some(None)`), which widens the notice to every classroom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvisoChanges {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub content: Option<String>,

    #[serde(default, deserialize_with = "deserialize_present")]
    pub target_classroom: Option<Option<String>>,
}

impl AvisoChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.target_classroom.is_none()
    }
}

impl Aviso {
    /// Applies `changes` and stamps `updated_at`.
    ///
    /// `id`, `author_id` and `created_at` never change.
    pub fn apply(&mut self, changes: AvisoChanges, now: DateTime<Utc>) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(target) = changes.target_classroom {
            self.target_classroom = target;
        }
        self.updated_at = Some(now);
    }
}

/// Maps a present field (including `null`) to `Some`
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
