use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - the single content record managed by the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Store-assigned serial primary key.
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
    /// Store-assigned at insert time, immutable thereafter.
    pub time_created: DateTime<Utc>,
}

/// Input for creating a post. Unvalidated until it passes through
/// [`crate::validation::validate_new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Partial-update input. `None` means the field was omitted and the stored
/// value is left alone; `Some("")` means the caller explicitly supplied a
/// blank value, which fails validation. The two states are never collapsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl PostPatch {
    /// True when no field was supplied; applying such a patch is a no-op.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn post_serializes_timestamp_as_rfc3339() {
        let post = Post {
            id: 1,
            title: "Hello".to_string(),
            content: "World".to_string(),
            author: "Alice".to_string(),
            time_created: Utc.with_ymd_and_hms(2025, 7, 30, 12, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["time_created"], "2025-07-30T12:00:00Z");
    }

    #[test]
    fn empty_patch_is_empty() {
        assert!(PostPatch::default().is_empty());
        assert!(
            !PostPatch {
                title: Some(String::new()),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
