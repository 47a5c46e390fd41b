//! Field-level validation for post writes.
//!
//! All three text fields share the same trim-and-check semantics: leading and
//! trailing whitespace is stripped, the trimmed value must be non-empty, and
//! it must not exceed the field's maximum length. The store carries matching
//! check constraints as a safety net, but the messages callers see always come
//! from here.

use std::fmt;

use crate::domain::{NewPost, PostPatch};

pub const TITLE_MAX_LEN: usize = 200;
pub const CONTENT_MAX_LEN: usize = 10_000;
pub const AUTHOR_MAX_LEN: usize = 100;

/// Which rule a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Empty or whitespace-only after trimming.
    Blank,
    /// Trimmed value longer than the field's maximum.
    TooLong { max: usize },
}

/// A single field/rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub kind: ViolationKind,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ViolationKind::Blank => {
                write!(f, "{} cannot be empty or whitespace-only", self.field)
            }
            ViolationKind::TooLong { max } => {
                write!(f, "{} cannot exceed {} characters", self.field, max)
            }
        }
    }
}

/// Accumulated violations for one write attempt. Validation checks every
/// supplied field rather than stopping at the first failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    fn push(&mut self, field: &'static str, kind: ViolationKind) {
        self.violations.push(FieldViolation { field, kind });
    }

    fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.violations {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Trim a candidate value and record any violations. Length is measured in
/// Unicode scalar values, not bytes.
fn check(field: &'static str, value: &str, max: usize, errors: &mut ValidationErrors) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, ViolationKind::Blank);
    } else if trimmed.chars().count() > max {
        errors.push(field, ViolationKind::TooLong { max });
    }
    trimmed.to_owned()
}

/// Creation validation: every field required. Returns the trimmed triple on
/// success.
pub fn validate_new(post: NewPost) -> Result<NewPost, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let title = check("title", &post.title, TITLE_MAX_LEN, &mut errors);
    let content = check("content", &post.content, CONTENT_MAX_LEN, &mut errors);
    let author = check("author", &post.author, AUTHOR_MAX_LEN, &mut errors);
    errors.into_result(NewPost {
        title,
        content,
        author,
    })
}

/// Update validation: only supplied fields are checked; omitted fields pass
/// through untouched. A field supplied as an empty string is still rejected.
pub fn validate_patch(patch: PostPatch) -> Result<PostPatch, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let title = patch
        .title
        .map(|v| check("title", &v, TITLE_MAX_LEN, &mut errors));
    let content = patch
        .content
        .map(|v| check("content", &v, CONTENT_MAX_LEN, &mut errors));
    let author = patch
        .author
        .map(|v| check("author", &v, AUTHOR_MAX_LEN, &mut errors));
    errors.into_result(PostPatch {
        title,
        content,
        author,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post(title: &str, content: &str, author: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
        }
    }

    #[test]
    fn valid_input_comes_back_trimmed() {
        let post = validate_new(new_post("  My Title  ", "\tBody\n", " Alice ")).unwrap();
        assert_eq!(post.title, "My Title");
        assert_eq!(post.content, "Body");
        assert_eq!(post.author, "Alice");
    }

    #[test]
    fn blank_fields_are_rejected() {
        let err = validate_new(new_post("", "   ", "Alice")).unwrap_err();
        assert_eq!(err.violations().len(), 2);
        assert_eq!(err.violations()[0].field, "title");
        assert_eq!(err.violations()[0].kind, ViolationKind::Blank);
        assert_eq!(err.violations()[1].field, "content");
        assert!(err.to_string().contains("title cannot be empty"));
        assert!(err.to_string().contains("content cannot be empty"));
    }

    #[test]
    fn over_length_fields_are_rejected() {
        let err = validate_new(new_post(
            &"t".repeat(201),
            &"c".repeat(10_001),
            &"a".repeat(101),
        ))
        .unwrap_err();
        assert_eq!(err.violations().len(), 3);
        assert!(err.to_string().contains("title cannot exceed 200 characters"));
        assert!(
            err.to_string()
                .contains("content cannot exceed 10000 characters")
        );
        assert!(
            err.to_string()
                .contains("author cannot exceed 100 characters")
        );
    }

    #[test]
    fn boundary_lengths_pass() {
        let post = validate_new(new_post(
            &"t".repeat(200),
            &"c".repeat(10_000),
            &"a".repeat(100),
        ))
        .unwrap();
        assert_eq!(post.title.len(), 200);
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // 200 multi-byte chars are within bounds even though the byte length is not.
        let title = "é".repeat(200);
        assert!(title.len() > 200);
        validate_new(new_post(&title, "content", "author")).unwrap();
    }

    #[test]
    fn patch_omitted_fields_pass_through() {
        let patch = validate_patch(PostPatch {
            title: Some("  New  ".to_string()),
            content: None,
            author: None,
        })
        .unwrap();
        assert_eq!(patch.title.as_deref(), Some("New"));
        assert_eq!(patch.content, None);
        assert_eq!(patch.author, None);
    }

    #[test]
    fn patch_supplied_empty_string_is_rejected() {
        let err = validate_patch(PostPatch {
            title: None,
            content: None,
            author: Some(String::new()),
        })
        .unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].field, "author");
        assert_eq!(err.violations()[0].kind, ViolationKind::Blank);
    }

    #[test]
    fn empty_patch_is_valid() {
        let patch = validate_patch(PostPatch::default()).unwrap();
        assert!(patch.is_empty());
    }
}
