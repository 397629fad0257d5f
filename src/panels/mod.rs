//! Write side of the CRUD panels.
//!
//! Every submission is one insert or update against the store. The result is
//! a [`Notice`] for the user; a failed write never leaves anything behind in
//! the displayed lists because lists are always re-read from the store.

pub mod evaluations;
pub mod feedback;
pub mod goals;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message shown once after a write (the toast of the page).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, title: "Success".to_string(), message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, title: "Error".to_string(), message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice-success",
            NoticeKind::Error => "notice-error",
        }
    }
}

/// Result of a panel submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub notice: Notice,
    /// Whether the dashboard's summary numbers may have changed.
    pub stats_changed: bool,
}

impl Submission {
    fn saved(message: &str, stats_changed: bool) -> Self {
        Self { notice: Notice::success(message), stats_changed }
    }

    fn rejected(errors: Vec<String>) -> Self {
        Self { notice: Notice::error(errors.join(". ")), stats_changed: false }
    }

    fn failed(action: &str, err: &AppError) -> Self {
        log::warn!("Failed to {action}: {err}");
        Self { notice: Notice::error(err.user_message()), stats_changed: false }
    }
}

pub(crate) fn require(errors: &mut Vec<String>, value: &str, field: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{field} is required"));
    }
}

pub(crate) fn require_date(errors: &mut Vec<String>, value: &str, field: &str) {
    let value = value.trim();
    if value.is_empty() {
        errors.push(format!("{field} is required"));
    } else if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        errors.push(format!("{field} must be a date (YYYY-MM-DD)"));
    }
}

/// Empty text inputs are stored as NULL.
pub(crate) fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

pub(crate) fn clamp_rating(value: i32) -> i32 {
    value.clamp(1, 5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        let mut errors = Vec::new();
        require(&mut errors, "  ", "Title");
        require(&mut errors, "Ship it", "Description");
        require_date(&mut errors, "", "Target date");
        require_date(&mut errors, "31/12/2026", "Period end");
        require_date(&mut errors, "2026-12-31", "Period start");
        assert_eq!(
            errors,
            vec![
                "Title is required".to_string(),
                "Target date is required".to_string(),
                "Period end must be a date (YYYY-MM-DD)".to_string(),
            ]
        );
    }

    #[test]
    fn test_optional_text_and_clamp() {
        assert_eq!(optional_text("   "), None);
        assert_eq!(optional_text(" Good ").as_deref(), Some("Good"));
        assert_eq!(clamp_rating(0), 1);
        assert_eq!(clamp_rating(9), 5);
        assert_eq!(clamp_rating(4), 4);
    }

    #[test]
    fn test_notice_classes() {
        assert_eq!(Notice::success("ok").css_class(), "notice-success");
        assert!(Notice::error("nope").is_error());
    }
}
