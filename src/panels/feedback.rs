use crate::models::feedback::{FeedbackForm, NewFeedback};
use crate::store::PerformanceStore;
use super::{Notice, Submission, clamp_rating, require};

/// Manager gives feedback to an employee.
pub async fn give<S: PerformanceStore>(store: &S, manager_id: i64, form: &FeedbackForm) -> Submission {
    let mut errors = Vec::new();
    if form.employee_id <= 0 {
        errors.push("Employee is required".to_string());
    }
    require(&mut errors, &form.title, "Title");
    require(&mut errors, &form.content, "Feedback");
    if !errors.is_empty() {
        return Submission::rejected(errors);
    }

    let new = NewFeedback {
        title: form.title.trim().to_string(),
        content: form.content.trim().to_string(),
        feedback_type: form.feedback_type,
        rating: form.rating.map(clamp_rating),
        employee_id: form.employee_id,
        manager_id,
    };
    match store.insert_feedback(&new).await {
        Ok(_) => Submission::saved("Feedback submitted successfully", true),
        Err(e) => Submission::failed("submit feedback", &e),
    }
}

/// Employee marks a feedback item read. Repeating it is harmless: the item is
/// already read, nothing changes, and the unread count stays put.
pub async fn mark_read<S: PerformanceStore>(store: &S, employee_id: i64, feedback_id: i64) -> Submission {
    match store.mark_feedback_read(feedback_id, employee_id).await {
        Ok(transitioned) => Submission {
            notice: Notice {
                title: "Marked as read".to_string(),
                ..Notice::success("Feedback has been marked as read")
            },
            stats_changed: transitioned,
        },
        Err(e) => Submission::failed("mark feedback read", &e),
    }
}
