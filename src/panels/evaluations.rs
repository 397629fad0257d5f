use crate::models::evaluation::{EvaluationForm, NewEvaluation};
use crate::store::PerformanceStore;
use super::{Submission, clamp_rating, optional_text, require_date};

/// Manager records an evaluation. Evaluations are immutable afterwards.
pub async fn create<S: PerformanceStore>(store: &S, manager_id: i64, form: &EvaluationForm) -> Submission {
    let mut errors = Vec::new();
    if form.employee_id <= 0 {
        errors.push("Employee is required".to_string());
    }
    require_date(&mut errors, &form.period_start, "Period start");
    require_date(&mut errors, &form.period_end, "Period end");
    if !errors.is_empty() {
        return Submission::rejected(errors);
    }

    let new = NewEvaluation {
        employee_id: form.employee_id,
        manager_id,
        period_start: form.period_start.trim().to_string(),
        period_end: form.period_end.trim().to_string(),
        overall_rating: clamp_rating(form.overall_rating),
        technical_skills: clamp_rating(form.technical_skills),
        communication: clamp_rating(form.communication),
        teamwork: clamp_rating(form.teamwork),
        leadership: clamp_rating(form.leadership),
        initiative: clamp_rating(form.initiative),
        strengths: optional_text(&form.strengths),
        areas_for_improvement: optional_text(&form.areas_for_improvement),
        comments: optional_text(&form.comments),
    };
    match store.insert_evaluation(&new).await {
        Ok(_) => Submission::saved("Evaluation created successfully", true),
        Err(e) => Submission::failed("create evaluation", &e),
    }
}
