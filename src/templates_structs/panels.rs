use crate::models::evaluation::Evaluation;
use crate::models::feedback::{Feedback, FeedbackType};
use crate::models::goal::{Goal, GoalStatus};
use crate::models::profile::Profile;

/// One `<option>` of a select, pre-computed so templates never compare.
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn employees(employees: &[Profile], with_position: bool) -> Vec<SelectOption> {
        employees
            .iter()
            .map(|p| SelectOption {
                value: p.id.to_string(),
                label: match (&p.position, with_position) {
                    (Some(position), true) => format!("{} - {}", p.full_name, position),
                    _ => p.full_name.clone(),
                },
                selected: false,
            })
            .collect()
    }

    pub fn ratings(selected: i32) -> Vec<SelectOption> {
        (1..=5)
            .map(|r| SelectOption {
                value: r.to_string(),
                label: format!("{r} ★"),
                selected: r == selected,
            })
            .collect()
    }

    pub fn goal_statuses(selected: GoalStatus) -> Vec<SelectOption> {
        GoalStatus::ALL
            .iter()
            .map(|s| SelectOption {
                value: s.as_str().to_string(),
                label: s.label(),
                selected: *s == selected,
            })
            .collect()
    }

    pub fn feedback_types(selected: FeedbackType) -> Vec<SelectOption> {
        FeedbackType::ALL
            .iter()
            .map(|t| SelectOption {
                value: t.as_str().to_string(),
                label: t.as_str().to_string(),
                selected: *t == selected,
            })
            .collect()
    }
}

/// Employee "Personal Goals" tab. `editing` holds the goal whose edit form is
/// open, if any.
pub struct EmployeeGoalsPanel {
    pub goals: Vec<Goal>,
    pub editing: Option<Goal>,
    pub status_options: Vec<SelectOption>,
}

impl EmployeeGoalsPanel {
    pub fn new(goals: Vec<Goal>, edit_id: Option<i64>) -> Self {
        let editing = edit_id.and_then(|id| goals.iter().find(|g| g.id == id).cloned());
        let status_options = SelectOption::goal_statuses(
            editing.as_ref().map(|g| g.status()).unwrap_or(GoalStatus::Pending),
        );
        Self { goals, editing, status_options }
    }
}

pub struct EmployeeFeedbackPanel {
    pub feedback: Vec<Feedback>,
}

/// One criterion select on the evaluation form.
pub struct RatingField {
    pub name: &'static str,
    pub label: &'static str,
    pub options: Vec<SelectOption>,
}

impl RatingField {
    pub fn evaluation_form() -> Vec<RatingField> {
        [
            ("overall_rating", "Overall Rating"),
            ("technical_skills", "Technical Skills"),
            ("communication", "Communication"),
            ("teamwork", "Teamwork"),
            ("leadership", "Leadership"),
            ("initiative", "Initiative"),
        ]
        .into_iter()
        .map(|(name, label)| RatingField { name, label, options: SelectOption::ratings(3) })
        .collect()
    }
}

pub struct ManagerEvaluationsPanel {
    pub evaluations: Vec<Evaluation>,
    pub employee_options: Vec<SelectOption>,
    pub rating_fields: Vec<RatingField>,
}

pub struct ManagerGoalsPanel {
    pub goals: Vec<Goal>,
    pub employee_options: Vec<SelectOption>,
}

pub struct ManagerFeedbackPanel {
    pub feedback: Vec<Feedback>,
    pub employee_options: Vec<SelectOption>,
    pub type_options: Vec<SelectOption>,
    pub rating_options: Vec<SelectOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_options_preselect() {
        let options = SelectOption::ratings(3);
        assert_eq!(options.len(), 5);
        let selected: Vec<&str> = options.iter().filter(|o| o.selected).map(|o| o.value.as_str()).collect();
        assert_eq!(selected, vec!["3"]);
    }

    #[test]
    fn test_goal_status_options() {
        let options = SelectOption::goal_statuses(GoalStatus::InProgress);
        assert_eq!(options[1].value, "in_progress");
        assert_eq!(options[1].label, "in progress");
        assert!(options[1].selected);
        assert!(!options[0].selected);
    }

    #[test]
    fn test_evaluation_form_fields() {
        let fields = RatingField::evaluation_form();
        assert_eq!(fields.len(), 6);
        assert_eq!(fields[0].name, "overall_rating");
    }
}
