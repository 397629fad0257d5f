//! The role-specific dashboard page. The summary stats and the selected
//! tab's panel are fetched concurrently; each panel read that fails is
//! logged and rendered as its empty state.

use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::auth::session::{Identity, get_identity};
use crate::errors::{AppError, render};
use crate::models::evaluation::Evaluation;
use crate::models::feedback::{Feedback, FeedbackType};
use crate::models::goal::Goal;
use crate::models::profile::{Profile, Role};
use crate::stats::reports::{self, EmployeeReport, ManagerReport, PerformanceTracking};
use crate::stats::{self, or_default};
use crate::store::{PerformanceStore, Scope};
use crate::templates_structs::{
    EmployeeDashboardTemplate, EmployeeFeedbackPanel, EmployeeGoalsPanel, ManagerDashboardTemplate,
    ManagerEvaluationsPanel, ManagerFeedbackPanel, ManagerGoalsPanel, PageContext, RatingField,
    SelectOption, Tab,
};

#[derive(Deserialize)]
pub struct DashboardQuery {
    pub tab: Option<String>,
    /// Goal whose edit form is open on the employee goals tab.
    pub edit: Option<i64>,
}

enum EmployeePanel {
    Tracking(PerformanceTracking),
    Goals(EmployeeGoalsPanel),
    Feedback(EmployeeFeedbackPanel),
    Report(EmployeeReport),
}

enum ManagerPanel {
    Evaluations(ManagerEvaluationsPanel),
    Goals(ManagerGoalsPanel),
    Feedback(ManagerFeedbackPanel),
    Report(ManagerReport),
    Team(Vec<Profile>),
}

async fn load_employee_panel<S: PerformanceStore>(
    store: &S,
    employee_id: i64,
    tab: &str,
    edit: Option<i64>,
) -> EmployeePanel {
    match tab {
        "goals" => {
            let goals: Vec<Goal> = or_default("goals", store.goals(Scope::Employee(employee_id)).await);
            EmployeePanel::Goals(EmployeeGoalsPanel::new(goals, edit))
        }
        "feedback" => {
            let feedback: Vec<Feedback> =
                or_default("feedback", store.feedback(Scope::Employee(employee_id)).await);
            EmployeePanel::Feedback(EmployeeFeedbackPanel { feedback })
        }
        "reports" => EmployeePanel::Report(reports::employee_report(store, employee_id).await),
        _ => EmployeePanel::Tracking(reports::performance_tracking(store, employee_id).await),
    }
}

async fn load_manager_panel<S: PerformanceStore>(store: &S, manager_id: i64, tab: &str) -> ManagerPanel {
    match tab {
        "goals" => {
            let (goals, employees) = tokio::join!(store.goals(Scope::Manager(manager_id)), store.employees());
            let employees = or_default("employees", employees);
            ManagerPanel::Goals(ManagerGoalsPanel {
                goals: or_default("goals", goals),
                employee_options: SelectOption::employees(&employees, false),
            })
        }
        "feedback" => {
            let (feedback, employees) =
                tokio::join!(store.feedback(Scope::Manager(manager_id)), store.employees());
            let employees = or_default("employees", employees);
            ManagerPanel::Feedback(ManagerFeedbackPanel {
                feedback: or_default("feedback", feedback),
                employee_options: SelectOption::employees(&employees, false),
                type_options: SelectOption::feedback_types(FeedbackType::General),
                rating_options: SelectOption::ratings(3),
            })
        }
        "reports" => ManagerPanel::Report(reports::manager_report(store).await),
        "team" => ManagerPanel::Team(or_default("employees", store.employees().await)),
        _ => {
            let (evaluations, employees) =
                tokio::join!(store.evaluations_by_manager(manager_id), store.employees());
            let evaluations: Vec<Evaluation> = or_default("evaluations", evaluations);
            let employees = or_default("employees", employees);
            ManagerPanel::Evaluations(ManagerEvaluationsPanel {
                evaluations,
                employee_options: SelectOption::employees(&employees, true),
                rating_fields: RatingField::evaluation_form(),
            })
        }
    }
}

async fn employee_page(
    pool: &PgPool,
    ctx: PageContext,
    identity: Identity,
    query: &DashboardQuery,
) -> Result<HttpResponse, AppError> {
    let (tabs, active) = Tab::for_role(Role::Employee, query.tab.as_deref());
    let (stats, panel) = tokio::join!(
        stats::employee_stats(pool, identity.profile_id),
        load_employee_panel(pool, identity.profile_id, active, query.edit),
    );

    let mut tmpl = EmployeeDashboardTemplate {
        ctx,
        stats,
        tabs,
        tracking: None,
        goals: None,
        feedback: None,
        report: None,
    };
    match panel {
        EmployeePanel::Tracking(p) => tmpl.tracking = Some(p),
        EmployeePanel::Goals(p) => tmpl.goals = Some(p),
        EmployeePanel::Feedback(p) => tmpl.feedback = Some(p),
        EmployeePanel::Report(p) => tmpl.report = Some(p),
    }
    render(tmpl)
}

async fn manager_page(
    pool: &PgPool,
    ctx: PageContext,
    identity: Identity,
    query: &DashboardQuery,
) -> Result<HttpResponse, AppError> {
    let (tabs, active) = Tab::for_role(Role::Manager, query.tab.as_deref());
    let (stats, panel) = tokio::join!(
        stats::manager_stats(pool, identity.profile_id),
        load_manager_panel(pool, identity.profile_id, active),
    );

    let mut tmpl = ManagerDashboardTemplate {
        ctx,
        stats,
        tabs,
        evaluations: None,
        goals: None,
        feedback: None,
        report: None,
        team: None,
    };
    match panel {
        ManagerPanel::Evaluations(p) => tmpl.evaluations = Some(p),
        ManagerPanel::Goals(p) => tmpl.goals = Some(p),
        ManagerPanel::Feedback(p) => tmpl.feedback = Some(p),
        ManagerPanel::Report(p) => tmpl.report = Some(p),
        ManagerPanel::Team(p) => tmpl.team = Some(p),
    }
    render(tmpl)
}

pub async fn index(
    pool: web::Data<PgPool>,
    session: Session,
    query: web::Query<DashboardQuery>,
) -> Result<HttpResponse, AppError> {
    let identity = get_identity(&session)?;
    let ctx = PageContext::build(&session, &identity)?;

    match identity.role {
        Role::Employee => employee_page(&pool, ctx, identity, &query).await,
        Role::Manager => manager_page(&pool, ctx, identity, &query).await,
    }
}
