// Template context structures for Askama templates, organized by page.

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{Identity, get_full_name, take_flash};
use crate::errors::AppError;
use crate::models::profile::Role;
use crate::panels::Notice;

mod api;
mod common;
mod dashboard;
mod panels;

pub use self::api::{ApiErrorResponse, MarkReadResponse, StatsResponse};
pub use self::common::LoginTemplate;
pub use self::dashboard::{EmployeeDashboardTemplate, ManagerDashboardTemplate, Tab};
pub use self::panels::{
    EmployeeFeedbackPanel, EmployeeGoalsPanel, ManagerEvaluationsPanel, ManagerFeedbackPanel,
    ManagerGoalsPanel, RatingField, SelectOption,
};

pub const APP_NAME: &str = "Perfboard";

/// Common context shared by all authenticated pages.
/// Templates access these as `ctx.full_name`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub full_name: String,
    pub avatar_initial: String,
    pub role: Role,
    pub flash: Option<Notice>,
    pub app_name: String,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session, identity: &Identity) -> Result<Self, AppError> {
        let full_name = get_full_name(session)
            .map_err(|e| AppError::Session(format!("Failed to get name: {}", e)))?;
        let avatar_initial = full_name.chars().next().unwrap_or('?').to_uppercase().to_string();
        Ok(Self {
            full_name,
            avatar_initial,
            role: identity.role,
            flash: take_flash(session),
            app_name: APP_NAME.to_string(),
            csrf_token: csrf::get_or_create_token(session),
        })
    }

    pub fn role_label(&self) -> &'static str {
        match self.role {
            Role::Manager => "Manager",
            Role::Employee => "Employee",
        }
    }
}
