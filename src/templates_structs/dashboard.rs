use askama::Template;

use crate::models::profile::{Profile, Role};
use crate::stats::reports::{EmployeeReport, ManagerReport, PerformanceTracking};
use crate::stats::{EmployeeStats, ManagerStats};
use super::PageContext;
use super::panels::*;

/// One dashboard tab link.
pub struct Tab {
    pub key: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl Tab {
    const EMPLOYEE: [(&'static str, &'static str); 4] = [
        ("performance", "Performance"),
        ("goals", "Personal Goals"),
        ("feedback", "Feedback"),
        ("reports", "Reports"),
    ];

    const MANAGER: [(&'static str, &'static str); 5] = [
        ("evaluations", "Evaluations"),
        ("goals", "Goals"),
        ("feedback", "Feedback"),
        ("reports", "Reports"),
        ("team", "Team"),
    ];

    /// The tabs for a role with `requested` highlighted. Unknown or missing
    /// keys select the role's first tab. Returns the tabs and the active key.
    pub fn for_role(role: Role, requested: Option<&str>) -> (Vec<Tab>, &'static str) {
        let defs: &[(&'static str, &'static str)] = match role {
            Role::Employee => &Self::EMPLOYEE,
            Role::Manager => &Self::MANAGER,
        };
        let active = defs
            .iter()
            .map(|(key, _)| *key)
            .find(|key| Some(*key) == requested)
            .unwrap_or(defs[0].0);
        let tabs = defs
            .iter()
            .map(|&(key, label)| Tab { key, label, active: key == active })
            .collect();
        (tabs, active)
    }
}

#[derive(Template)]
#[template(path = "dashboard/employee.html")]
pub struct EmployeeDashboardTemplate {
    pub ctx: PageContext,
    pub stats: EmployeeStats,
    pub tabs: Vec<Tab>,
    pub tracking: Option<PerformanceTracking>,
    pub goals: Option<EmployeeGoalsPanel>,
    pub feedback: Option<EmployeeFeedbackPanel>,
    pub report: Option<EmployeeReport>,
}

#[derive(Template)]
#[template(path = "dashboard/manager.html")]
pub struct ManagerDashboardTemplate {
    pub ctx: PageContext,
    pub stats: ManagerStats,
    pub tabs: Vec<Tab>,
    pub evaluations: Option<ManagerEvaluationsPanel>,
    pub goals: Option<ManagerGoalsPanel>,
    pub feedback: Option<ManagerFeedbackPanel>,
    pub report: Option<ManagerReport>,
    pub team: Option<Vec<Profile>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_per_role() {
        let (tabs, active) = Tab::for_role(Role::Employee, None);
        assert_eq!(active, "performance");
        assert_eq!(tabs.len(), 4);
        assert!(tabs[0].active);

        let (tabs, active) = Tab::for_role(Role::Manager, Some("bogus"));
        assert_eq!(active, "evaluations");
        assert_eq!(tabs.len(), 5);
    }

    #[test]
    fn test_requested_tab_is_active() {
        let (tabs, active) = Tab::for_role(Role::Manager, Some("team"));
        assert_eq!(active, "team");
        let active_tabs: Vec<&str> = tabs.iter().filter(|t| t.active).map(|t| t.key).collect();
        assert_eq!(active_tabs, vec!["team"]);

        // Employees have no team tab.
        let (_, active) = Tab::for_role(Role::Employee, Some("team"));
        assert_eq!(active, "performance");
    }
}
