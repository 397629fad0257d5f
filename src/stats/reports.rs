//! Data behind the report and tracking panels.

use crate::charts::LineChart;
use crate::models::evaluation::{Criterion, Evaluation};
use crate::store::PerformanceStore;
use super::reducer::{self, CategoryAverage, GoalTally, StatusCount};
use super::or_default;

/// Evaluations shown on an employee's tracking and report panels.
pub const EMPLOYEE_REPORT_EVALUATIONS: i64 = 5;
/// Evaluations behind the manager's trend chart.
pub const MANAGER_REPORT_EVALUATIONS: i64 = 10;
/// Metric snapshots plotted on the tracking chart.
pub const TRACKING_METRICS: i64 = 10;

/// Employee "Reports" tab: skill averages, goals by status and the
/// active/completed/other totals.
#[derive(Debug, Clone, Default)]
pub struct EmployeeReport {
    pub skills: Vec<CategoryAverage>,
    pub goals_by_status: Vec<StatusCount>,
    pub goal_totals: GoalTally,
}

pub async fn employee_report<S: PerformanceStore>(store: &S, employee_id: i64) -> EmployeeReport {
    let (evaluations, statuses) = tokio::join!(
        store.recent_evaluations(Some(employee_id), EMPLOYEE_REPORT_EVALUATIONS),
        store.goal_statuses(Some(employee_id)),
    );
    let evaluations = or_default("report evaluations", evaluations);
    let statuses = or_default("goal statuses", statuses);

    EmployeeReport {
        skills: reducer::criteria_averages(&evaluations),
        goals_by_status: reducer::status_histogram(&statuses),
        goal_totals: reducer::goal_tally(&statuses),
    }
}

/// Employee "Performance" tab: metrics over time plus recent evaluations.
#[derive(Debug, Clone, Default)]
pub struct PerformanceTracking {
    pub chart: LineChart,
    pub evaluations: Vec<Evaluation>,
}

pub async fn performance_tracking<S: PerformanceStore>(store: &S, employee_id: i64) -> PerformanceTracking {
    let (metrics, evaluations) = tokio::join!(
        store.metrics_for_employee(employee_id, TRACKING_METRICS),
        store.recent_evaluations(Some(employee_id), EMPLOYEE_REPORT_EVALUATIONS),
    );

    PerformanceTracking {
        chart: LineChart::from_metrics(&or_default("performance metrics", metrics)),
        evaluations: or_default("recent evaluations", evaluations),
    }
}

/// Manager "Reports" tab: the latest evaluations as a trend (oldest first)
/// and their per-criterion averages.
#[derive(Debug, Clone, Default)]
pub struct ManagerReport {
    pub trend: Vec<Evaluation>,
    pub averages: Vec<CategoryAverage>,
    pub criteria: Vec<Criterion>,
}

pub async fn manager_report<S: PerformanceStore>(store: &S) -> ManagerReport {
    let mut evaluations = or_default(
        "report evaluations",
        store.recent_evaluations(None, MANAGER_REPORT_EVALUATIONS).await,
    );
    let averages = reducer::criteria_averages(&evaluations);
    evaluations.reverse();

    ManagerReport {
        trend: evaluations,
        averages,
        criteria: Criterion::ALL.to_vec(),
    }
}
