//! Client-side reductions over small fetched row sets. Every dashboard
//! number that is an average, a tally or a histogram goes through here.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::evaluation::{Criterion, Evaluation};
use crate::models::goal::GoalStatus;

/// Arithmetic mean via running sum / count. An empty input yields 0.
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0_f64, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Round to one decimal place, halves away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean of 1–5 ratings rounded to one decimal; 0 when there are none.
pub fn average_rating(ratings: &[i32]) -> f64 {
    round1(mean(ratings.iter().map(|&r| f64::from(r))))
}

/// One bar of the skills chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAverage {
    pub category: &'static str,
    pub value: f64,
}

impl CategoryAverage {
    pub fn value_display(&self) -> String {
        format!("{:.1}", self.value)
    }

    /// Bar length as a percentage of the 5-point scale.
    pub fn percent(&self) -> u32 {
        ((self.value / 5.0) * 100.0).round().clamp(0.0, 100.0) as u32
    }
}

/// Per-criterion averages across evaluations. A criterion left unrated on an
/// evaluation contributes 0 but still counts toward the divisor. No
/// evaluations means no bars.
pub fn criteria_averages(evaluations: &[Evaluation]) -> Vec<CategoryAverage> {
    if evaluations.is_empty() {
        return Vec::new();
    }
    Criterion::ALL
        .iter()
        .map(|criterion| CategoryAverage {
            category: criterion.label(),
            value: round1(mean(
                evaluations
                    .iter()
                    .map(|e| f64::from(e.criterion(*criterion).unwrap_or(0))),
            )),
        })
        .collect()
}

/// One bucket of the goals-by-status histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: GoalStatus,
    pub count: i64,
}

impl StatusCount {
    pub fn label(&self) -> String {
        self.status.label()
    }

    pub fn badge_class(&self) -> &'static str {
        self.status.badge_class()
    }
}

/// Count goals per status, in workflow order, omitting statuses with no goals.
pub fn status_histogram(statuses: &[GoalStatus]) -> Vec<StatusCount> {
    let mut counts: BTreeMap<GoalStatus, i64> = BTreeMap::new();
    for status in statuses {
        *counts.entry(*status).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(status, count)| StatusCount { status, count })
        .collect()
}

/// Goal counts split into the dashboard's buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GoalTally {
    pub active: i64,
    pub completed: i64,
    pub other: i64,
    pub total: i64,
}

pub fn goal_tally(statuses: &[GoalStatus]) -> GoalTally {
    statuses.iter().fold(GoalTally::default(), |mut tally, status| {
        match status {
            s if s.is_active() => tally.active += 1,
            GoalStatus::Completed => tally.completed += 1,
            _ => tally.other += 1,
        }
        tally.total += 1;
        tally
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluation(ratings: [Option<i32>; 5]) -> Evaluation {
        Evaluation {
            id: 1,
            period_start: "2026-01-01".into(),
            period_end: "2026-03-31".into(),
            evaluation_date: "2026-04-02".into(),
            overall_rating: 3,
            technical_skills: ratings[0],
            communication: ratings[1],
            teamwork: ratings[2],
            leadership: ratings[3],
            initiative: ratings[4],
            strengths: None,
            areas_for_improvement: None,
            comments: None,
            employee_id: 1,
            manager_id: 2,
            employee_name: None,
            employee_position: None,
            created_at: "2026-04-02 10:00:00+00".into(),
        }
    }

    #[test]
    fn test_mean_of_empty_is_zero() {
        assert_eq!(mean(Vec::<f64>::new()), 0.0);
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn test_average_rating_rounds_to_one_decimal() {
        assert_eq!(average_rating(&[4, 5, 3]), 4.0);
        assert_eq!(average_rating(&[4, 4, 5]), 4.3);
        assert_eq!(average_rating(&[5, 4]), 4.5);
        assert_eq!(average_rating(&[1, 2, 2]), 1.7);
    }

    #[test]
    fn test_average_matches_sum_over_len() {
        let sets: [&[i32]; 5] = [&[1], &[2, 3], &[5, 5, 4, 1], &[3, 3, 3, 3, 2], &[1, 5, 1, 5, 1, 5, 2]];
        for set in sets {
            let expected = (set.iter().sum::<i32>() as f64 / set.len() as f64 * 10.0).round() / 10.0;
            assert_eq!(average_rating(set), expected, "ratings {set:?}");
        }
    }

    #[test]
    fn test_criteria_averages_treat_missing_as_zero() {
        let evals = vec![
            evaluation([Some(4), Some(5), Some(3), None, Some(2)]),
            evaluation([Some(2), Some(5), Some(4), Some(4), Some(3)]),
        ];
        let avgs = criteria_averages(&evals);
        let values: Vec<(&str, f64)> = avgs.iter().map(|a| (a.category, a.value)).collect();
        assert_eq!(
            values,
            vec![
                ("Technical", 3.0),
                ("Communication", 5.0),
                ("Teamwork", 3.5),
                ("Leadership", 2.0),
                ("Initiative", 2.5),
            ]
        );
        assert_eq!(avgs[1].percent(), 100);
        assert_eq!(avgs[0].value_display(), "3.0");
    }

    #[test]
    fn test_criteria_averages_empty() {
        assert!(criteria_averages(&[]).is_empty());
    }

    #[test]
    fn test_histogram_and_tally() {
        use GoalStatus::*;
        let statuses = [Pending, Pending, InProgress, Completed, Completed];
        let hist = status_histogram(&statuses);
        assert_eq!(
            hist,
            vec![
                StatusCount { status: Pending, count: 2 },
                StatusCount { status: InProgress, count: 1 },
                StatusCount { status: Completed, count: 2 },
            ]
        );
        let tally = goal_tally(&statuses);
        assert_eq!(tally, GoalTally { active: 3, completed: 2, other: 0, total: 5 });
    }

    #[test]
    fn test_tally_buckets_always_sum_to_total() {
        use GoalStatus::*;
        let collections: [&[GoalStatus]; 4] = [
            &[],
            &[Cancelled],
            &[Cancelled, Completed, InProgress, Pending, Cancelled],
            &[Completed, Completed, Completed],
        ];
        for statuses in collections {
            let t = goal_tally(statuses);
            assert_eq!(t.active + t.completed + t.other, t.total);
            assert_eq!(t.total, statuses.len() as i64);
        }
        assert!(status_histogram(&[]).is_empty());
    }
}
