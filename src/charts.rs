//! Server-side chart geometry. Templates draw the SVG; this module only
//! turns rows into coordinates.

use serde::Serialize;

use crate::models::metric::PerformanceMetric;

pub const CHART_WIDTH: f64 = 600.0;
pub const CHART_HEIGHT: f64 = 220.0;
const PADDING: f64 = 30.0;
const MAX_SCORE: f64 = 100.0;

#[derive(Debug, Clone, Serialize)]
pub struct LineSeries {
    pub name: &'static str,
    pub css_class: &'static str,
    /// SVG `points` attribute: "x1,y1 x2,y2 ...".
    pub points: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisLabel {
    pub x: String,
    pub text: String,
}

/// Four-series line chart of metric scores over time.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LineChart {
    pub labels: Vec<AxisLabel>,
    pub series: Vec<LineSeries>,
}

type ScoreFn = fn(&PerformanceMetric) -> Option<i32>;

fn productivity(m: &PerformanceMetric) -> Option<i32> {
    m.productivity_score
}

fn quality(m: &PerformanceMetric) -> Option<i32> {
    m.quality_score
}

fn attendance(m: &PerformanceMetric) -> Option<i32> {
    m.attendance_score
}

fn collaboration(m: &PerformanceMetric) -> Option<i32> {
    m.collaboration_score
}

const SERIES: [(&str, &str, ScoreFn); 4] = [
    ("Productivity", "series-productivity", productivity),
    ("Quality", "series-quality", quality),
    ("Attendance", "series-attendance", attendance),
    ("Collaboration", "series-collaboration", collaboration),
];

fn x_at(index: usize, count: usize) -> f64 {
    let span = CHART_WIDTH - 2.0 * PADDING;
    if count <= 1 {
        PADDING + span / 2.0
    } else {
        PADDING + span * index as f64 / (count - 1) as f64
    }
}

fn y_for(score: i32) -> f64 {
    let clamped = f64::from(score).clamp(0.0, MAX_SCORE);
    let span = CHART_HEIGHT - 2.0 * PADDING;
    CHART_HEIGHT - PADDING - span * clamped / MAX_SCORE
}

impl LineChart {
    /// Metrics are expected oldest first. Missing scores are skipped, so a
    /// series may have fewer points than there are dates.
    pub fn from_metrics(metrics: &[PerformanceMetric]) -> Self {
        if metrics.is_empty() {
            return Self::default();
        }
        let count = metrics.len();

        let labels = metrics
            .iter()
            .enumerate()
            .map(|(i, m)| AxisLabel {
                x: format!("{:.1}", x_at(i, count)),
                text: m.date_short(),
            })
            .collect();

        let series = SERIES
            .iter()
            .map(|&(name, css_class, score)| {
                let points = metrics
                    .iter()
                    .enumerate()
                    .filter_map(|(i, m)| score(m).map(|s| format!("{:.1},{:.1}", x_at(i, count), y_for(s))))
                    .collect::<Vec<_>>()
                    .join(" ");
                LineSeries { name, css_class, points }
            })
            .collect();

        Self { labels, series }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(date: &str, productivity: Option<i32>, quality: Option<i32>) -> PerformanceMetric {
        PerformanceMetric {
            id: 1,
            employee_id: 1,
            metric_date: date.to_string(),
            productivity_score: productivity,
            quality_score: quality,
            attendance_score: Some(100),
            collaboration_score: Some(0),
            notes: None,
        }
    }

    #[test]
    fn test_empty_metrics_give_empty_chart() {
        let chart = LineChart::from_metrics(&[]);
        assert!(chart.is_empty());
        assert!(chart.series.is_empty());
    }

    #[test]
    fn test_points_span_the_plot_area() {
        let chart = LineChart::from_metrics(&[
            metric("2026-01-01", Some(50), None),
            metric("2026-01-08", Some(100), Some(80)),
        ]);
        assert_eq!(chart.labels.len(), 2);
        assert_eq!(chart.labels[0].text, "Jan 1");
        assert_eq!(chart.labels[1].x, "570.0");

        let productivity = &chart.series[0];
        assert_eq!(productivity.name, "Productivity");
        assert_eq!(productivity.points, "30.0,110.0 570.0,30.0");

        // Quality is missing on the first date, so only one point.
        assert_eq!(chart.series[1].points, "570.0,62.0");
        // 100 sits on the top edge, 0 on the bottom edge.
        assert!(chart.series[2].points.ends_with(",30.0"));
        assert!(chart.series[3].points.ends_with(",190.0"));
    }

    #[test]
    fn test_single_metric_is_centered() {
        let chart = LineChart::from_metrics(&[metric("2026-02-01", Some(10), Some(10))]);
        assert_eq!(chart.labels[0].x, "300.0");
    }
}
