use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::auth::password;
use crate::errors::AppError;
use crate::models::evaluation::{self, NewEvaluation};
use crate::models::feedback::{self, FeedbackType, NewFeedback};
use crate::models::goal::{self, GoalStatus, NewGoal};
use crate::models::metric::{self, NewMetric};
use crate::models::profile::{self, NewProfile, Role};

/// Password given to every seeded demo profile.
pub const DEMO_PASSWORD: &str = "demo1234";

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

fn demo_profile(full_name: &str, email: &str, role: Role, position: &str, hash: &str) -> NewProfile {
    NewProfile {
        full_name: full_name.to_string(),
        email: email.to_string(),
        role,
        department: Some("Engineering".to_string()),
        position: Some(position.to_string()),
        password_hash: Some(hash.to_string()),
    }
}

/// Populate an empty database with one manager, two employees and a little
/// history so both dashboards have something to show. Does nothing when any
/// profile exists.
pub async fn seed_demo(pool: &PgPool) -> Result<(), AppError> {
    if profile::count_all(pool).await? > 0 {
        log::info!("Profiles present, skipping demo seed");
        return Ok(());
    }

    let hash = password::hash_password(DEMO_PASSWORD)?;
    let manager_id = profile::create(
        pool,
        &demo_profile("Morgan Reyes", "manager@example.com", Role::Manager, "Engineering Manager", &hash),
    )
    .await?;
    let ada = profile::create(
        pool,
        &demo_profile("Ada Lovelace", "ada@example.com", Role::Employee, "Senior Engineer", &hash),
    )
    .await?;
    let linus = profile::create(
        pool,
        &demo_profile("Linus Park", "linus@example.com", Role::Employee, "Engineer", &hash),
    )
    .await?;

    let goals = [
        (ada, "Ship the billing rewrite", GoalStatus::InProgress, 60, false),
        (ada, "Mentor a new hire", GoalStatus::Pending, 0, true),
        (ada, "Finish the Postgres course", GoalStatus::Completed, 100, true),
        (linus, "Improve test coverage", GoalStatus::InProgress, 35, false),
    ];
    for (employee_id, title, status, progress, is_personal) in goals {
        goal::create(
            pool,
            &NewGoal {
                title: title.to_string(),
                description: None,
                target_date: "2026-12-31".to_string(),
                status,
                progress,
                is_personal,
                employee_id,
                manager_id: if is_personal { None } else { Some(manager_id) },
            },
        )
        .await?;
    }

    feedback::create(
        pool,
        &NewFeedback {
            title: "Great incident write-up".to_string(),
            content: "The postmortem was clear and actionable.".to_string(),
            feedback_type: FeedbackType::Positive,
            rating: Some(5),
            employee_id: ada,
            manager_id,
        },
    )
    .await?;
    feedback::create(
        pool,
        &NewFeedback {
            title: "Smaller pull requests".to_string(),
            content: "Splitting changes up would speed up reviews.".to_string(),
            feedback_type: FeedbackType::Constructive,
            rating: Some(3),
            employee_id: ada,
            manager_id,
        },
    )
    .await?;

    let periods = [("2026-01-01", "2026-03-31", 4), ("2026-04-01", "2026-06-30", 5)];
    for (start, end, rating) in periods {
        evaluation::create(
            pool,
            &NewEvaluation {
                employee_id: ada,
                manager_id,
                period_start: start.to_string(),
                period_end: end.to_string(),
                overall_rating: rating,
                technical_skills: 5,
                communication: 4,
                teamwork: 4,
                leadership: 3,
                initiative: rating,
                strengths: Some("Deep system knowledge".to_string()),
                areas_for_improvement: Some("Delegation".to_string()),
                comments: None,
            },
        )
        .await?;
    }

    for (i, date) in ["2026-06-01", "2026-07-01", "2026-08-01", "2026-09-01"].into_iter().enumerate() {
        let step = i as i32 * 5;
        metric::create(
            pool,
            &NewMetric {
                employee_id: ada,
                metric_date: date.to_string(),
                productivity_score: Some(70 + step),
                quality_score: Some(75 + step),
                attendance_score: Some(95),
                collaboration_score: Some(80 + step / 2),
                notes: None,
            },
        )
        .await?;
    }

    log::info!("Seeded demo data (password '{DEMO_PASSWORD}')");
    Ok(())
}
