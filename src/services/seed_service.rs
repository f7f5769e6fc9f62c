use std::fmt::Display;

use crate::{
    auth::hasher::hash_password,
    errors::AppError,
    models::{
        role::Role,
        seed_data::{COURSES, COURSES_PER_STUDENT, SeedCourse, SeedUser, USERS},
    },
    repositories::{
        course_repo::{self, DbCourse, NewDbCourse},
        registration_repo::{self, NewDbRegistration},
        user_repo::{self, DbUser, NewDbUser},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    Created(u64),
    Skipped,
    MissingPrerequisites,
}

impl Display for SeedOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedOutcome::Created(count) => write!(f, "created {}", count),
            SeedOutcome::Skipped => write!(f, "skipped"),
            SeedOutcome::MissingPrerequisites => write!(f, "missing prerequisites"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct SeedReport {
    pub users: SeedOutcome,
    pub courses: SeedOutcome,
    pub registrations: SeedOutcome,
}

pub async fn seed_database(pool: &sqlx::SqlitePool) -> Result<SeedReport, AppError> {
    tracing::info!("Seeding database...");
    let users = seed_users(pool, USERS).await?;
    let courses = seed_courses(pool, COURSES).await?;
    let registrations = seed_registrations(pool).await?;
    tracing::info!("Database seeding complete");
    Ok(SeedReport {
        users,
        courses,
        registrations,
    })
}

pub async fn seed_users(
    pool: &sqlx::SqlitePool,
    seed_users: &[SeedUser],
) -> Result<SeedOutcome, AppError> {
    if user_repo::count_users(pool).await? > 0 {
        tracing::warn!("Users already exist, skipping creation");
        return Ok(SeedOutcome::Skipped);
    }
    tracing::info!("Creating users...");
    let users = seed_users
        .iter()
        .map(|user| -> Result<NewDbUser, AppError> {
            Ok(NewDbUser {
                name: user.name.to_string(),
                email: user.email.to_string(),
                role: user.role,
                password_hash: hash_password(user.email, user.password)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let ids = user_repo::create_users(pool, &users).await?;
    tracing::info!("Created {} users", ids.len());
    Ok(SeedOutcome::Created(ids.len() as u64))
}

pub async fn seed_courses(
    pool: &sqlx::SqlitePool,
    seed_courses: &[SeedCourse],
) -> Result<SeedOutcome, AppError> {
    if course_repo::count_courses(pool).await? > 0 {
        tracing::warn!("Courses already exist, skipping creation");
        return Ok(SeedOutcome::Skipped);
    }
    tracing::info!("Creating courses...");
    let courses: Vec<NewDbCourse> = seed_courses
        .iter()
        .map(|course| NewDbCourse {
            title: course.title.to_string(),
            description: course.description.to_string(),
        })
        .collect();
    let ids = course_repo::create_courses(pool, &courses).await?;
    tracing::info!("Created {} courses", ids.len());
    Ok(SeedOutcome::Created(ids.len() as u64))
}

pub async fn seed_registrations(pool: &sqlx::SqlitePool) -> Result<SeedOutcome, AppError> {
    if registration_repo::count_registrations(pool).await? > 0 {
        tracing::warn!("Registrations already exist, skipping creation");
        return Ok(SeedOutcome::Skipped);
    }
    tracing::info!("Creating registrations...");
    let students = user_repo::list_users_by_role(pool, Role::Student).await?;
    let courses = course_repo::list_courses(pool).await?;
    if students.is_empty() || courses.is_empty() {
        tracing::error!(
            "Missing users or courses, cannot create registrations (students: {}, courses: {})",
            students.len(),
            courses.len()
        );
        return Ok(SeedOutcome::MissingPrerequisites);
    }
    let registrations = assign_courses(&students, &courses);
    let inserted = registration_repo::create_registrations(pool, &registrations).await?;
    tracing::info!("Created {} registrations", inserted);
    Ok(SeedOutcome::Created(inserted))
}

/// Student `i` gets a window of consecutive courses starting at `i mod n`,
/// wrapping around to the first course. The window never repeats a course,
/// so it shrinks when there are fewer courses than `COURSES_PER_STUDENT`.
pub fn assign_courses(students: &[DbUser], courses: &[DbCourse]) -> Vec<NewDbRegistration> {
    if courses.is_empty() {
        return Vec::new();
    }
    let window = COURSES_PER_STUDENT.min(courses.len());
    students
        .iter()
        .enumerate()
        .flat_map(|(i, student)| {
            let start = i % courses.len();
            (0..window).map(move |offset| NewDbRegistration {
                user_id: student.id,
                course_id: courses[(start + offset) % courses.len()].id,
            })
        })
        .collect()
}
