use sqlx::prelude::FromRow;

#[derive(Debug, FromRow)]
pub struct DbRegistration {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewDbRegistration {
    pub user_id: i64,
    pub course_id: i64,
}

pub async fn count_registrations(pool: &sqlx::SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar("select count(*) from registrations")
        .fetch_one(pool)
        .await
}

pub async fn create_registrations(
    pool: &sqlx::SqlitePool,
    registrations: &[NewDbRegistration],
) -> sqlx::Result<u64> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;
    for registration in registrations {
        let result = sqlx::query("insert into registrations (user_id, course_id) values (?1, ?2)")
            .bind(registration.user_id)
            .bind(registration.course_id)
            .execute(&mut *tx)
            .await?;
        inserted += result.rows_affected();
    }
    tx.commit().await?;
    Ok(inserted)
}

pub async fn list_registrations(pool: &sqlx::SqlitePool) -> sqlx::Result<Vec<DbRegistration>> {
    sqlx::query_as("select id, user_id, course_id from registrations order by id")
        .fetch_all(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(fixtures(
        path = "../../fixtures",
        scripts("create_users", "create_courses")
    ))]
    async fn test_create_registrations(pool: sqlx::SqlitePool) {
        let registrations = vec![
            NewDbRegistration {
                user_id: 2,
                course_id: 1,
            },
            NewDbRegistration {
                user_id: 2,
                course_id: 2,
            },
        ];
        let inserted = create_registrations(&pool, &registrations)
            .await
            .expect("failed to register user");
        assert_eq!(inserted, 2);
        let stored = list_registrations(&pool).await.unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!((stored[1].user_id, stored[1].course_id), (2, 2));
    }

    #[sqlx::test(fixtures(
        path = "../../fixtures",
        scripts("create_users", "create_courses", "create_registrations")
    ))]
    async fn test_duplicate_registration_rolls_back(pool: sqlx::SqlitePool) {
        let registrations = vec![
            NewDbRegistration {
                user_id: 1,
                course_id: 2,
            },
            NewDbRegistration {
                user_id: 2,
                course_id: 1,
            },
        ];
        assert!(create_registrations(&pool, &registrations).await.is_err());
        assert_eq!(count_registrations(&pool).await.unwrap(), 1);
    }
}
