use sqlx::prelude::FromRow;

#[derive(Debug, FromRow)]
pub struct DbCourse {
    pub id: i64,
    pub title: String,
    pub description: String,
}

pub struct NewDbCourse {
    pub title: String,
    pub description: String,
}

pub async fn count_courses(pool: &sqlx::SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar("select count(*) from courses")
        .fetch_one(pool)
        .await
}

pub async fn create_courses(
    pool: &sqlx::SqlitePool,
    courses: &[NewDbCourse],
) -> sqlx::Result<Vec<i64>> {
    let mut tx = pool.begin().await?;
    let mut ids = Vec::with_capacity(courses.len());
    for course in courses {
        let result = sqlx::query("insert into courses (title, description) values (?1, ?2)")
            .bind(&course.title)
            .bind(&course.description)
            .execute(&mut *tx)
            .await?;
        ids.push(result.last_insert_rowid());
    }
    tx.commit().await?;
    Ok(ids)
}

pub async fn list_courses(pool: &sqlx::SqlitePool) -> sqlx::Result<Vec<DbCourse>> {
    sqlx::query_as("select * from courses order by id")
        .fetch_all(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test]
    async fn test_create_courses(pool: sqlx::SqlitePool) {
        let courses = vec![
            NewDbCourse {
                title: "Rust".to_string(),
                description: "Ownership and borrowing.".to_string(),
            },
            NewDbCourse {
                title: "SQL".to_string(),
                description: "Joins and indexes.".to_string(),
            },
        ];
        let ids = create_courses(&pool, &courses)
            .await
            .expect("failed to create courses");
        assert_eq!(ids.len(), 2);
        assert_eq!(count_courses(&pool).await.unwrap(), 2);
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("create_courses")))]
    async fn test_list_courses(pool: sqlx::SqlitePool) {
        let courses = list_courses(&pool).await.expect("failed to list courses");
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].title, String::from("Compilers"));
        assert!(courses[0].id < courses[1].id);
    }
}
