use chrono::Utc;
use sqlx::FromRow;

use crate::{errors::AppError, models::role::Role};

#[derive(Debug, FromRow)]
pub struct DbUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub password: String,
    pub created_at: i64,
}

impl DbUser {
    pub fn role(&self) -> Result<Role, AppError> {
        Role::try_from(self.role.as_str())
    }
}

pub struct NewDbUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password_hash: String,
}

pub async fn count_users(pool: &sqlx::SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar("select count(*) from users")
        .fetch_one(pool)
        .await
}

pub async fn create_users(pool: &sqlx::SqlitePool, users: &[NewDbUser]) -> sqlx::Result<Vec<i64>> {
    let now = Utc::now();
    let mut tx = pool.begin().await?;
    let mut ids = Vec::with_capacity(users.len());
    for user in users {
        let result = sqlx::query(
            "insert into users (name, email, role, password, created_at) values (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.role.to_string())
        .bind(&user.password_hash)
        .bind(now.timestamp())
        .execute(&mut *tx)
        .await?;
        ids.push(result.last_insert_rowid());
    }
    tx.commit().await?;
    Ok(ids)
}

pub async fn list_users_by_role(pool: &sqlx::SqlitePool, role: Role) -> sqlx::Result<Vec<DbUser>> {
    sqlx::query_as("select * from users where role = ?1 order by id")
        .bind(role.to_string())
        .fetch_all(pool)
        .await
}

pub async fn get_user_by_email(
    pool: &sqlx::SqlitePool,
    email: &str,
) -> sqlx::Result<Option<DbUser>> {
    sqlx::query_as("select * from users where email = ?1")
        .bind(email)
        .fetch_optional(pool)
        .await
}
