use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("DATABASE_URL environment variable is not set")]
    MissingDatabaseUrl,
    #[error("Invalid value `{value}` for `{key}`")]
    InvalidConfig { key: &'static str, value: String },
    #[error("Invalid role: `{0}`, possible values are: admin, student and teacher")]
    InvalidRole(String),
    #[error("Failed to hash password for user `{0}`")]
    PasswordHash(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl AppError {
    pub fn code(&self) -> String {
        match self {
            AppError::MissingDatabaseUrl => String::from("MissingDatabaseUrl"),
            AppError::InvalidConfig { key: _, value: _ } => String::from("InvalidConfig"),
            AppError::InvalidRole(_) => String::from("InvalidRole"),
            AppError::PasswordHash(_) => String::from("PasswordHash"),
            AppError::Database(_) => String::from("DatabaseError"),
            AppError::Migration(_) => String::from("MigrationError"),
        }
    }
}
