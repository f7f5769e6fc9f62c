pub mod course_repo;
pub mod registration_repo;
pub mod user_repo;
