pub mod role;
pub mod seed_data;
