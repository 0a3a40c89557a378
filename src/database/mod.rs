pub mod manager;
pub mod models;
pub mod repository;
pub mod schema;
pub mod seed;

pub use manager::{DatabaseError, DatabaseManager};
