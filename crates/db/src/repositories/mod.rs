//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod activity_log_repo;
pub mod activity_repo;
pub mod user_repo;

pub use activity_log_repo::ActivityLogRepo;
pub use activity_repo::ActivityRepo;
pub use user_repo::UserRepo;
