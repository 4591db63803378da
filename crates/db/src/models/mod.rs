//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! JSON field names are camelCase (`subCat1`, `createdAt`, ...) to preserve
//! the wire contract the front-end was written against.

pub mod activity;
pub mod activity_log;
pub mod user;
