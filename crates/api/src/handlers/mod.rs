//! Request handlers: extract input, call one repository operation, respond.

pub mod activities;
pub mod logs;
pub mod users;
