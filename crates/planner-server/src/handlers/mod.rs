//! Route handlers.

pub mod categories;
pub mod statistics;
pub mod tasks;
