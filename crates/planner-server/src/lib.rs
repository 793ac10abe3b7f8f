//! # Planner server
//!
//! REST surface for the planner core: the route table, handlers, and the
//! HTTP error mapping. The binary in `src/main.rs` wires a file-backed
//! store into the router.

pub mod error;
pub mod handlers;
pub mod server;

pub use server::{build_router, App, SharedApp};
