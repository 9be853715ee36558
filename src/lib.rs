//! promptdock - single-resource HTTP facade over a prompt-document store
//!
//! One method-polymorphic route maps HTTP methods onto CRUD operations
//! against an opaque document store; every response is a uniform JSON
//! envelope on transport status 200.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod gateway;
pub mod server;
pub mod store;
