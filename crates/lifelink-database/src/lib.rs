//! # lifelink-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all LifeLink entities. The pool is always
//! dependency-injected; nothing in this crate holds global state.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
