//! Adapter implementations for the embedded database engine

pub mod sqlite;
