// src/networking/mod.rs
//! Connection-path discovery over the user's relationship graph

pub mod connection_path;

pub use connection_path::{describe_path, find_connection_path, ConnectionGraph, MAX_DEGREE};
