//! Estante Server Library
//!
//! This module exports the server components for testing and reuse.

pub mod demo;
pub mod handlers;
pub mod persist;
pub mod routes;
pub mod state;
