//! HTTP API: invoice generation service.

pub mod app;
pub mod artifact;
pub mod config;
pub mod context;
pub mod middleware;
