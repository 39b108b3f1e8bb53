//! HTTP route modules
//!
//! The service exposes exactly two routes, both in [`sort`].

pub mod sort;

pub use sort::configure_routes;
