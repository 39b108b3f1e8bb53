//! Core sorting functionality
//!
//! The batch sorter is the only part of the service with a concurrency
//! contract; everything under `server` is plumbing around it.

pub mod sorter;
