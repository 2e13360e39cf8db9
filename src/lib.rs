//! SIT test case BFF library.
//!
//! Turns test cases produced by the external generation service into
//! downloadable Excel workbooks, and exposes the HTTP API that does it.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
