//! # Web Server Implementation
//!
//! This module contains the implementation of the beemap web server, which
//! serves the dashboard page and the JSON update endpoint behind it.
//!
//! ## Submodules
//! - `handlers`: Contains the actix-web request handlers for the routes.

/// Request handlers for the web server's routes.
pub mod handlers;
