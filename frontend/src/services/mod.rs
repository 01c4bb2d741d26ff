//! Backend communication services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`api`] - REST client for the lead backend

pub mod api;

pub use api::*;
