//! Application configuration.
//!
//! Centralized configuration for the Leadboard frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Backend API base URL.
///
/// The lead backend exposing the REST endpoints the dashboard consumes.
pub const BACKEND_URL: &str = "http://localhost:8000";

/// Application name, shown in the header logo.
pub const APP_NAME: &str = "Leadboard";
