// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Groups environment lookups, validation limits, and defaults by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DiabEat

//! Constants module
//!
//! Application constants organized by domain: environment-based lookups,
//! intake validation limits, and server defaults.

use std::env;

/// Environment-based configuration
pub mod env_config {
    use super::env;

    /// Get HTTP server port from environment or default
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(super::ports::DEFAULT_HTTP_PORT)
    }

    /// Get bind host from environment or default
    #[must_use]
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| super::defaults::DEFAULT_HOST.to_string())
    }

    /// Get static asset directory from environment or default
    #[must_use]
    pub fn static_dir() -> String {
        env::var("STATIC_DIR").unwrap_or_else(|_| super::defaults::DEFAULT_STATIC_DIR.to_string())
    }

    /// Get log level from environment or default
    #[must_use]
    pub fn log_level() -> String {
        env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string())
    }
}

/// Network ports
pub mod ports {
    /// Default HTTP API port
    pub const DEFAULT_HTTP_PORT: u16 = 8080;
}

/// Server defaults
pub mod defaults {
    /// Default bind host
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default static asset directory (the intake page lives here)
    pub const DEFAULT_STATIC_DIR: &str = "static";
}

/// Intake validation limits
pub mod limits {
    /// Minimum accepted age (years)
    pub const AGE_MIN: u32 = 1;
    /// Maximum accepted age (years)
    pub const AGE_MAX: u32 = 120;
    /// Minimum accepted blood sugar level (mg/dL)
    pub const SUGAR_MIN: u32 = 50;
    /// Maximum accepted blood sugar level (mg/dL)
    pub const SUGAR_MAX: u32 = 500;
    /// Minimum accepted weight (kg)
    pub const WEIGHT_MIN: f64 = 20.0;
    /// Maximum accepted weight (kg)
    pub const WEIGHT_MAX: f64 = 300.0;
    /// Minimum accepted height (cm)
    pub const HEIGHT_MIN: f64 = 100.0;
    /// Maximum accepted height (cm)
    pub const HEIGHT_MAX: f64 = 250.0;
}

/// Service names for structured logging
pub mod service_names {
    /// Canonical service name
    pub const DIABEAT_SERVER: &str = "diabeat-server";
}
