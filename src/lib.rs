// ABOUTME: Main library entry point for the DiabEat diet recommendation server
// ABOUTME: Provides intake validation, the recommendation engine, and REST API routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DiabEat

#![deny(unsafe_code)]

//! # DiabEat Server
//!
//! A small HTTP service that collects a handful of health metrics (age,
//! blood sugar, blood pressure, weight, height, diet preference) and returns
//! a rule-based diet recommendation together with a BMI calculation.
//!
//! ## Features
//!
//! - **Chat-style intake page**: a static single-page client served at `/`
//! - **Recommendation API**: `POST /api/recommend` mapping the validated
//!   profile to a health note and a fixed meal triple
//! - **BMI calculation**: weight(kg) / height(m)², rounded to 2 decimals
//! - **Health check**: `GET /api/health` for monitoring
//!
//! ## Architecture
//!
//! Each request is independent, stateless, and synchronous. The router is an
//! explicit value constructed at startup; there is no process-wide mutable
//! state.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use diabeat_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("DiabEat server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Configuration management loaded from the environment
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Intake request payload and field validation
pub mod intake;

/// Production logging and structured output
pub mod logging;

/// Common data models for health profiles
pub mod models;

/// Rule-based diet recommendation engine
pub mod recommendations;

/// `HTTP` routes for the recommendation API
pub mod routes;

/// HTTP server assembly and lifecycle
pub mod server;
