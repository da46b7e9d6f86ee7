// ABOUTME: Route module organization for the DiabEat HTTP endpoints
// ABOUTME: Provides route definitions organized by domain with thin handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DiabEat

//! Route module for the DiabEat server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the engine and validation layers.

/// Health check and system status routes
pub mod health;
/// Diet recommendation routes
pub mod recommend;

/// Health check route handlers
pub use health::HealthRoutes;
/// Recommendation route handlers
pub use recommend::RecommendationRoutes;
/// Successful recommendation response envelope
pub use recommend::RecommendResponse;
