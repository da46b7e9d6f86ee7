// ABOUTME: Configuration module organization for the DiabEat server
// ABOUTME: Groups environment-driven runtime configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DiabEat

//! Configuration management

/// Environment-based server configuration
pub mod environment;

pub use environment::ServerConfig;
