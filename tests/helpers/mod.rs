// ABOUTME: Shared test helpers for HTTP integration tests
// ABOUTME: Re-exports the axum test harness used by the route test suites

pub mod axum_test;
