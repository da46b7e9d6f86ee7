// ABOUTME: Integration tests for the assembled application router
// ABOUTME: Verifies API routes and the static intake page coexist on one router
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright (c) 2025 DiabEat

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! Integration tests for the full router built by `HttpServer`

mod helpers;

use diabeat_server::config::environment::{Environment, LogLevel, ServerConfig};
use diabeat_server::server::HttpServer;
use helpers::axum_test::AxumTestRequest;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

fn test_router() -> axum::Router {
    let config = ServerConfig {
        http_port: 8080,
        host: "127.0.0.1".into(),
        static_dir: PathBuf::from("static"),
        log_level: LogLevel::Info,
        environment: Environment::Testing,
    };
    HttpServer::new(Arc::new(config)).router()
}

#[tokio::test]
async fn test_root_serves_intake_page() {
    let response = AxumTestRequest::get("/").send(test_router()).await;

    assert_eq!(response.status(), 200);

    let page = response.text();
    assert!(page.contains("DiabEat"));
    assert!(page.contains("Please provide your <strong>age</strong>"));
}

#[tokio::test]
async fn test_api_routes_reachable_through_full_router() {
    let health = AxumTestRequest::get("/api/health").send(test_router()).await;
    assert_eq!(health.status(), 200);

    let recommend = AxumTestRequest::post("/api/recommend")
        .json(&json!({
            "age": 35,
            "sugar": 110,
            "bp": "normal",
            "weight": 70,
            "height": 170,
            "preference": "veg"
        }))
        .send(test_router())
        .await;
    assert_eq!(recommend.status(), 200);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let response = AxumTestRequest::get("/no/such/page").send(test_router()).await;
    assert_eq!(response.status(), 404);
}
