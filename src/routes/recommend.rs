// ABOUTME: Diet recommendation route handlers for the intake API
// ABOUTME: Validates the request body and delegates to the recommendation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DiabEat

//! Diet recommendation routes
//!
//! `POST /api/recommend` takes the six required intake fields as JSON and
//! returns the BMI, health note, and meal triple inside a
//! `{"status": "success", "data": {...}}` envelope.

use crate::{
    errors::AppError,
    intake::RecommendRequest,
    recommendations::{self, Recommendation},
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::debug;

/// Successful response envelope
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub status: &'static str,
    pub data: Recommendation,
}

/// Recommendation routes implementation
pub struct RecommendationRoutes;

impl RecommendationRoutes {
    /// Create all recommendation routes
    pub fn routes() -> Router {
        Router::new().route("/api/recommend", post(Self::handle_recommend))
    }

    /// Handle a recommendation request
    async fn handle_recommend(
        Json(request): Json<RecommendRequest>,
    ) -> Result<Response, AppError> {
        let profile = request.validate()?;
        let recommendation = recommendations::generate(&profile);

        debug!(
            profile.sugar = profile.sugar,
            profile.preference = %profile.preference,
            recommendation.bmi = recommendation.bmi,
            "generated diet recommendation"
        );

        Ok((
            StatusCode::OK,
            Json(RecommendResponse {
                status: "success",
                data: recommendation,
            }),
        )
            .into_response())
    }
}
