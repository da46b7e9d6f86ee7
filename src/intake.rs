// ABOUTME: Intake request payload and field validation for the recommendation API
// ABOUTME: Turns an untrusted JSON body into a validated HealthProfile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DiabEat

//! Intake validation
//!
//! [`RecommendRequest`] mirrors the JSON body of `POST /api/recommend` with
//! every field optional, so a missing field can be rejected with a message
//! naming it rather than an opaque deserialization error. Fields are checked
//! in the intake flow's prompt order: age, sugar, bp, weight, height,
//! preference.

use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use crate::models::{BloodPressureStatus, DiabetesType, DietPreference, HealthProfile};
use serde::Deserialize;

/// Raw recommendation request body, prior to validation
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RecommendRequest {
    pub age: Option<u32>,
    pub sugar: Option<u32>,
    pub diabetes_type: Option<DiabetesType>,
    pub bp: Option<BloodPressureStatus>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub preference: Option<DietPreference>,
}

impl RecommendRequest {
    /// Validate the request into a [`HealthProfile`]
    ///
    /// # Errors
    ///
    /// Returns a 400-class [`AppError`] when a required field is absent
    /// (`Missing field: <name>`) or when a value falls outside its
    /// documented range.
    pub fn validate(self) -> AppResult<HealthProfile> {
        let age = self.age.ok_or_else(|| AppError::missing_field("age"))?;
        let sugar = self.sugar.ok_or_else(|| AppError::missing_field("sugar"))?;
        let bp = self.bp.ok_or_else(|| AppError::missing_field("bp"))?;
        let weight = self
            .weight
            .ok_or_else(|| AppError::missing_field("weight"))?;
        let height = self
            .height
            .ok_or_else(|| AppError::missing_field("height"))?;
        let preference = self
            .preference
            .ok_or_else(|| AppError::missing_field("preference"))?;

        if !(limits::AGE_MIN..=limits::AGE_MAX).contains(&age) {
            return Err(AppError::out_of_range(format!(
                "age must be between {} and {} years",
                limits::AGE_MIN,
                limits::AGE_MAX
            )));
        }

        if !(limits::SUGAR_MIN..=limits::SUGAR_MAX).contains(&sugar) {
            return Err(AppError::out_of_range(format!(
                "sugar must be between {} and {} mg/dL",
                limits::SUGAR_MIN,
                limits::SUGAR_MAX
            )));
        }

        if !(limits::WEIGHT_MIN..=limits::WEIGHT_MAX).contains(&weight) {
            return Err(AppError::out_of_range(format!(
                "weight must be between {} and {} kg",
                limits::WEIGHT_MIN,
                limits::WEIGHT_MAX
            )));
        }

        if !(limits::HEIGHT_MIN..=limits::HEIGHT_MAX).contains(&height) {
            return Err(AppError::out_of_range(format!(
                "height must be between {} and {} cm",
                limits::HEIGHT_MIN,
                limits::HEIGHT_MAX
            )));
        }

        Ok(HealthProfile {
            age,
            sugar,
            diabetes_type: self.diabetes_type,
            bp,
            weight,
            height,
            preference,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn full_request() -> RecommendRequest {
        RecommendRequest {
            age: Some(35),
            sugar: Some(110),
            diabetes_type: None,
            bp: Some(BloodPressureStatus::Normal),
            weight: Some(70.0),
            height: Some(170.0),
            preference: Some(DietPreference::Veg),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let profile = full_request().validate().unwrap();
        assert_eq!(profile.age, 35);
        assert_eq!(profile.sugar, 110);
        assert_eq!(profile.preference, DietPreference::Veg);
        assert!(profile.diabetes_type.is_none());
    }

    #[test]
    fn test_each_missing_field_is_named() {
        let cases: Vec<(&str, RecommendRequest)> = vec![
            (
                "age",
                RecommendRequest {
                    age: None,
                    ..full_request()
                },
            ),
            (
                "sugar",
                RecommendRequest {
                    sugar: None,
                    ..full_request()
                },
            ),
            (
                "bp",
                RecommendRequest {
                    bp: None,
                    ..full_request()
                },
            ),
            (
                "weight",
                RecommendRequest {
                    weight: None,
                    ..full_request()
                },
            ),
            (
                "height",
                RecommendRequest {
                    height: None,
                    ..full_request()
                },
            ),
            (
                "preference",
                RecommendRequest {
                    preference: None,
                    ..full_request()
                },
            ),
        ];

        for (name, request) in cases {
            let error = request.validate().unwrap_err();
            assert_eq!(error.code, ErrorCode::MissingRequiredField);
            assert_eq!(error.message, format!("Missing field: {name}"));
        }
    }

    #[test]
    fn test_diabetes_type_is_not_required() {
        let mut request = full_request();
        request.diabetes_type = Some(DiabetesType::Type2);
        let profile = request.validate().unwrap();
        assert_eq!(profile.diabetes_type, Some(DiabetesType::Type2));
    }

    #[test]
    fn test_missing_fields_checked_in_prompt_order() {
        // Everything absent: the first prompt's field wins.
        let error = RecommendRequest::default().validate().unwrap_err();
        assert_eq!(error.message, "Missing field: age");
    }

    #[test]
    fn test_age_out_of_range() {
        let mut request = full_request();
        request.age = Some(0);
        let error = request.validate().unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.message, "age must be between 1 and 120 years");

        let mut request = full_request();
        request.age = Some(121);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_sugar_out_of_range() {
        let mut request = full_request();
        request.sugar = Some(49);
        assert_eq!(
            request.validate().unwrap_err().message,
            "sugar must be between 50 and 500 mg/dL"
        );

        let mut request = full_request();
        request.sugar = Some(501);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_weight_and_height_bounds_inclusive() {
        let mut request = full_request();
        request.weight = Some(20.0);
        request.height = Some(250.0);
        assert!(request.validate().is_ok());

        let mut request = full_request();
        request.weight = Some(19.9);
        assert_eq!(
            request.validate().unwrap_err().message,
            "weight must be between 20 and 300 kg"
        );

        let mut request = full_request();
        request.height = Some(250.1);
        assert_eq!(
            request.validate().unwrap_err().message,
            "height must be between 100 and 250 cm"
        );
    }
}
