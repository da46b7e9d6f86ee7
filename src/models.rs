// ABOUTME: Common data models for the DiabEat recommendation API
// ABOUTME: Defines the transient health profile and its enumerated fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DiabEat

//! Domain models
//!
//! One transient value object, [`HealthProfile`], created from a validated
//! request, consumed once, and discarded. Nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Diabetes type as reported by the user
///
/// Wire spellings keep the original intake vocabulary (`"type 1"`,
/// `"type 2"`, `"gestational"`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DiabetesType {
    /// Type 1 diabetes
    #[serde(rename = "type 1")]
    Type1,
    /// Type 2 diabetes
    #[serde(rename = "type 2")]
    Type2,
    /// Gestational diabetes
    #[serde(rename = "gestational")]
    Gestational,
}

impl std::fmt::Display for DiabetesType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiabetesType::Type1 => write!(f, "type 1"),
            DiabetesType::Type2 => write!(f, "type 2"),
            DiabetesType::Gestational => write!(f, "gestational"),
        }
    }
}

/// Qualitative blood pressure status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BloodPressureStatus {
    Normal,
    High,
    Low,
}

impl std::fmt::Display for BloodPressureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BloodPressureStatus::Normal => write!(f, "normal"),
            BloodPressureStatus::High => write!(f, "high"),
            BloodPressureStatus::Low => write!(f, "low"),
        }
    }
}

/// Dietary preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DietPreference {
    /// Vegetarian
    Veg,
    /// Non-vegetarian
    Nonveg,
}

impl std::fmt::Display for DietPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DietPreference::Veg => write!(f, "veg"),
            DietPreference::Nonveg => write!(f, "nonveg"),
        }
    }
}

/// Validated health metrics for a single recommendation request
///
/// `diabetes_type` is optional: the API's meal tables never consult it, but
/// it is accepted and validated when the client supplies one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthProfile {
    /// Age in years (1-120)
    pub age: u32,
    /// Blood sugar level in mg/dL (50-500)
    pub sugar: u32,
    /// Diabetes type, when reported
    pub diabetes_type: Option<DiabetesType>,
    /// Blood pressure status
    pub bp: BloodPressureStatus,
    /// Weight in kg (20-300)
    pub weight: f64,
    /// Height in cm (100-250)
    pub height: f64,
    /// Dietary preference
    pub preference: DietPreference,
}
