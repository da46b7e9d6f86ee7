// ABOUTME: Rule-based diet recommendation engine with BMI and sugar band lookups
// ABOUTME: Pure functions mapping a health profile to a health note and meal triple
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DiabEat
//! Diet recommendation engine
//!
//! Arithmetic and table lookup only: BMI from weight and height, a health
//! note from the blood sugar band, and a fixed meal triple from one of two
//! lookup tables.
//!
//! Two independent meal tables exist, inherited from the system this one
//! replaces, and they do not agree:
//!
//! - [`meal_plan_for_sugar`], keyed by sugar band x preference. This is the
//!   table `POST /api/recommend` serves.
//! - [`meal_plan_for_diabetes_type`], keyed by diabetes type x preference.
//!   The intake page's client script carries the same table and applies it
//!   browser-side.
//!
//! Which table is authoritative is unresolved with the system owner; both
//! are kept byte-for-byte until that is settled.

use crate::models::{DiabetesType, DietPreference, HealthProfile};
use serde::{Deserialize, Serialize};

/// Calculate BMI from weight (kg) and height (cm), rounded to 2 decimals
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    (bmi * 100.0).round() / 100.0
}

/// Blood sugar band mapped to a qualitative health note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SugarBand {
    /// Below 100 mg/dL
    Normal,
    /// 100-125 mg/dL
    PreDiabetic,
    /// 126-180 mg/dL
    SlightlyHigh,
    /// Above 180 mg/dL
    High,
}

impl SugarBand {
    /// Classify a blood sugar level (mg/dL) into its band
    #[must_use]
    pub const fn from_level(sugar_mg_dl: u32) -> Self {
        match sugar_mg_dl {
            0..=99 => Self::Normal,
            100..=125 => Self::PreDiabetic,
            126..=180 => Self::SlightlyHigh,
            _ => Self::High,
        }
    }

    /// The health note shown to the user for this band
    #[must_use]
    pub const fn health_note(self) -> &'static str {
        match self {
            Self::Normal => "Normal sugar levels - maintain balanced diet",
            Self::PreDiabetic => "Pre-diabetic range - focus on low GI foods",
            Self::SlightlyHigh => "Slightly high sugar - eat complex carbs, avoid simple sugars",
            Self::High => "High sugar levels - strict low-carb diet recommended, consult doctor",
        }
    }
}

/// A fixed breakfast/lunch/dinner triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MealPlan {
    pub breakfast: &'static str,
    pub lunch: &'static str,
    pub dinner: &'static str,
}

/// Meal plan keyed by sugar band x preference (the API's table)
///
/// The table only distinguishes "at or below 125" from "above 125"; the four
/// health-note bands collapse into two meal columns.
#[must_use]
pub fn meal_plan_for_sugar(sugar_mg_dl: u32, preference: DietPreference) -> MealPlan {
    let low_to_mid = sugar_mg_dl <= 125;
    match (preference, low_to_mid) {
        (DietPreference::Veg, true) => MealPlan {
            breakfast: "Oats with almonds and cinnamon + Green tea",
            lunch: "Brown rice (small portion) + Mixed vegetable curry + Salad",
            dinner: "Grilled paneer/tofu + Steamed vegetables + Clear soup",
        },
        (DietPreference::Veg, false) => MealPlan {
            breakfast: "Vegetable omelette (with minimal oil) + Herbal tea",
            lunch: "Quinoa + Spinach dal + Cucumber salad",
            dinner: "Grilled cottage cheese + Broccoli + Tomato soup",
        },
        (DietPreference::Nonveg, true) => MealPlan {
            breakfast: "Boiled eggs (2) + Avocado + Green tea",
            lunch: "Grilled chicken breast + Brown rice (small) + Salad",
            dinner: "Fish curry (less oil) + Steamed vegetables",
        },
        (DietPreference::Nonveg, false) => MealPlan {
            breakfast: "Egg white omelette + Spinach + Black coffee",
            lunch: "Grilled salmon + Cauliflower rice + Green salad",
            dinner: "Chicken soup + Steamed broccoli + Mixed greens",
        },
    }
}

/// Meal plan keyed by diabetes type x preference (the intake page's table)
#[must_use]
pub fn meal_plan_for_diabetes_type(
    diabetes_type: DiabetesType,
    preference: DietPreference,
) -> MealPlan {
    match (diabetes_type, preference) {
        (DiabetesType::Type1, DietPreference::Veg) => MealPlan {
            breakfast: "Moong dal chilla + Mint chutney",
            lunch: "Mixed veg curry + 2 chapatis + Salad",
            dinner: "Vegetable soup + Paneer tikka",
        },
        (DiabetesType::Type1, DietPreference::Nonveg) => MealPlan {
            breakfast: "Egg sandwich with whole wheat bread",
            lunch: "Grilled chicken + Brown rice + Beans",
            dinner: "Chicken stew + Steamed veggies",
        },
        (DiabetesType::Type2, DietPreference::Veg) => MealPlan {
            breakfast: "Oats porridge + Apple",
            lunch: "Spinach dal + Quinoa + Curd",
            dinner: "Tofu stir fry + Methi soup",
        },
        (DiabetesType::Type2, DietPreference::Nonveg) => MealPlan {
            breakfast: "Boiled eggs + Avocado toast",
            lunch: "Fish curry + Red rice + Salad",
            dinner: "Grilled salmon + Green beans + Soup",
        },
        (DiabetesType::Gestational, DietPreference::Veg) => MealPlan {
            breakfast: "Ragi dosa + Coconut chutney",
            lunch: "Lentil soup + Brown rice + Mixed veg",
            dinner: "Vegetable khichdi + Buttermilk",
        },
        (DiabetesType::Gestational, DietPreference::Nonveg) => MealPlan {
            breakfast: "Omelette + Multigrain toast",
            lunch: "Grilled chicken breast + Veg soup",
            dinner: "Fish with sautéed spinach + Roti",
        },
    }
}

/// Complete recommendation returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// BMI rounded to 2 decimals
    pub bmi: f64,
    /// Qualitative note for the user's sugar band
    pub health_note: &'static str,
    pub breakfast: &'static str,
    pub lunch: &'static str,
    pub dinner: &'static str,
}

/// Generate the complete recommendation for a validated profile
///
/// Uses the sugar-band table; `diabetes_type` is intentionally not
/// consulted here (see the module docs on the two tables).
#[must_use]
pub fn generate(profile: &HealthProfile) -> Recommendation {
    let bmi = calculate_bmi(profile.weight, profile.height);
    let band = SugarBand::from_level(profile.sugar);
    let meals = meal_plan_for_sugar(profile.sugar, profile.preference);

    Recommendation {
        bmi,
        health_note: band.health_note(),
        breakfast: meals.breakfast,
        lunch: meals.lunch,
        dinner: meals.dinner,
    }
}
