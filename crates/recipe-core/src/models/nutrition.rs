// ABOUTME: Nutrition value types shared by recipes and ingredients
// ABOUTME: Nutrient entries and the NutritionSnapshot with calorie extraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::nutrition::CALORIES_NUTRIENT;
use serde::{Deserialize, Serialize};

/// Single named nutrient value as reported by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrient {
    /// Nutrient name, compared case-insensitively ("Calories", "Protein", ...)
    pub name: String,
    /// Numeric amount
    #[serde(default)]
    pub amount: f64,
    /// Unit of `amount` ("kcal", "g", ...)
    #[serde(default)]
    pub unit: String,
    /// Share of the daily recommended intake
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_of_daily_needs: Option<f64>,
}

impl Nutrient {
    /// Create a nutrient without daily-needs information
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
            percent_of_daily_needs: None,
        }
    }

    /// Whether this entry holds the energy value
    #[must_use]
    pub fn is_calories(&self) -> bool {
        self.name.eq_ignore_ascii_case(CALORIES_NUTRIENT)
    }
}

/// Set of nutrients plus the derived calorie total
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionSnapshot {
    /// Nutrient entries in provider order
    #[serde(default)]
    pub nutrients: Vec<Nutrient>,
    /// Total energy; populated from `nutrients` when the provider leaves it out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_calories: Option<f64>,
}

impl NutritionSnapshot {
    /// Snapshot from a list of nutrients, total left unset
    #[must_use]
    pub const fn from_nutrients(nutrients: Vec<Nutrient>) -> Self {
        Self {
            nutrients,
            total_calories: None,
        }
    }

    /// Amount of the first nutrient named "Calories"
    #[must_use]
    pub fn first_calories(&self) -> Option<f64> {
        self.nutrients
            .iter()
            .find(|nutrient| nutrient.is_calories())
            .map(|nutrient| nutrient.amount)
    }

    /// Sum of every nutrient named "Calories"
    #[must_use]
    pub fn calories_sum(&self) -> f64 {
        self.nutrients
            .iter()
            .filter(|nutrient| nutrient.is_calories())
            .map(|nutrient| nutrient.amount)
            .sum()
    }

    /// Fill `total_calories` from the nutrient list if it is not already set
    pub fn ensure_total_calories(&mut self) {
        if self.total_calories.is_none() {
            self.total_calories = self.first_calories();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calorie_lookup_is_case_insensitive() {
        let snapshot = NutritionSnapshot::from_nutrients(vec![
            Nutrient::new("Protein", 12.0, "g"),
            Nutrient::new("calories", 320.5, "kcal"),
            Nutrient::new("CALORIES", 10.0, "kcal"),
        ]);

        assert_eq!(snapshot.first_calories(), Some(320.5));
        assert!((snapshot.calories_sum() - 330.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ensure_total_keeps_existing_value() {
        let mut snapshot = NutritionSnapshot {
            nutrients: vec![Nutrient::new("Calories", 100.0, "kcal")],
            total_calories: Some(250.0),
        };
        snapshot.ensure_total_calories();
        assert_eq!(snapshot.total_calories, Some(250.0));

        let mut derived = NutritionSnapshot::from_nutrients(vec![Nutrient::new("Calories", 100.0, "kcal")]);
        derived.ensure_total_calories();
        assert_eq!(derived.total_calories, Some(100.0));
    }

    #[test]
    fn test_missing_calories_stay_unset() {
        let mut snapshot = NutritionSnapshot::from_nutrients(vec![Nutrient::new("Fat", 3.0, "g")]);
        snapshot.ensure_total_calories();
        assert_eq!(snapshot.total_calories, None);
        assert!(snapshot.calories_sum().abs() < f64::EPSILON);
    }
}
