//! # Common Types
//!
//! This module contains the input records the dashboard charts are rendered
//! from. Both are plain data carriers: the aggregation that produces them
//! (meal logs, recipe lookups, goal math) happens upstream and hands the
//! results over as-is, usually decoded from the stats API's JSON payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Consumed grams per macronutrient for a single day.
///
/// Values are passed through to the chart untouched: zero is a normal
/// "nothing logged yet" state, and nothing here rejects negative or
/// non-finite numbers. The charting backend gets them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    /// Protein consumed, in grams
    pub protein_g: f64,
    /// Carbohydrates consumed, in grams
    pub carbs_g: f64,
    /// Fats consumed, in grams
    pub fats_g: f64,
}

impl MacroBreakdown {
    pub const fn new(protein_g: f64, carbs_g: f64, fats_g: f64) -> Self {
        Self {
            protein_g,
            carbs_g,
            fats_g,
        }
    }
}

/// One day of the weekly calorie trend.
///
/// The weekly chart renders records in the order the caller supplies them;
/// it never re-sorts or deduplicates, so suppliers are expected to send a
/// chronological window (the stats API sends the last seven days).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayCalories {
    /// Calendar date of the record
    pub date: NaiveDate,
    /// Total calories consumed on that date
    pub calories: f64,
}

impl DayCalories {
    pub const fn new(date: NaiveDate, calories: f64) -> Self {
        Self { date, calories }
    }
}
