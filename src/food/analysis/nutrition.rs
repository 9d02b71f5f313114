use crate::food::models::FoodLogEntry;
use serde::Serialize;

/// Running totals of the macro fields across the journal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DailyTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl DailyTotals {
    pub fn from_entries(entries: &[FoodLogEntry]) -> Self {
        entries.iter().fold(Self::default(), |acc, entry| Self {
            calories: acc.calories + entry.nutrition.calories,
            protein: acc.protein + entry.nutrition.protein,
            carbs: acc.carbs + entry.nutrition.carbs,
            fat: acc.fat + entry.nutrition.fat,
        })
    }

    /// Percentage of the calorie goal consumed, capped at 100.
    pub fn calorie_progress(&self, daily_goal: f64) -> f64 {
        if daily_goal <= 0.0 {
            return 0.0;
        }
        (self.calories / daily_goal * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::models::{Mood, NutritionInfo};

    fn entry(id: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> FoodLogEntry {
        FoodLogEntry {
            id: id.to_string(),
            timestamp: 0,
            name: id.to_string(),
            image: None,
            nutrition: NutritionInfo::new(calories, protein, carbs, fat),
            mood: Mood::Balanced,
            description: String::new(),
            insight: String::new(),
        }
    }

    #[test]
    fn test_empty_journal_totals_are_zero() {
        assert_eq!(DailyTotals::from_entries(&[]), DailyTotals::default());
    }

    #[test]
    fn test_totals_are_fieldwise_sums() {
        let entries = vec![
            entry("a", 105.0, 1.0, 27.0, 0.5),
            entry("b", 320.0, 25.0, 10.0, 18.0),
            entry("c", -20.0, 0.0, 3.0, 0.0),
        ];
        let totals = DailyTotals::from_entries(&entries);
        assert_eq!(totals.calories, 405.0);
        assert_eq!(totals.protein, 26.0);
        assert_eq!(totals.carbs, 40.0);
        assert_eq!(totals.fat, 18.5);
    }

    #[test]
    fn test_calorie_progress_is_capped_and_guarded() {
        let totals = DailyTotals { calories: 1100.0, ..Default::default() };
        assert_eq!(totals.calorie_progress(2200.0), 50.0);
        assert_eq!(totals.calorie_progress(500.0), 100.0);
        assert_eq!(totals.calorie_progress(0.0), 0.0);
    }
}
