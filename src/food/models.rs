use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Nutrition facts for one meal as returned by the analysis service.
///
/// The four macro fields are required; everything else is optional. Values are
/// taken as-is, including negative numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamins: Option<Vec<String>>,
}

impl NutritionInfo {
    pub fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
            fiber: None,
            sugar: None,
            vitamins: None,
        }
    }

    /// Names of the fields holding a negative value.
    pub fn negative_fields(&self) -> Vec<&'static str> {
        let mut fields = vec![
            ("calories", Some(self.calories)),
            ("protein", Some(self.protein)),
            ("carbs", Some(self.carbs)),
            ("fat", Some(self.fat)),
            ("fiber", self.fiber),
            ("sugar", self.sugar),
        ];
        fields.retain(|(_, value)| value.map_or(false, |v| v < 0.0));
        fields.into_iter().map(|(name, _)| name).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Energized,
    Content,
    Heavy,
    Lethargic,
    #[default]
    Balanced,
    Uncertain,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Energized,
        Mood::Content,
        Mood::Balanced,
        Mood::Heavy,
        Mood::Lethargic,
        Mood::Uncertain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Energized => "energized",
            Mood::Content => "content",
            Mood::Heavy => "heavy",
            Mood::Lethargic => "lethargic",
            Mood::Balanced => "balanced",
            Mood::Uncertain => "uncertain",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Energized => "⚡",
            Mood::Content => "😊",
            Mood::Balanced => "🍃",
            Mood::Heavy => "🌙",
            Mood::Lethargic => "💤",
            Mood::Uncertain => "🌫️",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Mood::ALL
            .iter()
            .copied()
            .find(|mood| mood.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Mood::ALL.iter().map(|m| m.as_str()).collect();
                format!("Unknown mood '{}'. Choose one of: {}", s.trim(), names.join(", "))
            })
    }
}

/// One logged meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLogEntry {
    pub id: String,
    /// Epoch milliseconds at submission time.
    pub timestamp: i64,
    pub name: String,
    /// Self-contained `data:` URL of the photo, if the meal was logged from one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub nutrition: NutritionInfo,
    pub mood: Mood,
    pub description: String,
    pub insight: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub daily_calorie_goal: f64,
    pub aura_score: u8,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Alex".to_string(),
            daily_calorie_goal: 2200.0,
            aura_score: 85,
        }
    }
}

/// The three fields the analysis service must return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub name: String,
    pub nutrition: NutritionInfo,
    pub insight: String,
}
