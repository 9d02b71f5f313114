pub mod analysis;
pub mod config;
pub mod image;
pub mod journal;
pub mod models;

pub use journal::{FoodJournal, OverlayMode, SubmissionOutcome};
pub use models::{AnalysisResult, FoodLogEntry, Mood, NutritionInfo, UserProfile};
