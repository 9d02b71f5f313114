pub mod commands;
pub mod config;
pub mod food;
pub mod personality;
pub mod providers;

// Re-export commonly used items
pub use food::{FoodJournal, FoodLogEntry, Mood, NutritionInfo, UserProfile};
pub use personality::AssistantPersona;
pub use providers::gemini::GeminiProvider;
pub use providers::traits::{AnalysisError, AnalysisInput, AnalysisProvider};
