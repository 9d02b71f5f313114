//! Session state for the food journal.
//!
//! `FoodJournal` is the only owner of the log list. All mutation goes through
//! the overlay transitions below; readers get slices or derived values.

use crate::food::analysis::nutrition::DailyTotals;
use crate::food::analysis::ring::MacroRing;
use crate::food::image::EncodedImage;
use crate::food::models::{AnalysisResult, FoodLogEntry, Mood};
use crate::providers::traits::{AnalysisError, AnalysisInput, AnalysisProvider};
use chrono::Utc;
use log::{debug, info, warn};
use std::future::Future;
use uuid::Uuid;

pub const PHOTO_DESCRIPTION: &str = "Logged via camera";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayMode {
    Idle,
    Composing,
    Loading,
}

impl OverlayMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, OverlayMode::Idle)
    }
}

/// Identifies one submission. A result is only applied while its token is
/// still the one in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// A submission handed out by the journal, to be analyzed and passed back to
/// [`FoodJournal::complete`].
#[derive(Debug, Clone)]
pub struct PendingAnalysis {
    pub token: RequestToken,
    pub input: AnalysisInput,
    pub description: String,
    pub image: Option<String>,
    pub mood: Mood,
    pub timestamp: i64,
}

#[derive(Debug)]
pub enum SubmissionOutcome {
    Logged(FoodLogEntry),
    Failed(AnalysisError),
    /// The overlay was closed or reopened while the request was in flight.
    Discarded,
    /// The user cancelled while waiting; the overlay is closed.
    Cancelled,
}

#[derive(Debug)]
pub struct FoodJournal {
    entries: Vec<FoodLogEntry>,
    mode: OverlayMode,
    mood: Mood,
    next_token: u64,
    in_flight: Option<RequestToken>,
}

impl Default for FoodJournal {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodJournal {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            mode: OverlayMode::Idle,
            mood: Mood::default(),
            next_token: 0,
            in_flight: None,
        }
    }

    /// Entries newest-first.
    pub fn entries(&self) -> &[FoodLogEntry] {
        &self.entries
    }

    pub fn mode(&self) -> OverlayMode {
        self.mode
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn totals(&self) -> DailyTotals {
        DailyTotals::from_entries(&self.entries)
    }

    pub fn ring(&self) -> MacroRing {
        let totals = self.totals();
        MacroRing::from_grams(totals.protein, totals.carbs, totals.fat)
    }

    pub fn open_overlay(&mut self) {
        if self.mode == OverlayMode::Idle {
            self.mode = OverlayMode::Composing;
        }
    }

    /// Closes the overlay from any state. A request still in flight will be
    /// discarded when it returns.
    pub fn close_overlay(&mut self) {
        if let Some(token) = self.in_flight.take() {
            info!("Overlay closed with request {:?} in flight; its result will be discarded", token);
        }
        self.mode = OverlayMode::Idle;
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
    }

    pub fn begin_text_submission(&mut self, text: &str) -> Option<PendingAnalysis> {
        if self.mode != OverlayMode::Composing || text.trim().is_empty() {
            return None;
        }
        Some(self.begin(AnalysisInput::Text(text.to_string()), text.to_string(), None))
    }

    pub fn begin_photo_submission(&mut self, image: &EncodedImage) -> Option<PendingAnalysis> {
        if self.mode != OverlayMode::Composing {
            return None;
        }
        Some(self.begin(
            AnalysisInput::from(image),
            PHOTO_DESCRIPTION.to_string(),
            Some(image.data_url()),
        ))
    }

    fn begin(&mut self, input: AnalysisInput, description: String, image: Option<String>) -> PendingAnalysis {
        self.next_token += 1;
        let token = RequestToken(self.next_token);
        self.in_flight = Some(token);
        self.mode = OverlayMode::Loading;
        debug!("Submitting analysis request {:?}", token);

        PendingAnalysis {
            token,
            input,
            description,
            image,
            mood: self.mood,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    pub fn complete(
        &mut self,
        pending: PendingAnalysis,
        outcome: Result<AnalysisResult, AnalysisError>,
    ) -> SubmissionOutcome {
        if self.mode != OverlayMode::Loading || self.in_flight != Some(pending.token) {
            debug!("Discarding stale analysis result {:?}", pending.token);
            return SubmissionOutcome::Discarded;
        }
        self.in_flight = None;

        match outcome {
            Ok(result) => {
                let entry = FoodLogEntry {
                    id: generate_entry_id(),
                    timestamp: pending.timestamp,
                    name: result.name,
                    image: pending.image,
                    nutrition: result.nutrition,
                    mood: pending.mood,
                    description: pending.description,
                    insight: result.insight,
                };
                info!("Logged '{}' ({} kcal)", entry.name, entry.nutrition.calories);
                self.entries.insert(0, entry.clone());
                self.mode = OverlayMode::Idle;
                SubmissionOutcome::Logged(entry)
            }
            Err(e) => {
                warn!("Failed to analyze food: {}", e);
                self.mode = OverlayMode::Composing;
                SubmissionOutcome::Failed(e)
            }
        }
    }

    /// Waits for the analysis of `pending` and applies it, unless `cancel`
    /// resolves first, in which case the overlay is closed and the request
    /// dropped.
    pub async fn run_submission<C>(
        &mut self,
        provider: &dyn AnalysisProvider,
        pending: PendingAnalysis,
        cancel: C,
    ) -> SubmissionOutcome
    where
        C: Future<Output = ()>,
    {
        let outcome = tokio::select! {
            result = provider.analyze(&pending.input) => Some(result),
            _ = cancel => None,
        };

        match outcome {
            Some(result) => self.complete(pending, result),
            None => {
                self.close_overlay();
                SubmissionOutcome::Cancelled
            }
        }
    }

    /// Removes the entry with `id`. Returns whether anything was removed.
    pub fn delete_entry(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }
}

/// Short random id used as list key and deletion target. Collisions are not
/// handled.
fn generate_entry_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}
