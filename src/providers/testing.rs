//! Canned provider for exercising the journal and command layer without a network.

use crate::food::models::{AnalysisResult, NutritionInfo};
use crate::providers::traits::{AnalysisError, AnalysisInput, AnalysisProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct StubProvider {
    calls: Arc<AtomicUsize>,
    inputs: Arc<Mutex<Vec<AnalysisInput>>>,
    fail: bool,
    hang: bool,
}

impl StubProvider {
    pub fn ok() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            inputs: Arc::new(Mutex::new(Vec::new())),
            fail: false,
            hang: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::ok()
        }
    }

    /// Never answers; for exercising cancellation.
    pub fn hanging() -> Self {
        Self {
            hang: true,
            ..Self::ok()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn inputs(&self) -> Vec<AnalysisInput> {
        self.inputs.lock().unwrap().clone()
    }
}

pub fn banana() -> AnalysisResult {
    AnalysisResult {
        name: "Banana".to_string(),
        nutrition: NutritionInfo::new(105.0, 1.0, 27.0, 0.0),
        insight: "Sweet, steady energy.".to_string(),
    }
}

#[async_trait]
impl AnalysisProvider for StubProvider {
    async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisResult, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inputs.lock().unwrap().push(input.clone());
        if self.hang {
            std::future::pending::<()>().await;
        }
        if self.fail {
            Err(AnalysisError::MalformedResponse("not json".to_string()))
        } else {
            Ok(banana())
        }
    }

    fn get_model_info(&self) -> String {
        "stub".to_string()
    }

    fn get_system_instruction(&self) -> String {
        String::new()
    }
}
