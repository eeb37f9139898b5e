#![allow(dead_code)]
//! # Common Test Utilities
//!
//! This module provides shared utilities for testing, such as a scripted mock
//! AI provider, to ensure tests are isolated and repeatable.

use anycopy::providers::ai::AiProvider;
use anycopy::PromptError;
use async_trait::async_trait;
use dotenvy::dotenv;
use serde_json::Value;
use std::fmt::Debug;
use std::sync::{Arc, Once, RwLock};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber and loads .env for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// --- Mock AI Provider for Logic Testing ---

/// An `AiProvider` that replays scripted responses in order.
///
/// `Err(message)` entries simulate a failed service call.
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<RwLock<Vec<(String, Value)>>>,
    pub responses: Arc<RwLock<Vec<Result<Value, String>>>>,
}

impl MockAiProvider {
    pub fn new(responses: Vec<Result<Value, String>>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            responses: Arc::new(RwLock::new(responses.into_iter().rev().collect())),
        }
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.call_history.read().unwrap().clone()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(&self, prompt: &str, response_schema: &Value) -> Result<Value, PromptError> {
        self.call_history
            .write()
            .unwrap()
            .push((prompt.to_string(), response_schema.clone()));

        match self.responses.write().unwrap().pop() {
            Some(Ok(value)) => Ok(value),
            Some(Err(message)) => Err(PromptError::AiApi(message)),
            None => Err(PromptError::AiApi("no scripted response left".to_string())),
        }
    }
}
