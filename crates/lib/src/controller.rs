//! # View Controller
//!
//! Each generator view owns one `ViewController`: the form input, and a
//! `ViewState` that moves `Idle → Submitting → {Success, Failed}`. State
//! transitions are immutable; each returns a fresh `ViewState` which the
//! controller swaps in. Views never share state.

use crate::{
    errors::GenerationError,
    generator::Generator,
    render::render,
    types::{CopyTarget, GenerationRequest, GenerationResult},
};
use std::sync::Arc;
use tracing::{info, warn};

/// The UI state of a single generator view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub is_loading: bool,
    pub error: Option<String>,
    pub result: Option<GenerationResult>,
}

/// A coarse view of `ViewState` for rendering decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Success,
    Failed,
}

impl ViewState {
    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Submitting
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.result.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }

    /// A new submission: loading, with any previous error and result cleared.
    pub fn submitting(&self) -> Self {
        Self {
            is_loading: true,
            error: None,
            result: None,
        }
    }

    pub fn succeeded(&self, result: GenerationResult) -> Self {
        Self {
            is_loading: false,
            error: None,
            result: Some(result),
        }
    }

    pub fn failed(&self, error: &GenerationError) -> Self {
        Self {
            is_loading: false,
            error: Some(error.to_string()),
            result: None,
        }
    }
}

/// The editable fields of a generator form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormInput {
    pub topic: String,
    pub audience: String,
    pub tone: Option<String>,
}

pub struct ViewController {
    generator: Arc<Generator>,
    form: FormInput,
    state: ViewState,
}

impl ViewController {
    /// A freshly mounted view: empty form, idle state.
    pub fn new(generator: Arc<Generator>) -> Self {
        Self {
            generator,
            form: FormInput::default(),
            state: ViewState::default(),
        }
    }

    pub fn form(&self) -> &FormInput {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormInput {
        &mut self.form
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Whether the submit trigger is enabled.
    pub fn can_submit(&self) -> bool {
        !self.form.topic.trim().is_empty() && !self.state.is_loading
    }

    /// The request the current form describes.
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            content_type: self.generator.content_type(),
            topic: self.form.topic.trim().to_string(),
            audience: Some(self.form.audience.clone()),
            tone: self.form.tone.clone(),
        }
    }

    /// Moves to `Submitting` if the guard allows it, returning the request to issue.
    ///
    /// Returns `None` and leaves the state untouched when the topic is blank,
    /// the request is otherwise invalid, or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<GenerationRequest> {
        if !self.can_submit() {
            return None;
        }
        let request = self.request();
        if let Err(e) = request.validate() {
            warn!("[controller] Refusing to submit invalid request: {e}");
            return None;
        }
        self.state = self.state.submitting();
        Some(request)
    }

    /// Records the outcome of the in-flight submission.
    pub fn finish(&mut self, outcome: Result<GenerationResult, GenerationError>) {
        self.state = match outcome {
            Ok(result) => self.state.succeeded(result),
            Err(e) => self.state.failed(&e),
        };
    }

    /// Submits the form and waits for the result.
    pub async fn submit(&mut self) -> &ViewState {
        if let Some(request) = self.begin_submit() {
            info!(
                "[controller] Submitting {} request.",
                self.generator.content_type()
            );
            let generator = Arc::clone(&self.generator);
            let outcome = generator.run(&request).await;
            self.finish(outcome);
        }
        &self.state
    }

    /// The current result rendered for display, using this view's profile.
    pub fn rendered(&self) -> Option<String> {
        let result = self.state.result.as_ref()?;
        Some(render(result, &self.request(), self.generator.profile()))
    }

    /// The text a copy-to-clipboard action on `target` would write.
    pub fn copy_text(&self, target: CopyTarget) -> Option<String> {
        self.state.result.as_ref()?.copy_text(target)
    }
}
