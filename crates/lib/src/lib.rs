//! # AI Marketing Copy Generation
//!
//! This crate builds prompts for marketing copy (blog posts, Instagram
//! captions, YouTube titles and descriptions), sends them with an expected
//! JSON response schema to a single LLM invocation service, and normalizes the
//! structured result for display.
//!
//! The flow is the same for every content type and is captured by
//! [`Generator`]; per-type differences live in [`GeneratorProfile`]. UIs drive
//! a generator through a [`ViewController`], which owns the form input and the
//! `Idle → Submitting → Success | Failed` state.

pub mod controller;
pub mod errors;
pub mod executor;
pub mod generator;
pub mod normalize;
pub mod prompts;
pub mod providers;
pub mod render;
pub mod schema;
pub mod types;

pub use controller::{FormInput, Phase, ViewController, ViewState};
pub use errors::{GenerationError, PromptError, RequestError};
pub use generator::{Generator, GeneratorInfo, GeneratorProfile};
pub use normalize::{normalize, NormalizationDefaults};
pub use prompts::{build_prompt, BuiltPrompt};
pub use types::{ContentType, CopyTarget, GenerationRequest, GenerationResult};
