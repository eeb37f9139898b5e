//! # The Generator Pipeline
//!
//! One generic pipeline (build prompt → execute → normalize) shared by every
//! content type. What differs between blog posts, captions and video metadata
//! lives in a `GeneratorProfile`: the instruction template, the default tone,
//! the normalization defaults, and the catalog text shown to users.

use crate::{
    errors::GenerationError,
    executor::GenerationExecutor,
    normalize::{normalize, NormalizationDefaults},
    prompts::{build_prompt, templates, BuiltPrompt},
    providers::ai::AiProvider,
    types::{ContentType, GenerationRequest, GenerationResult},
};
use serde::Serialize;
use tracing::info;

/// Per-content-type configuration of the generator pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorProfile {
    pub content_type: ContentType,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub template: String,
    pub default_tone: String,
    pub defaults: NormalizationDefaults,
}

impl GeneratorProfile {
    /// The built-in profile for a content type.
    pub fn builtin(content_type: ContentType) -> Self {
        let (title, description, features, template, default_tone) = match content_type {
            ContentType::Blog => (
                "Blog Post Generator",
                "Create comprehensive blog posts on any topic with proper structure",
                ["Well-structured content", "SEO-friendly", "Engaging introductions"],
                templates::BLOG_POST_TEMPLATE,
                "professional",
            ),
            ContentType::InstagramCaption => (
                "Instagram Caption Generator",
                "Create engaging captions with trending hashtags for your Instagram posts",
                ["Trending hashtags", "Engaging captions", "Multiple variations"],
                templates::INSTAGRAM_CAPTION_TEMPLATE,
                "a mix of professional, casual, and creative",
            ),
            ContentType::YouTubeMetadata => (
                "YouTube Title & Description",
                "Generate click-worthy titles and SEO-optimized descriptions for your videos",
                ["SEO optimization", "Click-worthy titles", "Detailed descriptions"],
                templates::YOUTUBE_METADATA_TEMPLATE,
                "engaging",
            ),
        };
        Self {
            content_type,
            title: title.to_string(),
            description: description.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
            template: template.to_string(),
            default_tone: default_tone.to_string(),
            defaults: NormalizationDefaults::default(),
        }
    }

    /// All built-in profiles, in catalog order.
    pub fn all() -> Vec<Self> {
        ContentType::ALL.into_iter().map(Self::builtin).collect()
    }

    /// The catalog entry shown on the home screen and `GET /generators`.
    pub fn info(&self) -> GeneratorInfo {
        GeneratorInfo {
            content_type: self.content_type,
            slug: self.content_type.slug().to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            features: self.features.clone(),
        }
    }
}

/// A generator as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorInfo {
    pub content_type: ContentType,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

/// The generation pipeline for one content type.
#[derive(Debug, Clone)]
pub struct Generator {
    profile: GeneratorProfile,
    executor: GenerationExecutor,
}

impl Generator {
    pub fn new(profile: GeneratorProfile, ai_provider: Box<dyn AiProvider>) -> Self {
        Self {
            profile,
            executor: GenerationExecutor::new(ai_provider),
        }
    }

    pub fn profile(&self) -> &GeneratorProfile {
        &self.profile
    }

    pub fn content_type(&self) -> ContentType {
        self.profile.content_type
    }

    /// Builds the instruction and schema for `request` without calling the service.
    pub fn prepare(&self, request: &GenerationRequest) -> BuiltPrompt {
        build_prompt(request, &self.profile.template, &self.profile.default_tone)
    }

    /// Executes a prepared prompt and normalizes the result.
    pub async fn complete(&self, prompt: &BuiltPrompt) -> Result<GenerationResult, GenerationError> {
        let raw = self
            .executor
            .execute(&prompt.instruction, &prompt.schema, self.content_type())
            .await?;
        Ok(normalize(raw, &self.profile.defaults))
    }

    /// Runs the full pipeline for one request.
    ///
    /// The caller is responsible for validating the request first.
    pub async fn run(&self, request: &GenerationRequest) -> Result<GenerationResult, GenerationError> {
        info!(
            "[generator] Generating {} for topic: {:?}",
            self.content_type(),
            request.topic
        );
        let prompt = self.prepare(request);
        self.complete(&prompt).await
    }
}
