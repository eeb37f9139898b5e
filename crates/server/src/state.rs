//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. The state holds the configuration and one
//! ready-to-use `Generator` per content type. Nothing in it is mutable, so
//! concurrent requests never coordinate.

use crate::config::{AppConfig, GeneratorOverride};
use anycopy::{
    providers::factory::create_provider, ContentType, Generator, GeneratorProfile,
};
use std::{collections::HashMap, sync::Arc};
use tracing::info;

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration, loaded from `config.yml`.
    pub config: Arc<AppConfig>,
    /// One generator per content type, all sharing the configured provider.
    pub generators: Arc<HashMap<ContentType, Arc<Generator>>>,
}

impl AppState {
    pub fn generator(&self, content_type: ContentType) -> Option<Arc<Generator>> {
        self.generators.get(&content_type).cloned()
    }

    /// The generators in catalog order.
    pub fn catalog(&self) -> Vec<Arc<Generator>> {
        ContentType::ALL
            .into_iter()
            .filter_map(|ct| self.generator(ct))
            .collect()
    }
}

/// Builds the shared application state from the configuration.
///
/// It instantiates the configured AI provider once and builds a generator for
/// each content type, applying any `generators.<slug>` overrides.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let provider = create_provider(&config.provider)?;
    info!(
        provider = %config.provider.provider,
        "Initialized generation service provider."
    );

    let mut generators = HashMap::new();
    for content_type in ContentType::ALL {
        let mut profile = GeneratorProfile::builtin(content_type);
        if let Some(overrides) = config.generators.get(content_type.slug()) {
            info!("Applying configuration overrides for '{}'.", content_type.slug());
            apply_overrides(&mut profile, overrides);
        }
        generators.insert(
            content_type,
            Arc::new(Generator::new(profile, provider.clone())),
        );
    }

    Ok(AppState {
        config: Arc::new(config),
        generators: Arc::new(generators),
    })
}

fn apply_overrides(profile: &mut GeneratorProfile, overrides: &GeneratorOverride) {
    if let Some(template) = &overrides.template {
        profile.template = template.clone();
    }
    if let Some(tone) = &overrides.default_tone {
        profile.default_tone = tone.clone();
    }
    if let Some(reading_time) = &overrides.reading_time_fallback {
        profile.defaults.reading_time = reading_time.clone();
    }
    if let Some(word_count) = &overrides.word_count_fallback {
        profile.defaults.word_count = word_count.clone();
    }
    if let Some(label) = &overrides.caption_label {
        profile.defaults.caption_label = label.clone();
    }
}
