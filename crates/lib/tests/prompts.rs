//! # Prompt Builder Tests
//!
//! This test suite validates `anycopy::prompts::build_prompt` and the built-in
//! generator templates: topic interpolation, audience and tone fallbacks, and
//! the schema attached to each content type.

use anycopy::{
    prompts::{fill_template, DEFAULT_AUDIENCE},
    ContentType, GenerationRequest, Generator, GeneratorProfile,
};

mod common;

use common::MockAiProvider;

fn prepare(request: &GenerationRequest) -> anycopy::BuiltPrompt {
    let generator = Generator::new(
        GeneratorProfile::builtin(request.content_type),
        Box::new(MockAiProvider::new(vec![])),
    );
    generator.prepare(request)
}

/// Every content type embeds the literal topic in a non-empty instruction.
#[test]
fn test_instruction_contains_topic_for_every_type() {
    for content_type in ContentType::ALL {
        let topic = "sustainable living tips";
        let built = prepare(&GenerationRequest::new(content_type, topic));
        assert!(!built.instruction.is_empty());
        assert!(
            built.instruction.contains(topic),
            "{content_type} instruction lacks the topic"
        );
    }
}

/// Requests without an audience fall back to "general audience" for every type.
#[test]
fn test_missing_audience_uses_general_audience() {
    for content_type in ContentType::ALL {
        let built = prepare(&GenerationRequest::new(content_type, "coffee"));
        assert!(
            built.instruction.contains(DEFAULT_AUDIENCE),
            "{content_type} instruction lacks the audience fallback"
        );
    }
}

/// A blank audience is treated like a missing one.
#[test]
fn test_blank_audience_uses_general_audience() {
    let request = GenerationRequest::new(ContentType::Blog, "coffee").with_audience("   ");
    let built = prepare(&request);
    assert!(built.instruction.contains("Target audience: general audience"));
}

/// Blog posts default to a professional tone; an explicit tone wins.
#[test]
fn test_blog_tone_default_and_override() {
    let default = prepare(&GenerationRequest::new(ContentType::Blog, "coffee"));
    assert!(default.instruction.contains("Tone: professional"));

    let casual = prepare(
        &GenerationRequest::new(ContentType::Blog, "coffee")
            .with_audience("college students")
            .with_tone("casual"),
    );
    assert!(casual.instruction.contains("Tone: casual"));
    assert!(casual.instruction.contains("Target audience: college students"));
}

/// The fixed stylistic constraints of each template are carried through.
#[test]
fn test_templates_carry_fixed_constraints() {
    let blog = prepare(&GenerationRequest::new(ContentType::Blog, "x"));
    assert!(blog.instruction.contains("800-1200 words"));

    let captions = prepare(&GenerationRequest::new(ContentType::InstagramCaption, "x"));
    assert!(captions.instruction.contains("Create 3 engaging Instagram captions"));
    assert!(captions.instruction.contains("5-8 relevant hashtags"));

    let video = prepare(&GenerationRequest::new(ContentType::YouTubeMetadata, "x"));
    assert!(video.instruction.contains("under 60 characters"));
    assert!(video.instruction.contains("10-15 relevant tags"));
}

/// Building is deterministic for identical inputs.
#[test]
fn test_build_is_deterministic() {
    let request = GenerationRequest::new(ContentType::YouTubeMetadata, "rust for beginners")
        .with_tone("playful");
    assert_eq!(prepare(&request), prepare(&request));
}

/// Each content type gets its own schema fields.
#[test]
fn test_schema_follows_content_type() {
    let blog = prepare(&GenerationRequest::new(ContentType::Blog, "x"));
    assert_eq!(
        blog.schema.field_names(),
        vec!["title", "content", "reading_time", "word_count"]
    );
    let captions = prepare(&GenerationRequest::new(ContentType::InstagramCaption, "x"));
    assert_eq!(captions.schema.field_names(), vec!["captions"]);
}

/// A topic that looks like a placeholder is not substituted a second time.
#[test]
fn test_topic_is_inserted_verbatim() {
    let filled = fill_template("{topic} / {tone} / {audience}", "{tone}", "everyone", "dry");
    assert_eq!(filled, "{tone} / dry / everyone");
}

/// Audience and tone text is inserted as typed, even when it contains
/// placeholder syntax.
#[test]
fn test_audience_and_tone_are_inserted_verbatim() {
    let filled = fill_template(
        "T:{topic} A:{audience} N:{tone}",
        "coffee",
        "fans of {topic}",
        "dry {topic}",
    );
    assert_eq!(filled, "T:coffee A:fans of {topic} N:dry {topic}");

    let filled = fill_template("{audience} | {tone}", "coffee", "{tone} lovers", "warm");
    assert_eq!(filled, "{tone} lovers | warm");
}

#[test]
fn test_unknown_placeholders_are_left_alone() {
    let filled = fill_template("{topic} for {platform}", "tea", "everyone", "calm");
    assert_eq!(filled, "tea for {platform}");
}
