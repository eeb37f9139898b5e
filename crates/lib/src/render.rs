//! # Result Rendering
//!
//! Plain-text (Markdown-flavoured) rendering of generation results, used by
//! the CLI and returned alongside the structured result by the server.

use crate::{
    generator::GeneratorProfile,
    types::{BlogPost, CaptionSet, GenerationRequest, GenerationResult, VideoMetadata},
};
use std::fmt::Write;

/// Renders a result for display.
///
/// `profile` supplies the tone shown when the request named none and the
/// label for captions without a tone. Optional fields that were never
/// normalized render as empty; a caption set with no captions renders only
/// its heading.
pub fn render(
    result: &GenerationResult,
    request: &GenerationRequest,
    profile: &GeneratorProfile,
) -> String {
    match result {
        GenerationResult::Blog(post) => render_blog(post, request, profile),
        GenerationResult::InstagramCaption(set) => render_captions(set, profile),
        GenerationResult::YouTubeMetadata(meta) => render_video(meta),
    }
}

fn render_blog(post: &BlogPost, request: &GenerationRequest, profile: &GeneratorProfile) -> String {
    let word_count = post
        .word_count
        .as_ref()
        .map(|w| w.to_string())
        .unwrap_or_default();
    let tone = request
        .tone()
        .unwrap_or(&profile.default_tone)
        .to_lowercase();
    format!(
        "# {}\n\n{} | {} words | {} tone\n\n{}\n",
        post.title,
        post.reading_time.as_deref().unwrap_or_default(),
        word_count,
        tone,
        post.content
    )
}

fn render_captions(set: &CaptionSet, profile: &GeneratorProfile) -> String {
    let captions = set.captions.as_deref().unwrap_or_default();
    let mut out = format!("# Your Instagram Captions ({})\n", captions.len());
    for (index, caption) in captions.iter().enumerate() {
        let label = caption
            .tone
            .clone()
            .unwrap_or_else(|| format!("{} {}", profile.defaults.caption_label, index + 1));
        let _ = write!(out, "\n## {label}\n\n{}\n\n{}\n", caption.text, caption.hashtags);
    }
    out
}

fn render_video(meta: &VideoMetadata) -> String {
    let mut out = String::from("# Title Options\n\n");
    for (index, title) in meta.titles.as_deref().unwrap_or_default().iter().enumerate() {
        let _ = writeln!(out, "{}. {title} ({} chars)", index + 1, title.chars().count());
    }
    let _ = write!(out, "\n# Video Description\n\n{}\n", meta.description);
    let tags = meta.tags.as_deref().unwrap_or_default();
    let _ = write!(out, "\n# SEO Tags ({})\n\n{}\n", tags.len(), tags.join(", "));
    out
}
