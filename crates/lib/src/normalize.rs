//! # Result Normalization
//!
//! Fills absent optional fields with fixed display defaults after a
//! successful generation. Required fields (title, content, caption text,
//! description) are never invented: if the service left them out they stay
//! empty and render as visibly incomplete.

use crate::types::{BlogPost, CaptionSet, GenerationResult, VideoMetadata, WordCount};
use serde::Deserialize;

/// The fallback literals used by `normalize`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NormalizationDefaults {
    pub reading_time: String,
    pub word_count: String,
    /// Prefix for captions without a tone; rendered as "<label> <n>".
    pub caption_label: String,
}

impl Default for NormalizationDefaults {
    fn default() -> Self {
        Self {
            reading_time: "5 min read".to_string(),
            word_count: "800+".to_string(),
            caption_label: "Caption".to_string(),
        }
    }
}

/// Fills display defaults into `raw`. Absent, blank and zero values all get
/// the fallback. Idempotent.
pub fn normalize(raw: GenerationResult, defaults: &NormalizationDefaults) -> GenerationResult {
    match raw {
        GenerationResult::Blog(post) => GenerationResult::Blog(normalize_blog(post, defaults)),
        GenerationResult::InstagramCaption(set) => {
            GenerationResult::InstagramCaption(normalize_captions(set, defaults))
        }
        GenerationResult::YouTubeMetadata(meta) => {
            GenerationResult::YouTubeMetadata(normalize_video(meta))
        }
    }
}

fn normalize_blog(mut post: BlogPost, defaults: &NormalizationDefaults) -> BlogPost {
    if is_blank(post.reading_time.as_deref()) {
        post.reading_time = Some(defaults.reading_time.clone());
    }
    if post.word_count.as_ref().is_none_or(is_empty_count) {
        post.word_count = Some(WordCount::Label(defaults.word_count.clone()));
    }
    post
}

fn normalize_captions(set: CaptionSet, defaults: &NormalizationDefaults) -> CaptionSet {
    let captions = set
        .captions
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(index, mut caption)| {
            if is_blank(caption.tone.as_deref()) {
                caption.tone = Some(format!("{} {}", defaults.caption_label, index + 1));
            }
            caption
        })
        .collect();
    CaptionSet {
        captions: Some(captions),
    }
}

// Blank strings and a zero count carry no information and get the fallback.
fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

fn is_empty_count(count: &WordCount) -> bool {
    match count {
        WordCount::Count(n) => n.as_f64() == Some(0.0),
        WordCount::Label(label) => label.trim().is_empty(),
    }
}

fn normalize_video(meta: VideoMetadata) -> VideoMetadata {
    VideoMetadata {
        titles: Some(meta.titles.unwrap_or_default()),
        description: meta.description,
        tags: Some(meta.tags.unwrap_or_default()),
    }
}
