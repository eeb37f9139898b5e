//! # Core Data Types
//!
//! Request and result types shared by the generator pipeline, the view
//! controller and the front ends. Everything here is transient and lives only
//! as long as a single generation round-trip.

use crate::errors::RequestError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of marketing copy the generators can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Blog,
    InstagramCaption,
    #[serde(rename = "youtube_metadata")]
    YouTubeMetadata,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [
        ContentType::InstagramCaption,
        ContentType::YouTubeMetadata,
        ContentType::Blog,
    ];

    /// The canonical, serialized name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Blog => "blog",
            ContentType::InstagramCaption => "instagram_caption",
            ContentType::YouTubeMetadata => "youtube_metadata",
        }
    }

    /// The short name used in URLs and CLI subcommands.
    pub fn slug(&self) -> &'static str {
        match self {
            ContentType::Blog => "blog",
            ContentType::InstagramCaption => "instagram",
            ContentType::YouTubeMetadata => "youtube",
        }
    }

    /// How the generated content is referred to in user-facing messages.
    pub fn subject(&self) -> &'static str {
        match self {
            ContentType::Blog => "blog post",
            ContentType::InstagramCaption => "captions",
            ContentType::YouTubeMetadata => "YouTube content",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "blog" => Ok(ContentType::Blog),
            "instagram" | "instagram_caption" => Ok(ContentType::InstagramCaption),
            "youtube" | "youtube_metadata" => Ok(ContentType::YouTubeMetadata),
            other => Err(format!("Unknown content type '{other}'")),
        }
    }
}

/// The writing tones offered for blog posts.
pub const BLOG_TONES: [&str; 5] = [
    "professional",
    "casual",
    "friendly",
    "authoritative",
    "conversational",
];

/// A single request to one of the generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub content_type: ContentType,
    pub topic: String,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub tone: Option<String>,
}

impl GenerationRequest {
    pub fn new(content_type: ContentType, topic: impl Into<String>) -> Self {
        Self {
            content_type,
            topic: topic.into(),
            audience: None,
            tone: None,
        }
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = Some(tone.into());
        self
    }

    /// The audience, if one was given and is not blank.
    pub fn audience(&self) -> Option<&str> {
        non_blank(self.audience.as_deref())
    }

    /// The tone, if one was given and is not blank.
    pub fn tone(&self) -> Option<&str> {
        non_blank(self.tone.as_deref())
    }

    /// Checks the request before it may be issued.
    ///
    /// The topic must be non-empty after trimming, and blog posts only accept
    /// one of [`BLOG_TONES`].
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.topic.trim().is_empty() {
            return Err(RequestError::EmptyTopic);
        }
        if self.content_type == ContentType::Blog {
            if let Some(tone) = self.tone() {
                if !BLOG_TONES.iter().any(|t| t.eq_ignore_ascii_case(tone)) {
                    return Err(RequestError::UnsupportedTone {
                        tone: tone.to_string(),
                        expected: BLOG_TONES.join(", "),
                    });
                }
            }
        }
        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// --- Generation results ---

/// Reads a required string field, treating `null` like a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A word count as reported by the service, or a display label used in its place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WordCount {
    Count(serde_json::Number),
    Label(String),
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordCount::Count(n) => write!(f, "{n}"),
            WordCount::Label(label) => f.write_str(label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<WordCount>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Caption {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hashtags: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CaptionSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captions: Option<Vec<Caption>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VideoMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titles: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// The structured output of one generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "content_type", content = "data", rename_all = "snake_case")]
pub enum GenerationResult {
    Blog(BlogPost),
    InstagramCaption(CaptionSet),
    #[serde(rename = "youtube_metadata")]
    YouTubeMetadata(VideoMetadata),
}

impl GenerationResult {
    /// Decodes a raw service payload into the variant for `content_type`.
    pub fn from_value(
        content_type: ContentType,
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        Ok(match content_type {
            ContentType::Blog => GenerationResult::Blog(serde_json::from_value(value)?),
            ContentType::InstagramCaption => {
                GenerationResult::InstagramCaption(serde_json::from_value(value)?)
            }
            ContentType::YouTubeMetadata => {
                GenerationResult::YouTubeMetadata(serde_json::from_value(value)?)
            }
        })
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            GenerationResult::Blog(_) => ContentType::Blog,
            GenerationResult::InstagramCaption(_) => ContentType::InstagramCaption,
            GenerationResult::YouTubeMetadata(_) => ContentType::YouTubeMetadata,
        }
    }

    /// The text a copy-to-clipboard action on `target` would write.
    ///
    /// Returns `None` when the target does not exist in this result.
    pub fn copy_text(&self, target: CopyTarget) -> Option<String> {
        match (self, target) {
            (GenerationResult::Blog(post), CopyTarget::Post) => {
                Some(format!("{}\n\n{}", post.title, post.content))
            }
            (GenerationResult::InstagramCaption(set), CopyTarget::Caption(index)) => set
                .captions
                .as_ref()?
                .get(index)
                .map(|c| format!("{}\n\n{}", c.text, c.hashtags)),
            (GenerationResult::YouTubeMetadata(meta), CopyTarget::Title(index)) => {
                meta.titles.as_ref()?.get(index).cloned()
            }
            (GenerationResult::YouTubeMetadata(meta), CopyTarget::Description) => {
                Some(meta.description.clone())
            }
            (GenerationResult::YouTubeMetadata(meta), CopyTarget::Tags) => {
                Some(meta.tags.as_deref().unwrap_or_default().join(", "))
            }
            _ => None,
        }
    }
}

/// The parts of a result that offer a copy-to-clipboard action.
///
/// Indices are zero-based; the textual form (`caption:1`) is one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Post,
    Caption(usize),
    Title(usize),
    Description,
    Tags,
}

impl FromStr for CopyTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        let (name, index) = match s.split_once(':') {
            Some((name, index)) => {
                let n: usize = index
                    .parse()
                    .map_err(|_| format!("Invalid index in copy target '{s}'"))?;
                if n == 0 {
                    return Err(format!("Copy target indices start at 1, got '{s}'"));
                }
                (name.to_string(), Some(n - 1))
            }
            None => (s.clone(), None),
        };
        match (name.as_str(), index) {
            ("post", None) => Ok(CopyTarget::Post),
            ("caption", Some(i)) => Ok(CopyTarget::Caption(i)),
            ("caption", None) => Ok(CopyTarget::Caption(0)),
            ("title", Some(i)) => Ok(CopyTarget::Title(i)),
            ("title", None) => Ok(CopyTarget::Title(0)),
            ("description", None) => Ok(CopyTarget::Description),
            ("tags", None) => Ok(CopyTarget::Tags),
            _ => Err(format!("Unknown copy target '{s}'")),
        }
    }
}
