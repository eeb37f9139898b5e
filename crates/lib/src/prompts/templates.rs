//
//! # Default Generator Templates
//!
//! The hardcoded instruction templates for each generator. They can be
//! overridden per generator by the server's `config.yml`.
//!
//! Placeholders: `{topic}`, `{audience}`, `{tone}`

// --- Blog Post ---
pub const BLOG_POST_TEMPLATE: &str = r#"Write a comprehensive, well-structured blog post about: "{topic}".

Target audience: {audience}
Tone: {tone}

The blog post should include:
1. An engaging title
2. A compelling introduction hook
3. Well-organized sections with subheadings
4. Actionable insights and practical tips
5. A strong conclusion with call-to-action
6. Estimated reading time

Make it informative, engaging, and valuable to readers. Aim for 800-1200 words."#;

// --- Instagram Captions ---
pub const INSTAGRAM_CAPTION_TEMPLATE: &str = r#"Create 3 engaging Instagram captions for a post about: "{topic}".

Target audience: {audience}
Tone guidance: {tone}

Each caption should:
- Be engaging and authentic
- Include relevant emojis
- Have 5-8 relevant hashtags
- Be different in tone (professional, casual, creative)
- Be optimized for Instagram engagement

Format each caption with the main text first, then hashtags at the end."#;

// --- YouTube Titles & Description ---
pub const YOUTUBE_METADATA_TEMPLATE: &str = r#"Create YouTube content for a video about: "{topic}".

Target audience: {audience}
Tone: {tone}

Generate:
1. 5 click-worthy, SEO-optimized titles (under 60 characters)
2. A comprehensive video description with:
   - Engaging introduction
   - Video breakdown/timestamps
   - Call-to-action
   - Relevant keywords
   - Social media links placeholders
3. 10-15 relevant tags for SEO

Make it engaging and optimized for YouTube's algorithm."#;
