//! SCRIPTO fallback content synthesizer.
//!
//! Produces plausible script, caption, hashtag, bio and idea text from
//! templates when the remote model cannot be reached. All randomness comes
//! from the synthesizer's own RNG, so a seeded synthesizer is fully
//! deterministic:
//!
//! ```
//! use scripto_fallback::Synthesizer;
//! use scripto_types::{ContentType, GenerationRequest};
//!
//! let req = GenerationRequest::new("sourdough", ContentType::Caption).with_platform("Instagram");
//! let a = Synthesizer::seeded(7).with_year(2025).synthesize(&req);
//! let b = Synthesizer::seeded(7).with_year(2025).synthesize(&req);
//! assert_eq!(a, b);
//! assert!(a.contains("sourdough"));
//! ```

pub mod hashtags;
pub mod ideas;
pub mod platforms;
mod sample;

use chrono::Datelike;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use scripto_types::{ContentType, GenerationRequest};

use crate::ideas::IDEAS_PER_RESPONSE;
use crate::sample::{pick, sample};

const DEFAULT_DURATION: &str = "5";

const SCRIPT_HOOKS: &[&str] = &[
    "Welcome to today's video where we'll dive deep into {topic}. This is a game-changer that you don't want to miss!",
    "Did you know that understanding {topic} can completely transform your approach? Let me break this down for you...",
    "Most people get {topic} wrong in the first five minutes. Stick around and you won't.",
    "What if everything you knew about {topic} was only half the story?",
];

const SCRIPT_CLOSERS: &[&str] = &[
    "If you found this helpful, make sure to like and subscribe for more content like this. What's your experience with {topic}? Let me know in the comments below!",
    "That's a wrap on {topic}! Hit subscribe so you don't miss the next one, and tell me in the comments which point surprised you most.",
    "Now it's your turn: try one of these {topic} tips this week and share your results in the comments. See you in the next video!",
];

const CAPTION_BODIES: &[&str] = &[
    "This {topic} guide will change the way you think about success.",
    "Everything I wish I knew when I started with {topic}, in one post.",
    "Small steps with {topic} add up faster than you think.",
];

const BIO_TAGLINES: &[&str] = &[
    "Turning passion into profit",
    "Sharing what actually works",
    "Real results, no fluff",
];

/// Template-based generator with an injected random source.
///
/// Production code builds one with [`Synthesizer::from_os_rng`]; tests use
/// [`Synthesizer::seeded`] or [`Synthesizer::with_rng`].
pub struct Synthesizer<R = StdRng> {
    rng: R,
    year: i32,
}

impl Synthesizer<StdRng> {
    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Synthesizer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng, year: chrono::Utc::now().year() }
    }

    /// Pin the year used by time-sensitive idea templates.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn synthesize(&mut self, req: &GenerationRequest) -> String {
        let topic = req.topic.trim();
        match req.content_type {
            ContentType::Script => self.script(topic, req.platform(), req.duration()),
            ContentType::Caption => self.caption(topic, req.platform()),
            ContentType::Hashtags => self.hashtags(topic, req.platform(), req.category()),
            ContentType::Bio => self.bio(topic, req.platform()),
            ContentType::Ideas => self.ideas(
                topic,
                req.platform(),
                req.format(),
                req.category(),
                req.audience(),
            ),
            ContentType::Inspiration => self.inspiration(
                topic,
                req.platform(),
                req.format(),
                req.category(),
                req.audience(),
            ),
        }
    }

    pub fn script(&mut self, topic: &str, platform: Option<&str>, duration: Option<&str>) -> String {
        let platform = platforms::display_name(platform, "YouTube");
        let duration = duration.unwrap_or(DEFAULT_DURATION);
        let hook = fill(pick(&mut self.rng, SCRIPT_HOOKS), topic);
        let closer = fill(pick(&mut self.rng, SCRIPT_CLOSERS), topic);

        format!(
            "# {topic} - {platform} Script ({duration} minutes)\n\n\
             ## Introduction\n{hook}\n\n\
             ## Main Content\n\n\
             ### Key Point 1\nThe first thing you need to understand about {topic} is where it actually starts paying off.\n\n\
             ### Key Point 2\nHere's what most people get wrong about {topic}, and how to avoid it.\n\n\
             ### Key Point 3\nThe secret to mastering {topic} lies in consistent, deliberate practice.\n\n\
             ## Conclusion\n{closer}\n\n\
             ---\n*Demo content generated offline by SCRIPTO*"
        )
    }

    pub fn caption(&mut self, topic: &str, platform: Option<&str>) -> String {
        let emoji = platforms::caption_emoji(platform);
        let nudge = platforms::caption_nudge(platform);
        let body = fill(pick(&mut self.rng, CAPTION_BODIES), topic);
        let tags = self.hashtags(topic, platform, None);

        format!(
            "{emoji} Ready to dive into {topic}? Here's everything you need to know!\n\n\
             {body} {nudge} ✨\n\n\
             What's your biggest challenge with {topic}? Drop a comment below! 👇\n\n\
             {tags}"
        )
    }

    /// Space-joined `#Tag` line. Topic-derived tags always come first.
    pub fn hashtags(&mut self, topic: &str, platform: Option<&str>, category: Option<&str>) -> String {
        let tags = hashtags::build(&mut self.rng, topic, platform, category);
        hashtags::format_line(&tags)
    }

    pub fn bio(&mut self, topic: &str, platform: Option<&str>) -> String {
        let tagline = pick(&mut self.rng, BIO_TAGLINES);
        let line = platforms::bio_line(platform);

        format!(
            "🚀 {topic} Expert & Content Creator\n\
             ✨ Helping you master {topic} one post at a time\n\
             📈 {tagline}\n\
             🎯 {line}\n\
             👇 Get my free {topic} guide below"
        )
    }

    pub fn ideas(
        &mut self,
        topic: &str,
        platform: Option<&str>,
        format: Option<&str>,
        category: Option<&str>,
        audience: Option<&str>,
    ) -> String {
        let platform_name = platforms::display_name(platform, "any platform");
        let format = format.unwrap_or("Any format");
        let category_name = category.unwrap_or("General");
        let audience = audience.unwrap_or("your audience");

        let intro = platforms::ideas_intro(platform, format, category_name);
        let picked: Vec<String> = sample(&mut self.rng, ideas::idea_pool(format), IDEAS_PER_RESPONSE)
            .into_iter()
            .map(|idea| fill(idea, topic))
            .collect();
        let approach = ideas::SUGGESTED_APPROACH
            .iter()
            .map(|step| format!("- {}", fill(step, topic)))
            .collect::<Vec<_>>()
            .join("\n");
        let tags = self.hashtags(topic, platform, category);

        format!(
            "{intro}\n\n\
             {list}\n\n\
             Category: {category_name}\n\
             Target Audience: People interested in {topic} ({audience})\n\
             Platform: {platform_name}\n\
             Format: {format}\n\n\
             Suggested Approach:\n{approach}\n\n\
             Popular Hashtags to Use:\n{tags}",
            list = ideas::numbered(&picked, "\n"),
        )
    }

    pub fn inspiration(
        &mut self,
        topic: &str,
        platform: Option<&str>,
        format: Option<&str>,
        category: Option<&str>,
        audience: Option<&str>,
    ) -> String {
        let platform_name = platforms::display_name(platform, "any platform");
        let format = format.unwrap_or("Short-form");
        let category_name = category.unwrap_or("General");
        let audience = audience.unwrap_or("your audience");
        let year = self.year.to_string();

        let intro = platforms::ideas_intro(platform, format, category_name);
        let picked: Vec<String> = sample(&mut self.rng, ideas::inspiration_pool(format), IDEAS_PER_RESPONSE)
            .into_iter()
            .map(|idea| {
                fill(idea, topic)
                    .replace("{category}", category_name)
                    .replace("{year}", &year)
            })
            .collect();
        let posting_time = platforms::posting_time(platform);
        let tags = self.hashtags(topic, platform, category);

        format!(
            "{intro}\n\n\
             {list}\n\n\
             ✅ Target Audience: People interested in {topic} ({audience})\n\
             ✅ Platform: {platform_name}\n\
             ✅ Format: {format}\n\n\
             💡 Content Strategy Tips:\n\
             • Post consistently at peak times for {platform_name} (research shows {posting_time})\n\
             • Use eye-catching thumbnails/covers featuring {topic}\n\
             • Include CTAs asking viewers what they'd like to learn about {topic}\n\
             • Create a content series to build anticipation and return viewers\n\
             • Repurpose successful {format} content across other platforms\n\n\
             Popular Hashtags to Use:\n{tags}\n\n\
             Now pick ONE idea and start creating! 🚀",
            list = ideas::numbered(&picked, "\n\n"),
        )
    }
}

fn fill(template: &str, topic: &str) -> String {
    template.replace("{topic}", topic)
}
