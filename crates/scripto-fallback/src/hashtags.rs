use rand::Rng;

use crate::platforms;
use crate::sample::sample;

const GENERAL_TAGS: &[&str] = &[
    "ContentCreator",
    "DigitalMarketing",
    "CreatorEconomy",
    "OnlineContent",
    "CreatorTips",
    "SocialMediaTips",
];

/// Tags sampled from the generic pool per call.
pub const GENERAL_PICK: usize = 3;
/// Tags sampled from the platform pool per call.
pub const PLATFORM_PICK: usize = 3;
pub const MAX_TOPIC_TAGS: usize = 6;
pub const MAX_CATEGORY_TAGS: usize = 3;

/// Fewest tags produced for a topic containing at least one word character.
pub const MIN_TAGS: usize = 1 + GENERAL_PICK;
pub const MAX_TAGS: usize = MAX_TOPIC_TAGS + MAX_CATEGORY_TAGS + GENERAL_PICK + PLATFORM_PICK;

/// Tags derived directly from the topic.
///
/// Words longer than two characters become one tag each; a multi-word topic
/// also yields its CamelCase join. A topic made only of short words still
/// yields the join, so any topic with a word character produces a tag.
pub fn topic_tags(topic: &str) -> Vec<String> {
    let parts: Vec<String> = topic
        .split_whitespace()
        .map(strip_non_word)
        .filter(|w| !w.is_empty())
        .collect();

    let mut tags: Vec<String> = parts
        .iter()
        .filter(|w| w.chars().count() > 2)
        .map(|w| capitalize(w))
        .collect();

    if parts.len() > 1 || tags.is_empty() {
        let joined: String = parts.iter().map(|w| capitalize(w)).collect();
        if !joined.is_empty() {
            tags.push(joined);
        }
    }

    dedup_case_insensitive(&mut tags);
    tags.truncate(MAX_TOPIC_TAGS);
    tags
}

fn category_tags(category: Option<&str>) -> Vec<String> {
    let Some(category) = category else {
        return Vec::new();
    };
    let mut tags: Vec<String> = category
        .split_whitespace()
        .map(strip_non_word)
        .filter(|w| w.chars().count() > 2)
        .map(|w| capitalize(&w))
        .collect();
    tags.truncate(MAX_CATEGORY_TAGS);
    tags
}

/// Topic and category tags, then samples from the generic and platform
/// pools. Pool tags already present are excluded before sampling.
pub fn build<R: Rng + ?Sized>(
    rng: &mut R,
    topic: &str,
    platform: Option<&str>,
    category: Option<&str>,
) -> Vec<String> {
    let mut tags = topic_tags(topic);
    tags.extend(category_tags(category));
    dedup_case_insensitive(&mut tags);

    let general = unused(GENERAL_TAGS, &tags);
    tags.extend(sample(rng, &general, GENERAL_PICK));

    let platform_pool = unused(platforms::hashtag_pool(platform), &tags);
    tags.extend(sample(rng, &platform_pool, PLATFORM_PICK));

    tags
}

pub fn format_line(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn unused(pool: &[&str], taken: &[String]) -> Vec<String> {
    pool.iter()
        .filter(|tag| !taken.iter().any(|t| t.eq_ignore_ascii_case(tag)))
        .map(|tag| tag.to_string())
        .collect()
}

fn strip_non_word(word: &str) -> String {
    word.chars().filter(|c| c.is_alphanumeric() || *c == '_').collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn dedup_case_insensitive(tags: &mut Vec<String>) {
    let mut seen: Vec<String> = Vec::with_capacity(tags.len());
    tags.retain(|tag| {
        let key = tag.to_lowercase();
        if seen.contains(&key) {
            false
        } else {
            seen.push(key);
            true
        }
    });
}
