//! Idea-list templates for the ideas and inspiration generators.

/// Ideas selected per response.
pub const IDEAS_PER_RESPONSE: usize = 5;

pub(crate) const SHORT_FORM_IDEAS: &[&str] = &[
    "\"{topic} Myths Debunked\" - An educational series correcting misconceptions in your field.",
    "\"Day in the Life of a {topic} Expert\" - Share your daily routine with behind-the-scenes insights.",
    "\"Top 5 {topic} Tips You Never Knew\" - Quick actionable advice that viewers can immediately apply.",
    "\"{topic} Transformation\" - Before and after showcases with dramatic results.",
    "\"{topic} Reaction\" - React to trending content in your field with expert commentary.",
    "\"{topic} in 30 Seconds\" - One idea, one hook, one takeaway per clip.",
    "\"{topic} Mistakes to Avoid\" - Rapid-fire list of the errors beginners make most.",
    "\"Rating {topic} Trends\" - Score what's popular right now and explain why.",
    "\"{topic} Challenge\" - Invite viewers to try one small task and tag you.",
    "\"{topic} Q&A Shorts\" - Answer one follower question per video.",
];

pub(crate) const LONG_FORM_IDEAS: &[&str] = &[
    "\"The Complete Guide to {topic}\" - An in-depth tutorial breaking down complex concepts into understandable segments.",
    "\"{topic} Case Study\" - Analyze a successful example and extract valuable lessons for your audience.",
    "\"{topic} Interview Series\" - Connect with other experts and share diverse perspectives.",
    "\"{topic} Masterclass\" - Teach advanced techniques with detailed explanations and demonstrations.",
    "\"{topic} Review Marathon\" - Evaluate multiple products or approaches in one comprehensive video.",
    "\"The History of {topic}\" - Trace how the field got where it is today and where it is heading.",
    "\"{topic} From Scratch\" - Follow a complete beginner project from start to finish.",
    "\"{topic} Myths vs. Research\" - Compare popular claims against what the evidence says.",
    "\"Building a {topic} Routine\" - Walk through a weekly plan viewers can copy.",
    "\"{topic} Live Workshop\" - Work through audience problems in real time.",
];

pub(crate) const SHORT_FORM_INSPIRATION: &[&str] = &[
    "\"{topic} in 60 Seconds\" - Quick educational breakdown that hooks viewers instantly",
    "\"{category} Myths BUSTED\" - Debunk common misconceptions in your industry",
    "\"Day in the Life: {topic} Edition\" - Behind-the-scenes content that builds connection",
    "\"{topic} Before & After\" - Show impressive transformations related to your content",
    "\"{topic} Hacks Nobody Tells You About\" - Share insider tips that provide immediate value",
    "\"React to {topic} Trends\" - Give your expert take on what's currently viral",
    "\"{topic} Quick Start Guide\" - Beginner-friendly introduction to your topic",
    "\"{category} Questions Answered\" - Address FAQs in a rapid-fire format",
];

pub(crate) const LONG_FORM_INSPIRATION: &[&str] = &[
    "\"The Ultimate Guide to {topic}\" - Comprehensive breakdown with actionable steps",
    "\"{topic} Case Study: From Beginner to Expert\" - Detailed analysis with real examples",
    "\"{category} Masterclass: {topic} Edition\" - In-depth tutorial covering advanced techniques",
    "\"{topic} Deep Dive\" - Explore nuanced aspects most creators overlook",
    "\"{topic} Interview Series\" - Feature experts sharing diverse perspectives",
    "\"{category} Review Roundup: {topic} Edition\" - Compare multiple approaches or products",
    "\"Building a {topic} Strategy for {year}\" - Timely, forward-looking content",
    "\"{topic} Workshop\" - Interactive session that breaks complex concepts into digestible parts",
];

pub(crate) const SUGGESTED_APPROACH: &[&str] = &[
    "Research trending topics in the {topic} space",
    "Create an engaging intro that hooks viewers in the first 3 seconds",
    "Include clear calls-to-action throughout",
    "Use relevant keywords in your title and description",
    "Post consistently at optimal times for your audience",
];

/// Idea pool for a content format, chosen the same way as
/// [`inspiration_pool`].
pub(crate) fn idea_pool(format: &str) -> &'static [&'static str] {
    if is_short_form(format) {
        SHORT_FORM_IDEAS
    } else {
        LONG_FORM_IDEAS
    }
}

/// Inspiration pool for a content format: short-form formats get the quick
/// ideas, everything else the long-form ones.
pub(crate) fn inspiration_pool(format: &str) -> &'static [&'static str] {
    if is_short_form(format) {
        SHORT_FORM_INSPIRATION
    } else {
        LONG_FORM_INSPIRATION
    }
}

fn is_short_form(format: &str) -> bool {
    format.to_lowercase().contains("short")
}

pub(crate) fn numbered(items: &[String], separator: &str) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {item}", i + 1))
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pools_are_larger_than_a_response() {
        assert_eq!(SHORT_FORM_IDEAS.len(), 10);
        assert_eq!(LONG_FORM_IDEAS.len(), 10);
        assert!(SHORT_FORM_INSPIRATION.len() > IDEAS_PER_RESPONSE);
        assert!(LONG_FORM_INSPIRATION.len() > IDEAS_PER_RESPONSE);
    }

    #[test]
    fn format_selects_pool() {
        assert_eq!(inspiration_pool("Short-form"), SHORT_FORM_INSPIRATION);
        assert_eq!(inspiration_pool("SHORTS"), SHORT_FORM_INSPIRATION);
        assert_eq!(inspiration_pool("Podcast"), LONG_FORM_INSPIRATION);
        assert_eq!(idea_pool("YouTube Shorts"), SHORT_FORM_IDEAS);
        assert_eq!(idea_pool("Long-form"), LONG_FORM_IDEAS);
    }

    #[test]
    fn numbered_starts_at_one() {
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(numbered(&items, "\n"), "1. a\n2. b");
    }
}
