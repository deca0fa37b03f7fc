//! Platform-keyed lookup tables.
//!
//! Every lookup goes through [`Platform::parse`], which lower-cases and trims
//! its input, so all tables match case-insensitively. Unknown or blank
//! platform names map to `None` and every table has a neutral answer for it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    YouTube,
    Instagram,
    TikTok,
    LinkedIn,
    Twitter,
    Facebook,
}

impl Platform {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "youtube" | "yt" | "shorts" | "youtube shorts" => Some(Self::YouTube),
            "instagram" | "ig" | "reels" | "instagram reels" => Some(Self::Instagram),
            "tiktok" | "tik tok" => Some(Self::TikTok),
            "linkedin" => Some(Self::LinkedIn),
            "twitter" | "x" => Some(Self::Twitter),
            "facebook" | "fb" => Some(Self::Facebook),
            _ => None,
        }
    }

    fn from_opt(raw: Option<&str>) -> Option<Self> {
        raw.and_then(Self::parse)
    }
}

/// Display name for a platform. Sub-formats like "reels" keep their own
/// label; unrecognised names are echoed back trimmed; blank falls back to
/// `default`.
pub fn display_name(raw: Option<&str>, default: &str) -> String {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return default.to_string();
    };
    let label = match raw.to_lowercase().as_str() {
        "shorts" | "youtube shorts" => "YouTube Shorts",
        "reels" | "instagram reels" => "Instagram Reels",
        _ => match Platform::parse(raw) {
            Some(Platform::YouTube) => "YouTube",
            Some(Platform::Instagram) => "Instagram",
            Some(Platform::TikTok) => "TikTok",
            Some(Platform::LinkedIn) => "LinkedIn",
            Some(Platform::Twitter) => "Twitter",
            Some(Platform::Facebook) => "Facebook",
            None => return raw.to_string(),
        },
    };
    label.to_string()
}

pub fn hashtag_pool(raw: Option<&str>) -> &'static [&'static str] {
    match Platform::from_opt(raw) {
        Some(Platform::Instagram) => &["Instagram", "IGCreator", "InstagramGrowth", "InstagramStrategy", "Reels"],
        Some(Platform::TikTok) => &["TikTok", "TikTokCreator", "FYP", "ForYouPage", "TikTokGrowth"],
        Some(Platform::YouTube) => &["YouTube", "YouTuber", "YTCreator", "YouTubeTips", "VideoContent"],
        Some(Platform::LinkedIn) => &["LinkedIn", "LinkedInContent", "LinkedInCreator", "ProfessionalContent"],
        Some(Platform::Twitter) => &["Twitter", "TwitterTips", "TweetSmarter", "TwitterGrowth", "ThreadWriter"],
        Some(Platform::Facebook) => &["Facebook", "FacebookTips", "FacebookGroups", "CommunityBuilding"],
        None => &[],
    }
}

pub fn posting_time(raw: Option<&str>) -> &'static str {
    match Platform::from_opt(raw) {
        Some(Platform::Instagram) => "weekdays between 11am-2pm and 7pm-9pm",
        Some(Platform::TikTok) => "evenings between 7pm-11pm, especially Wednesday through Friday",
        Some(Platform::YouTube) => "weekends between 9am-11am or Thursday/Friday evenings",
        Some(Platform::LinkedIn) => "Tuesday through Thursday between 8am-2pm",
        Some(Platform::Twitter) => "weekdays between 8am-10am and 6pm-7pm",
        Some(Platform::Facebook) => "weekdays between 9am-1pm",
        None => "midday and evenings when your audience is most active",
    }
}

pub fn bio_line(raw: Option<&str>) -> &'static str {
    match Platform::from_opt(raw) {
        Some(Platform::Instagram) => "Join 10K+ followers on this journey",
        Some(Platform::TikTok) => "New videos every week, hit follow",
        Some(Platform::YouTube) => "Fresh videos every week, subscribe below",
        Some(Platform::LinkedIn) => "Let's connect and grow together",
        Some(Platform::Twitter) => "Daily tips and threads",
        Some(Platform::Facebook) => "Join our growing community",
        None => "Follow along for more",
    }
}

pub fn caption_emoji(raw: Option<&str>) -> &'static str {
    match Platform::from_opt(raw) {
        Some(Platform::Instagram) => "📸",
        Some(Platform::TikTok) => "🔥",
        Some(Platform::YouTube) => "🎬",
        Some(Platform::LinkedIn) => "💼",
        Some(Platform::Twitter) => "🐦",
        Some(Platform::Facebook) => "👋",
        None => "🚀",
    }
}

pub fn caption_nudge(raw: Option<&str>) -> &'static str {
    match Platform::from_opt(raw) {
        Some(Platform::Instagram) => "Swipe to see the key insights that made all the difference!",
        Some(Platform::TikTok) => "Watch till the end for the best tip!",
        Some(Platform::YouTube) => "The full breakdown is in the video!",
        Some(Platform::LinkedIn) => "Here are the lessons I wish I had learned sooner.",
        Some(Platform::Twitter) => "Thread below 🧵",
        Some(Platform::Facebook) => "Share this with someone who needs it today!",
        None => "Save this post so you can come back to it later!",
    }
}

/// Heading for the inspiration list.
pub fn ideas_intro(raw: Option<&str>, format: &str, category: &str) -> String {
    match Platform::from_opt(raw) {
        Some(Platform::Instagram) => format!("✨ Instagram {format} Content Ideas for {category}:"),
        Some(Platform::TikTok) => format!("🔥 TikTok {format} Content Ideas for {category}:"),
        Some(Platform::YouTube) => format!("🎬 YouTube {format} Content Ideas for {category}:"),
        Some(Platform::LinkedIn) => format!("💼 LinkedIn {format} Content Ideas for {category}:"),
        Some(Platform::Twitter) => format!("🐦 Twitter {format} Content Ideas for {category}:"),
        Some(Platform::Facebook) => format!("👋 Facebook {format} Content Ideas for {category}:"),
        None => {
            let platform = display_name(raw, "any platform");
            format!("Content Ideas for {category} on {platform}:")
        }
    }
}
