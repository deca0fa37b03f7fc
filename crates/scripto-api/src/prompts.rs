use scripto_types::ContentType;

pub const GENERIC_INSTRUCTION: &str = "You are an AI assistant that helps create content.";

const DEFAULT_SCRIPT_PLATFORM: &str = "YouTube";
const DEFAULT_SOCIAL_PLATFORM: &str = "Instagram";
const DEFAULT_DURATION: &str = "5";

/// Build the system instruction sent ahead of the creator's topic.
///
/// Blank `platform`/`duration` values fall back to the same defaults as
/// missing ones. Ideas and inspiration have no dedicated instruction.
pub fn system_instruction(
    content_type: ContentType,
    topic: &str,
    platform: Option<&str>,
    duration: Option<&str>,
) -> String {
    let platform = platform.map(str::trim).filter(|p| !p.is_empty());
    let duration = duration.map(str::trim).filter(|d| !d.is_empty());

    match content_type {
        ContentType::Script => {
            let platform = platform.unwrap_or(DEFAULT_SCRIPT_PLATFORM);
            let duration = duration.unwrap_or(DEFAULT_DURATION);
            format!(
                "You are a professional script writer specialized in creating {platform} scripts.\n\
                 Create a well-structured script for a {duration} minute video about \"{topic}\".\n\
                 Include an engaging introduction, 3-5 main points with explanations, and a strong conclusion with call-to-action.\n\
                 Format the script with clear sections using markdown headings."
            )
        }
        ContentType::Caption => {
            let platform = platform.unwrap_or(DEFAULT_SOCIAL_PLATFORM);
            format!(
                "You are a social media expert who creates engaging captions for {platform}.\n\
                 Create a captivating caption about \"{topic}\" that will drive engagement.\n\
                 Include 2-3 sentences of content, 2-3 relevant emojis, and a question to encourage comments."
            )
        }
        ContentType::Hashtags => {
            let platform = platform.unwrap_or(DEFAULT_SOCIAL_PLATFORM);
            format!(
                "You are a hashtag specialist for {platform}.\n\
                 Generate 20-25 relevant, trending, and specific hashtags related to \"{topic}\".\n\
                 Include a mix of popular and niche hashtags to maximize reach."
            )
        }
        ContentType::Bio => {
            let platform = platform.unwrap_or(DEFAULT_SOCIAL_PLATFORM);
            format!(
                "You are a professional bio writer for {platform}.\n\
                 Create an engaging profile bio about \"{topic}\" that will attract followers.\n\
                 Include relevant emojis, a clear value proposition, and a call-to-action.\n\
                 Format the bio to fit within the platform's character limits."
            )
        }
        ContentType::Ideas | ContentType::Inspiration => GENERIC_INSTRUCTION.to_string(),
    }
}
