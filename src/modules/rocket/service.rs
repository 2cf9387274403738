use super::dto::RocketMetadata;
use rand::seq::IndexedRandom;

pub const TITLES: [&str; 5] = [
    "🔥 This changed everything!",
    "Wait for it... 😱",
    "POV: You just discovered this",
    "Nobody talks about this enough",
    "This is why you need to see this",
];

pub const DESCRIPTIONS: [&str; 5] = [
    "You won't believe what happens next! Watch until the end 👀",
    "This is the content you've been waiting for ✨",
    "Drop a comment if you agree! 💬",
    "Save this for later, you'll thank me 🙏",
    "Tag someone who needs to see this 👇",
];

pub const HASHTAGS: [&str; 10] = [
    "fyp", "viral", "trending", "shorts", "reels", "explore", "foryou", "trend", "video", "content",
];

pub const HASHTAG_COUNT: usize = 5;
pub const SUGGESTED_TIME: &str = "6:00 PM - 9:00 PM";

pub struct RocketService;

impl RocketService {
    /// Picks social copy at random. Inputs do not influence the result.
    pub fn generate() -> RocketMetadata {
        let mut rng = rand::rng();

        RocketMetadata {
            title: TITLES.choose(&mut rng).copied().unwrap_or(TITLES[0]).to_string(),
            description: DESCRIPTIONS.choose(&mut rng).copied().unwrap_or(DESCRIPTIONS[0]).to_string(),
            hashtags: HASHTAGS
                .choose_multiple(&mut rng, HASHTAG_COUNT)
                .map(|tag| tag.to_string())
                .collect(),
            suggested_time: SUGGESTED_TIME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn hashtags_are_distinct_picks_from_the_pool() {
        for _ in 0..50 {
            let meta = RocketService::generate();
            let unique: HashSet<_> = meta.hashtags.iter().collect();

            assert_eq!(meta.hashtags.len(), HASHTAG_COUNT);
            assert_eq!(unique.len(), HASHTAG_COUNT);
            assert!(meta.hashtags.iter().all(|t| HASHTAGS.contains(&t.as_str())));
        }
    }

    #[test]
    fn copy_comes_from_fixed_pools() {
        let meta = RocketService::generate();

        assert!(TITLES.contains(&meta.title.as_str()));
        assert!(DESCRIPTIONS.contains(&meta.description.as_str()));
        assert_eq!(meta.suggested_time, SUGGESTED_TIME);
    }
}
